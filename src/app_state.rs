use crate::hltv::Hltv;

#[derive(Clone, Debug)]
pub struct AppState {
    pub hltv: Hltv,
}

impl AppState {
    pub fn new(hltv: Hltv) -> Self {
        Self { hltv }
    }
}
