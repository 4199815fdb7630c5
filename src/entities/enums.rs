use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMap {
    #[serde(rename = "tba")]
    Tba,
    #[serde(rename = "de_train")]
    Train,
    #[serde(rename = "de_cbble")]
    Cobblestone,
    #[serde(rename = "de_inferno")]
    Inferno,
    #[serde(rename = "de_cache")]
    Cache,
    #[serde(rename = "de_mirage")]
    Mirage,
    #[serde(rename = "de_overpass")]
    Overpass,
    #[serde(rename = "de_dust2")]
    Dust2,
    #[serde(rename = "de_nuke")]
    Nuke,
    #[serde(rename = "de_tuscan")]
    Tuscan,
    #[serde(rename = "de_vertigo")]
    Vertigo,
    #[serde(rename = "de_season")]
    Season,
    #[serde(rename = "de_ancient")]
    Ancient,
    #[serde(rename = "de_anubis")]
    Anubis,
    #[serde(rename = "default")]
    Default,
}

impl GameMap {
    /// Short code used in listing rows, e.g. `"d2"`.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim() {
            "tba" => Self::Tba,
            "trn" => Self::Train,
            "cbl" => Self::Cobblestone,
            "inf" => Self::Inferno,
            "cch" => Self::Cache,
            "mrg" => Self::Mirage,
            "ovp" => Self::Overpass,
            "d2" => Self::Dust2,
            "nuke" => Self::Nuke,
            "tcn" => Self::Tuscan,
            "vtx" => Self::Vertigo,
            "ssn" => Self::Season,
            "anc" => Self::Ancient,
            "anb" => Self::Anubis,
            _ => Self::Default,
        }
    }

    /// Display name used on stats pages, e.g. `"Dust2"`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "TBA" => Self::Tba,
            "Train" => Self::Train,
            "Cobblestone" => Self::Cobblestone,
            "Inferno" => Self::Inferno,
            "Cache" => Self::Cache,
            "Mirage" => Self::Mirage,
            "Overpass" => Self::Overpass,
            "Dust2" => Self::Dust2,
            "Nuke" => Self::Nuke,
            "Tuscan" => Self::Tuscan,
            "Vertigo" => Self::Vertigo,
            "Season" => Self::Season,
            "Ancient" => Self::Ancient,
            "Anubis" => Self::Anubis,
            _ => Self::Default,
        }
    }

    /// Value of the `map`/`maps` query filter.
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Tba => "tba",
            Self::Train => "de_train",
            Self::Cobblestone => "de_cbble",
            Self::Inferno => "de_inferno",
            Self::Cache => "de_cache",
            Self::Mirage => "de_mirage",
            Self::Overpass => "de_overpass",
            Self::Dust2 => "de_dust2",
            Self::Nuke => "de_nuke",
            Self::Tuscan => "de_tuscan",
            Self::Vertigo => "de_vertigo",
            Self::Season => "de_season",
            Self::Ancient => "de_ancient",
            Self::Anubis => "de_anubis",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Major,
    InternationalLan,
    RegionalLan,
    LocalLan,
    Online,
    Other,
}

impl EventType {
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim() {
            "Major" => Some(Self::Major),
            "Intl. LAN" => Some(Self::InternationalLan),
            "Reg. LAN" => Some(Self::RegionalLan),
            "Local LAN" => Some(Self::LocalLan),
            "Online" => Some(Self::Online),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Value of the `eventType` archive filter.
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::InternationalLan => "INTLLAN",
            Self::RegionalLan => "REGIONALLAN",
            Self::LocalLan => "LOCALLAN",
            Self::Online => "ONLINE",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "Lan")]
    Lan,
    #[serde(rename = "Online")]
    Online,
    #[serde(rename = "BigEvents")]
    BigEvents,
    #[serde(rename = "Majors")]
    Majors,
}

impl MatchType {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Lan => "Lan",
            Self::Online => "Online",
            Self::BigEvents => "BigEvents",
            Self::Majors => "Majors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingFilter {
    Top5,
    Top10,
    Top20,
    Top30,
    Top50,
}

impl RankingFilter {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Top5 => "Top5",
            Self::Top10 => "Top10",
            Self::Top20 => "Top20",
            Self::Top30 => "Top30",
            Self::Top50 => "Top50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestOfFilter {
    #[serde(rename = "1")]
    Bo1,
    #[serde(rename = "3")]
    Bo3,
    #[serde(rename = "5")]
    Bo5,
}

impl BestOfFilter {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Bo1 => "1",
            Self::Bo3 => "3",
            Self::Bo5 => "5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsMatchType {
    Lan,
    Online,
}

impl ResultsMatchType {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Lan => "Lan",
            Self::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Highlights,
    Demo,
    Vod,
    Stats,
}

impl ContentFilter {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Highlights => "highlights",
            Self::Demo => "demo",
            Self::Vod => "vod",
            Self::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameType {
    Csgo,
    Cs16,
    Cs2,
}

impl GameType {
    pub fn filter_value(self) -> &'static str {
        match self {
            Self::Csgo => "CSGO",
            Self::Cs16 => "CS16",
            Self::Cs2 => "CS2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamCategory {
    #[serde(rename = "Top player")]
    TopPlayer,
    #[serde(rename = "Caster")]
    Caster,
    #[serde(rename = "Female Player")]
    FemalePlayer,
}

impl StreamCategory {
    pub fn from_title(title: &str) -> Option<Self> {
        match title.trim() {
            "Top player" => Some(Self::TopPlayer),
            "Caster" => Some(Self::Caster),
            "Female Player" => Some(Self::FemalePlayer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadCategory {
    Cs,
    Match,
    News,
}

impl ThreadCategory {
    /// Reads the category from an activity class such as `"newsCat"`.
    pub fn from_class(class: &str) -> Option<Self> {
        match class.strip_suffix("Cat")? {
            "cs" => Some(Self::Cs),
            "match" => Some(Self::Match),
            "news" => Some(Self::News),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamPlayerType {
    Coach,
    Starter,
    Substitute,
    Benched,
}

impl TeamPlayerType {
    pub fn from_status(text: &str) -> Option<Self> {
        match text.trim() {
            "STARTER" => Some(Self::Starter),
            "BENCHED" => Some(Self::Benched),
            "SUBSTITUTE" => Some(Self::Substitute),
            _ => None,
        }
    }
}
