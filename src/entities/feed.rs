use serde::{Deserialize, Serialize};

use super::{Country, StreamCategory, ThreadCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullStream {
    pub name: String,
    pub category: Option<StreamCategory>,
    pub country: Country,
    pub link: String,
    pub viewers: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPreview {
    pub link: String,
    pub title: String,
    pub comments: Option<u32>,
    /// Milliseconds since the epoch; absent when the date text is unreadable.
    pub date: Option<i64>,
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub title: String,
    pub link: String,
    pub replies: Option<u32>,
    pub category: Option<ThreadCategory>,
}
