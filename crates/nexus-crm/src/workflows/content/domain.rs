use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::prospecting::domain::LeadId;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
}

/// A calendar slot; `day` counts from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPost {
    pub id: PostId,
    pub title: String,
    pub platform: Platform,
    pub day: u8,
    pub time: String,
}

impl ContentPost {
    pub fn weekday(&self) -> Option<&'static str> {
        WEEKDAYS.get(usize::from(self.day)).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub platform: Platform,
    pub day: u8,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailBrief {
    pub topic: String,
    pub tone: String,
    pub recipient: String,
    /// Overrides the configured key for this request.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IcebreakerRequest {
    pub lead_id: LeadId,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefineRequest {
    pub original: String,
    pub instruction: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub text: String,
    /// True when no key was available and canned text was returned.
    pub mock: bool,
}
