use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::prospecting::domain::LeadId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DealId(pub String);

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kanban column a deal sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStage {
    ToContact,
    InProgress,
    Closed,
}

impl DealStage {
    pub const ALL: [DealStage; 3] = [Self::ToContact, Self::InProgress, Self::Closed];

    /// Win probability in whole percent.
    pub const fn probability_percent(self) -> u64 {
        match self {
            Self::ToContact => 20,
            Self::InProgress => 60,
            Self::Closed => 100,
        }
    }

    pub fn probability(self) -> f64 {
        self.probability_percent() as f64 / 100.0
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ToContact => "To Contact",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ToContact => "to-contact",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.key().eq_ignore_ascii_case(value.trim()))
    }
}

/// Largest accepted deal value, in whole currency units.
pub const MAX_DEAL_VALUE: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    /// Whole currency units.
    pub value: u64,
    pub stage: DealStage,
    pub lead_id: LeadId,
    pub lead_name: String,
}

/// Fields accepted when creating or editing a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDraft {
    pub title: String,
    pub value: u64,
    pub lead_id: LeadId,
}
