use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::workflows::prospecting::domain::LeadId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeetingId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wall-clock format for meeting start times.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingKind {
    Zoom,
    #[serde(rename = "Google Meet")]
    GoogleMeet,
    Phone,
    #[serde(rename = "In-Person")]
    InPerson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`, validated on write.
    pub time: String,
    pub duration_minutes: u32,
    pub kind: MeetingKind,
    #[serde(default)]
    pub lead_id: Option<LeadId>,
    #[serde(default)]
    pub lead_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Meeting {
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()
    }

    /// Chronological order: date, then start time.
    pub fn chronological(a: &Meeting, b: &Meeting) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| match (a.start_time(), b.start_time()) {
                (Some(left), Some(right)) => left.cmp(&right),
                _ => a.time.cmp(&b.time),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    pub kind: MeetingKind,
    #[serde(default)]
    pub lead_id: Option<LeadId>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_duration() -> u32 {
    30
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Call,
    Email,
    Linkedin,
    Todo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// ISO date or a relative word such as `Today`.
    pub due: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub kind: TaskKind,
    #[serde(default)]
    pub related_id: Option<String>,
    #[serde(default)]
    pub related_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub due: String,
    pub priority: TaskPriority,
    pub kind: TaskKind,
    #[serde(default)]
    pub related_id: Option<String>,
    #[serde(default)]
    pub related_name: Option<String>,
}
