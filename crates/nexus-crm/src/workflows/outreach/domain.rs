use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StepId(pub String);

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a step does. Each variant carries only the fields it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepAction {
    Email {
        content: String,
    },
    Wait,
    Call {
        #[serde(default)]
        notes: Option<String>,
    },
    LinkedinConnect {
        #[serde(default, alias = "content")]
        note: Option<String>,
    },
    LinkedinMessage {
        content: String,
    },
    LinkedinVisit,
    LinkedinLike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepChannel {
    Email,
    Phone,
    Linkedin,
    Delay,
}

impl StepAction {
    pub fn connect(note: impl Into<String>) -> Self {
        Self::LinkedinConnect {
            note: Some(note.into()),
        }
    }

    pub const fn channel(&self) -> StepChannel {
        match self {
            Self::Email { .. } => StepChannel::Email,
            Self::Wait => StepChannel::Delay,
            Self::Call { .. } => StepChannel::Phone,
            Self::LinkedinConnect { .. }
            | Self::LinkedinMessage { .. }
            | Self::LinkedinVisit
            | Self::LinkedinLike => StepChannel::Linkedin,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email { .. } => "Email",
            Self::Wait => "Wait",
            Self::Call { .. } => "Phone Call",
            Self::LinkedinConnect { .. } => "Connection Request",
            Self::LinkedinMessage { .. } => "LinkedIn Message",
            Self::LinkedinVisit => "Profile Visit",
            Self::LinkedinLike => "Like Post",
        }
    }

    pub const fn is_connection_request(&self) -> bool {
        matches!(self, Self::LinkedinConnect { .. })
    }
}

/// One ordered step of a sequence or campaign. Orders run `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub id: StepId,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,
    #[serde(flatten)]
    pub action: StepAction,
}

/// Step as submitted by a client; ids and orders are assigned on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDraft {
    #[serde(default)]
    pub delay_days: Option<u32>,
    #[serde(default)]
    pub variant_label: Option<String>,
    #[serde(flatten)]
    pub action: StepAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStats {
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
}

impl SequenceStats {
    pub fn open_rate(&self) -> u32 {
        percent(self.opened, self.sent)
    }

    pub fn reply_rate(&self) -> u32 {
        percent(self.replied, self.sent)
    }
}

/// Rounded share of `part` in `whole`; zero when nothing was sent.
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub id: SequenceId,
    pub name: String,
    pub active: bool,
    pub stats: SequenceStats,
    pub steps: Vec<SequenceStep>,
}

/// Sequence with derived engagement rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceView {
    #[serde(flatten)]
    pub sequence: Sequence,
    pub open_rate: u32,
    pub reply_rate: u32,
}

impl From<Sequence> for SequenceView {
    fn from(sequence: Sequence) -> Self {
        Self {
            open_rate: sequence.stats.open_rate(),
            reply_rate: sequence.stats.reply_rate(),
            sequence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignState {
    Active,
    Paused,
    Draft,
}

impl CampaignState {
    /// Active campaigns pause; paused or draft campaigns start.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused | Self::Draft => Self::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStats {
    pub sent: u32,
    pub accepted: u32,
    pub replied: u32,
}

impl CampaignStats {
    pub fn acceptance_rate(&self) -> u32 {
        percent(self.accepted, self.sent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInCampaign {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignState,
    pub target_audience: String,
    pub stats: CampaignStats,
    pub steps: Vec<SequenceStep>,
}
