use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::lists::{ListId, ListMember};

/// Highest intent score a record may carry.
pub const MAX_INTENT_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Interested,
    Closed,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Interested => "Interested",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Verified,
    Guessed,
    Unavailable,
}

/// Outreach enrollment state shown on a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Completed,
    Paused,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkedInStatus {
    Connected,
    Pending,
    #[default]
    NotConnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyTier {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

/// Individual prospect contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub email_status: Option<EmailStatus>,
    #[serde(default)]
    pub intent_score: Option<u8>,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub campaign_status: CampaignStatus,
    #[serde(default)]
    pub linkedin_status: LinkedInStatus,
    #[serde(default)]
    pub is_contact_revealed: bool,
}

impl Lead {
    pub fn member(&self) -> ListMember {
        ListMember::Lead(self.id.clone())
    }

    /// Public representation; contact fields stay locked until revealed.
    pub fn view(&self, lists: Vec<ListId>) -> LeadView {
        let (email, phone) = if self.is_contact_revealed {
            (Some(self.email.clone()), self.phone.clone())
        } else {
            (None, None)
        };

        LeadView {
            id: self.id.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            email,
            phone,
            status: self.status,
            avatar_url: self.avatar_url.clone(),
            notes: self.notes.clone(),
            linkedin_url: self.linkedin_url.clone(),
            tags: self.tags.clone(),
            email_status: self.email_status,
            intent_score: self.intent_score,
            signals: self.signals.clone(),
            campaign_status: self.campaign_status,
            linkedin_status: self.linkedin_status,
            is_contact_revealed: self.is_contact_revealed,
            lists,
        }
    }
}

/// Lead as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadView {
    pub id: LeadId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub avatar_url: String,
    pub notes: Option<String>,
    pub linkedin_url: Option<String>,
    pub tags: Vec<String>,
    pub email_status: Option<EmailStatus>,
    pub intent_score: Option<u8>,
    pub signals: Vec<String>,
    pub campaign_status: CampaignStatus,
    pub linkedin_status: LinkedInStatus,
    pub is_contact_revealed: bool,
    pub lists: Vec<ListId>,
}

/// Organization record; leads reference it by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub employees: String,
    pub location: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub tier: Option<CompanyTier>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub intent_score: Option<u8>,
    #[serde(default)]
    pub signals: Vec<String>,
}

impl Company {
    pub fn member(&self) -> ListMember {
        ListMember::Company(self.id.clone())
    }

    pub fn view(&self, lists: Vec<ListId>) -> CompanyView {
        CompanyView {
            company: self.clone(),
            lists,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    #[serde(flatten)]
    pub company: Company,
    pub lists: Vec<ListId>,
}

/// Payload for manually creating or editing a lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadDraft {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<LeadStatus>,
    pub avatar_url: String,
    pub notes: Option<String>,
    pub linkedin_url: Option<String>,
    pub tags: Vec<String>,
    pub email_status: Option<EmailStatus>,
    pub intent_score: Option<u8>,
    pub signals: Vec<String>,
}

impl LeadDraft {
    pub(crate) fn into_lead(self, id: LeadId) -> Lead {
        Lead {
            id,
            name: self.name.trim().to_string(),
            title: self.title,
            company: self.company,
            location: self.location,
            email: self.email,
            phone: self.phone,
            status: self.status.unwrap_or_default(),
            avatar_url: self.avatar_url,
            notes: self.notes,
            linkedin_url: self.linkedin_url,
            tags: self.tags,
            email_status: self.email_status,
            intent_score: self.intent_score.map(clamp_intent),
            signals: self.signals,
            campaign_status: CampaignStatus::None,
            linkedin_status: LinkedInStatus::NotConnected,
            is_contact_revealed: false,
        }
    }
}

/// Payload for manually creating or editing a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    pub employees: String,
    pub location: String,
    pub revenue: String,
    pub logo_url: String,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub tech_stack: Vec<String>,
    pub tier: Option<CompanyTier>,
    pub tags: Vec<String>,
    pub intent_score: Option<u8>,
    pub signals: Vec<String>,
}

impl CompanyDraft {
    pub(crate) fn into_company(self, id: CompanyId) -> Company {
        Company {
            id,
            name: self.name.trim().to_string(),
            industry: self.industry,
            employees: self.employees,
            location: self.location,
            revenue: self.revenue,
            logo_url: self.logo_url,
            website: self.website,
            linkedin_url: self.linkedin_url,
            description: self.description,
            phone: self.phone,
            tech_stack: self.tech_stack,
            tier: self.tier,
            tags: self.tags,
            intent_score: self.intent_score.map(clamp_intent),
            signals: self.signals,
        }
    }
}

pub(crate) fn clamp_intent(score: u8) -> u8 {
    score.min(MAX_INTENT_SCORE)
}

/// A named, reusable filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub filters: super::filter::FilterState,
}
