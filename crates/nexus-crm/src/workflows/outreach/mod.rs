//! Multi-step email sequences and LinkedIn campaigns.

pub mod domain;
pub mod finder;
pub mod repository;
pub mod router;
pub mod service;
pub mod steps;

#[cfg(test)]
mod tests;

pub use domain::{
    CampaignId, CampaignState, CampaignStats, LinkedInCampaign, Sequence, SequenceId,
    SequenceStats, SequenceStep, SequenceView, StepAction, StepChannel, StepDraft, StepId,
};
pub use finder::LeadFinderQuery;
pub use repository::OutreachRepository;
pub use router::outreach_router;
pub use service::{
    EnrollmentOutcome, NewSequence, OutreachError, OutreachService, AUTO_CONNECT_NOTE,
    DEFAULT_AUDIENCE, DEFAULT_CONNECT_NOTE, QUICK_CONNECT_NOTE,
};
pub use steps::StepOrderError;
