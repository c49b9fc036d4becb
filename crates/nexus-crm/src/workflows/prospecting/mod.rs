//! Lead and company prospecting: filtering, paging, bulk actions.

pub mod domain;
pub mod export;
pub mod filter;
pub mod import;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    CampaignStatus, Company, CompanyDraft, CompanyId, CompanyTier, CompanyView, EmailStatus, Lead,
    LeadDraft, LeadId, LeadStatus, LeadView, LinkedInStatus, SavedSearch,
};
pub use filter::{
    filter_prospects, CompanyDirectory, EntityType, FilterContext, FilterState, IntentBucket,
    ManagementLevel, Prospect, ViewMode,
};
pub use repository::ProspectRepository;
pub use router::prospecting_router;
pub use service::{
    ExportRequest, ProspectingError, ProspectingService, SearchRequest, SearchResults,
};
pub use session::{paginate, Page, ProspectingSession, PAGE_SIZE};
