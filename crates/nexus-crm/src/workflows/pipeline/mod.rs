//! Deal pipeline kanban and its financial roll-up.

pub mod board;
pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use board::{move_deal, summarize, top_deals, PipelineColumn, PipelineSummary};
pub use domain::{Deal, DealDraft, DealId, DealStage, MAX_DEAL_VALUE};
pub use import::{parse_deals, parse_deals_from_path, DealImportError};
pub use repository::DealRepository;
pub use router::pipeline_router;
pub use service::{PipelineError, PipelineService};
