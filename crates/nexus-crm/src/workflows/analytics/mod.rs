//! Dashboard and global analytics roll-ups.

pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use report::{AnalyticsOverview, DashboardStats, LeadSource};
pub use router::analytics_router;
pub use service::{AnalyticsService, ListCount};
