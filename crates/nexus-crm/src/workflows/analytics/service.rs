use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::report::{self, AnalyticsOverview, DashboardStats};
use crate::store::RepositoryError;
use crate::workflows::lists::{ListRepository, MembershipIndex};
use crate::workflows::outreach::OutreachRepository;
use crate::workflows::pipeline::DealRepository;
use crate::workflows::prospecting::ProspectRepository;
use crate::workflows::scheduling::ScheduleRepository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCount {
    pub list_id: String,
    pub name: String,
    pub members: usize,
}

/// Read-only roll-ups across every workflow.
pub struct AnalyticsService<R> {
    repository: Arc<R>,
}

impl<R> AnalyticsService<R>
where
    R: DealRepository
        + OutreachRepository
        + ScheduleRepository
        + ProspectRepository
        + ListRepository
        + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn dashboard(&self) -> Result<DashboardStats, RepositoryError> {
        let deals = self.repository.deals()?;
        let sequences = self.repository.sequences()?;
        let tasks = self.repository.tasks()?;
        let meetings = self.repository.meetings()?;
        let stats = report::dashboard(&deals, &sequences, &tasks, meetings.len());
        debug!(pipeline_value = stats.pipeline_value, "dashboard computed");
        Ok(stats)
    }

    pub fn overview(&self) -> Result<AnalyticsOverview, RepositoryError> {
        let deals = self.repository.deals()?;
        let sequences = self.repository.sequences()?;
        let total_leads = self.repository.leads()?.len();
        Ok(report::overview(&deals, &sequences, total_leads))
    }

    /// Members per list, in list order; empty lists report zero.
    pub fn list_counts(&self) -> Result<Vec<ListCount>, RepositoryError> {
        let counts =
            MembershipIndex::from_memberships(self.repository.memberships()?).counts();
        Ok(self
            .repository
            .lists()?
            .into_iter()
            .map(|list| ListCount {
                members: counts.get(&list.id).copied().unwrap_or(0),
                list_id: list.id.0,
                name: list.name,
            })
            .collect())
    }
}
