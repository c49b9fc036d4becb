use std::sync::Arc;

use tracing::info;

use super::board::{self, PipelineSummary};
use super::domain::{Deal, DealDraft, DealId, DealStage, MAX_DEAL_VALUE};
use super::repository::DealRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};
use crate::workflows::prospecting::domain::{Lead, LeadId};
use crate::workflows::prospecting::repository::ProspectRepository;

pub struct PipelineService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> PipelineService<R, N>
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub fn deals(&self) -> Result<Vec<Deal>, PipelineError> {
        Ok(self.repository.deals()?)
    }

    pub fn summary(&self) -> Result<PipelineSummary, PipelineError> {
        let deals = self.repository.deals()?;
        Ok(board::summarize(&deals))
    }

    pub fn top_deals(&self, limit: usize) -> Result<Vec<Deal>, PipelineError> {
        let deals = self.repository.deals()?;
        Ok(board::top_deals(&deals, limit))
    }

    /// New deals land in the first column with the lead's name copied on.
    pub fn create(&self, draft: DealDraft) -> Result<Deal, PipelineError> {
        validate(&draft)?;
        let lead = self.require_lead(&draft.lead_id)?;

        let deal = self.repository.insert_deal(Deal {
            id: DealId(next_id("deal")),
            title: draft.title.trim().to_string(),
            value: draft.value,
            stage: DealStage::ToContact,
            lead_id: lead.id,
            lead_name: lead.name,
        })?;

        info!(deal_id = %deal.id, value = deal.value, "deal created");
        publish(
            self.notifier.as_ref(),
            Notice::success("Deal added successfully to pipeline!"),
        );
        Ok(deal)
    }

    /// Edit title, value, and lead. The stage is left alone.
    pub fn update(&self, id: &DealId, draft: DealDraft) -> Result<Deal, PipelineError> {
        validate(&draft)?;
        let existing = self
            .repository
            .deal(id)?
            .ok_or(RepositoryError::NotFound)?;
        let lead = self.require_lead(&draft.lead_id)?;

        let deal = Deal {
            title: draft.title.trim().to_string(),
            value: draft.value,
            lead_id: lead.id,
            lead_name: lead.name,
            ..existing
        };
        self.repository.update_deal(deal.clone())?;
        publish(self.notifier.as_ref(), Notice::success("Deal updated successfully"));
        Ok(deal)
    }

    /// Move a deal to any column; no transition is rejected.
    pub fn move_to_stage(&self, id: &DealId, stage: DealStage) -> Result<Deal, PipelineError> {
        let mut deal = self
            .repository
            .deal(id)?
            .ok_or(RepositoryError::NotFound)?;
        self.repository.update_stage(id, stage)?;
        info!(deal_id = %id, from = deal.stage.key(), to = stage.key(), "deal moved");
        deal.stage = stage;
        Ok(deal)
    }

    pub fn delete(&self, id: &DealId) -> Result<(), PipelineError> {
        self.repository.delete_deal(id)?;
        publish(
            self.notifier.as_ref(),
            Notice::success("Deal removed from pipeline"),
        );
        Ok(())
    }

    fn require_lead(&self, id: &LeadId) -> Result<Lead, PipelineError> {
        self.repository
            .lead(id)?
            .ok_or_else(|| PipelineError::UnknownLead(id.clone()))
    }
}

fn validate(draft: &DealDraft) -> Result<(), PipelineError> {
    if draft.title.trim().is_empty() || draft.value == 0 || draft.lead_id.0.trim().is_empty() {
        return Err(PipelineError::IncompleteDeal);
    }
    if draft.value > MAX_DEAL_VALUE {
        return Err(PipelineError::ValueTooLarge(draft.value));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Please fill in all fields")]
    IncompleteDeal,
    #[error("deal value {0} exceeds the maximum of {max}", max = MAX_DEAL_VALUE)]
    ValueTooLarge(u64),
    #[error("lead {0} does not exist")]
    UnknownLead(LeadId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
