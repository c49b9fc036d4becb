use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{
    CampaignId, CampaignState, CampaignStats, LinkedInCampaign, Sequence, SequenceId,
    SequenceStats, SequenceStep, SequenceView, StepAction, StepDraft, StepId,
};
use super::finder::LeadFinderQuery;
use super::repository::OutreachRepository;
use super::steps::{self, StepOrderError};
use crate::store::{next_id, RepositoryError};
use crate::workflows::lists::{ListRepository, MembershipIndex};
use crate::workflows::notices::{publish, Notice, Notifier};
use crate::workflows::prospecting::domain::{CampaignStatus, LeadId, LeadView};
use crate::workflows::prospecting::filter::CompanyDirectory;
use crate::workflows::prospecting::repository::ProspectRepository;

pub const DEFAULT_CONNECT_NOTE: &str = "Hi {{firstName}}, let's connect!";
pub const QUICK_CONNECT_NOTE: &str =
    "Hi {{firstName}}, I'd like to join your professional network.";
pub const AUTO_CONNECT_NOTE: &str = "Hi {{firstName}}, I saw your profile and wanted to connect.";
pub const DEFAULT_AUDIENCE: &str = "General";

/// Email sequences and LinkedIn campaigns, plus lead enrollment.
pub struct OutreachService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSequence {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<StepDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrollmentOutcome {
    pub enrolled: Vec<LeadId>,
    pub missing: Vec<LeadId>,
    /// Set when a campaign lacked a connection request and one was appended.
    pub added_connection_step: Option<SequenceStep>,
}

impl<R, N> OutreachService<R, N>
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub fn sequences(&self) -> Result<Vec<SequenceView>, OutreachError> {
        let sequences = self.repository.sequences()?;
        Ok(sequences.into_iter().map(SequenceView::from).collect())
    }

    /// Case-insensitive name search.
    pub fn search_sequences(&self, query: &str) -> Result<Vec<SequenceView>, OutreachError> {
        let query = query.trim().to_lowercase();
        let sequences = self.sequences()?;
        Ok(sequences
            .into_iter()
            .filter(|view| query.is_empty() || view.sequence.name.to_lowercase().contains(&query))
            .collect())
    }

    pub fn sequence(&self, id: &SequenceId) -> Result<SequenceView, OutreachError> {
        Ok(self.require_sequence(id)?.into())
    }

    /// New sequences start inactive with zeroed stats.
    pub fn create_sequence(&self, request: NewSequence) -> Result<SequenceView, OutreachError> {
        let name = require_name(&request.name)?;
        let sequence = self.repository.insert_sequence(Sequence {
            id: SequenceId(next_id("seq")),
            name,
            active: false,
            stats: SequenceStats::default(),
            steps: steps::from_drafts(request.steps),
        })?;

        info!(sequence_id = %sequence.id, "sequence created");
        publish(self.notifier.as_ref(), Notice::success("New campaign created"));
        Ok(sequence.into())
    }

    pub fn toggle_sequence(&self, id: &SequenceId) -> Result<SequenceView, OutreachError> {
        let mut sequence = self.require_sequence(id)?;
        sequence.active = !sequence.active;
        self.repository.update_sequence(sequence.clone())?;

        let notice = if sequence.active {
            Notice::success("Sequence Activated")
        } else {
            Notice::info("Sequence Paused")
        };
        publish(self.notifier.as_ref(), notice);
        Ok(sequence.into())
    }

    pub fn add_sequence_step(
        &self,
        id: &SequenceId,
        draft: StepDraft,
    ) -> Result<SequenceStep, OutreachError> {
        let mut sequence = self.require_sequence(id)?;
        let step = steps::append(&mut sequence.steps, draft);
        self.repository.update_sequence(sequence)?;
        publish(self.notifier.as_ref(), Notice::success("Step added successfully"));
        Ok(step)
    }

    pub fn remove_sequence_step(
        &self,
        id: &SequenceId,
        step_id: &StepId,
    ) -> Result<SequenceView, OutreachError> {
        let mut sequence = self.require_sequence(id)?;
        if !steps::remove(&mut sequence.steps, step_id) {
            return Err(OutreachError::UnknownStep(step_id.clone()));
        }
        self.repository.update_sequence(sequence.clone())?;
        publish(self.notifier.as_ref(), Notice::info("Step removed"));
        Ok(sequence.into())
    }

    pub fn delete_sequence(&self, id: &SequenceId) -> Result<(), OutreachError> {
        self.require_sequence(id)?;
        self.repository.delete_sequence(id)?;
        publish(self.notifier.as_ref(), Notice::success("Sequence deleted"));
        Ok(())
    }

    /// Mark each known lead's campaign status `Active`.
    pub fn enroll_in_sequence(
        &self,
        id: &SequenceId,
        lead_ids: &[LeadId],
    ) -> Result<EnrollmentOutcome, OutreachError> {
        if lead_ids.is_empty() {
            return Err(OutreachError::NoLeads);
        }
        self.require_sequence(id)?;

        let outcome = self.activate_leads(lead_ids)?;
        publish(
            self.notifier.as_ref(),
            Notice::success(format!(
                "{} leads added to sequence!",
                outcome.enrolled.len()
            )),
        );
        Ok(outcome)
    }

    pub fn campaigns(&self) -> Result<Vec<LinkedInCampaign>, OutreachError> {
        Ok(self.repository.campaigns()?)
    }

    pub fn campaign(&self, id: &CampaignId) -> Result<LinkedInCampaign, OutreachError> {
        self.require_campaign(id)
    }

    /// New campaigns start paused with a visit, a one-day wait, and a
    /// connection request.
    pub fn create_campaign(&self, name: &str) -> Result<LinkedInCampaign, OutreachError> {
        let name = require_name(name)?;
        let steps = steps::from_drafts(vec![
            StepDraft {
                delay_days: None,
                variant_label: None,
                action: StepAction::LinkedinVisit,
            },
            StepDraft {
                delay_days: Some(1),
                variant_label: None,
                action: StepAction::Wait,
            },
            StepDraft {
                delay_days: None,
                variant_label: None,
                action: StepAction::connect(DEFAULT_CONNECT_NOTE),
            },
        ]);

        let campaign = self.repository.insert_campaign(LinkedInCampaign {
            id: CampaignId(next_id("li")),
            name,
            status: CampaignState::Paused,
            target_audience: DEFAULT_AUDIENCE.to_string(),
            stats: CampaignStats::default(),
            steps,
        })?;

        info!(campaign_id = %campaign.id, "campaign created");
        publish(
            self.notifier.as_ref(),
            Notice::success("Campaign created successfully"),
        );
        Ok(campaign)
    }

    pub fn toggle_campaign(&self, id: &CampaignId) -> Result<LinkedInCampaign, OutreachError> {
        let mut campaign = self.require_campaign(id)?;
        campaign.status = campaign.status.toggled();
        self.repository.update_campaign(campaign.clone())?;

        let verb = match campaign.status {
            CampaignState::Active => "Resumed",
            CampaignState::Paused | CampaignState::Draft => "Paused",
        };
        publish(
            self.notifier.as_ref(),
            Notice::info(format!("Campaign {verb}")),
        );
        Ok(campaign)
    }

    pub fn add_campaign_step(
        &self,
        id: &CampaignId,
        draft: StepDraft,
    ) -> Result<SequenceStep, OutreachError> {
        let mut campaign = self.require_campaign(id)?;
        let step = steps::append(&mut campaign.steps, draft);
        self.repository.update_campaign(campaign)?;
        publish(self.notifier.as_ref(), Notice::success("Step added"));
        Ok(step)
    }

    /// Append a connection request with the stock note.
    pub fn quick_add_connection(&self, id: &CampaignId) -> Result<SequenceStep, OutreachError> {
        let mut campaign = self.require_campaign(id)?;
        let step = steps::append(
            &mut campaign.steps,
            StepDraft {
                delay_days: None,
                variant_label: None,
                action: StepAction::connect(QUICK_CONNECT_NOTE),
            },
        );
        self.repository.update_campaign(campaign)?;
        publish(
            self.notifier.as_ref(),
            Notice::success("Connection Request step added!"),
        );
        Ok(step)
    }

    pub fn remove_campaign_step(
        &self,
        id: &CampaignId,
        step_id: &StepId,
    ) -> Result<LinkedInCampaign, OutreachError> {
        let mut campaign = self.require_campaign(id)?;
        if !steps::remove(&mut campaign.steps, step_id) {
            return Err(OutreachError::UnknownStep(step_id.clone()));
        }
        self.repository.update_campaign(campaign.clone())?;
        Ok(campaign)
    }

    /// Replace the whole step list, e.g. after a reorder.
    pub fn replace_campaign_steps(
        &self,
        id: &CampaignId,
        new_steps: Vec<SequenceStep>,
    ) -> Result<LinkedInCampaign, OutreachError> {
        let mut campaign = self.require_campaign(id)?;
        campaign.steps = steps::normalize(new_steps)?;
        self.repository.update_campaign(campaign.clone())?;
        Ok(campaign)
    }

    pub fn delete_campaign(&self, id: &CampaignId) -> Result<(), OutreachError> {
        self.require_campaign(id)?;
        self.repository.delete_campaign(id)?;
        publish(self.notifier.as_ref(), Notice::info("Campaign deleted"));
        Ok(())
    }

    /// Enroll leads in a campaign. A campaign without a connection request
    /// gets one appended first; the two writes are not rolled back together.
    pub fn enroll_in_campaign(
        &self,
        id: &CampaignId,
        lead_ids: &[LeadId],
    ) -> Result<EnrollmentOutcome, OutreachError> {
        if lead_ids.is_empty() {
            return Err(OutreachError::NoLeads);
        }
        let mut campaign = self.require_campaign(id)?;

        let mut added_connection_step = None;
        if !steps::has_connection_request(&campaign.steps) {
            let step = steps::append(
                &mut campaign.steps,
                StepDraft {
                    delay_days: None,
                    variant_label: None,
                    action: StepAction::connect(AUTO_CONNECT_NOTE),
                },
            );
            self.repository.update_campaign(campaign.clone())?;
            publish(
                self.notifier.as_ref(),
                Notice::info("Added missing Connection Request step to campaign"),
            );
            added_connection_step = Some(step);
        }

        let mut outcome = self.activate_leads(lead_ids)?;
        outcome.added_connection_step = added_connection_step;
        publish(
            self.notifier.as_ref(),
            Notice::success(format!(
                "{} leads added to \"{}\"",
                outcome.enrolled.len(),
                campaign.name
            )),
        );
        Ok(outcome)
    }

    /// Leads for building a LinkedIn audience.
    pub fn find_leads(&self, query: &LeadFinderQuery) -> Result<Vec<LeadView>, OutreachError> {
        let leads = self.repository.leads()?;
        let companies = self.repository.companies()?;
        let directory = CompanyDirectory::new(&companies);
        let memberships = MembershipIndex::from_memberships(self.repository.memberships()?);

        Ok(leads
            .iter()
            .filter(|lead| query.matches(lead, &directory))
            .map(|lead| lead.view(memberships.list_ids(&lead.member())))
            .collect())
    }

    fn activate_leads(&self, lead_ids: &[LeadId]) -> Result<EnrollmentOutcome, OutreachError> {
        let mut outcome = EnrollmentOutcome::default();
        for lead_id in lead_ids {
            match self.repository.lead(lead_id)? {
                Some(mut lead) => {
                    lead.campaign_status = CampaignStatus::Active;
                    self.repository.update_lead(lead)?;
                    outcome.enrolled.push(lead_id.clone());
                }
                None => {
                    warn!(lead_id = %lead_id, "skipping unknown lead during enrollment");
                    outcome.missing.push(lead_id.clone());
                }
            }
        }
        Ok(outcome)
    }

    fn require_sequence(&self, id: &SequenceId) -> Result<Sequence, OutreachError> {
        self.repository
            .sequence(id)?
            .ok_or_else(|| OutreachError::UnknownSequence(id.clone()))
    }

    fn require_campaign(&self, id: &CampaignId) -> Result<LinkedInCampaign, OutreachError> {
        self.repository
            .campaign(id)?
            .ok_or_else(|| OutreachError::UnknownCampaign(id.clone()))
    }
}

fn require_name(name: &str) -> Result<String, OutreachError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OutreachError::EmptyName);
    }
    Ok(name.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum OutreachError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("select at least one lead")]
    NoLeads,
    #[error("sequence {0} does not exist")]
    UnknownSequence(SequenceId),
    #[error("campaign {0} does not exist")]
    UnknownCampaign(CampaignId),
    #[error("step {0} does not exist")]
    UnknownStep(StepId),
    #[error(transparent)]
    StepOrder(#[from] StepOrderError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
