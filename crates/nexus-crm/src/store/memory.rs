use std::sync::{Mutex, MutexGuard};

use super::RepositoryError;
use crate::fixtures::Fixtures;
use crate::workflows::accounts::{AccountRepository, UserProfile};
use crate::workflows::content::{ContentPost, ContentRepository, PostId};
use crate::workflows::inbox::{EmailId, EmailMessage, InboxRepository, LinkedInMessage};
use crate::workflows::lists::{ListId, ListMember, ListMembership, ListRepository, UserList};
use crate::workflows::outreach::{
    CampaignId, LinkedInCampaign, OutreachRepository, Sequence, SequenceId,
};
use crate::workflows::pipeline::{Deal, DealId, DealRepository, DealStage};
use crate::workflows::prospecting::{
    Company, CompanyId, Lead, LeadId, ProspectRepository, SavedSearch,
};
use crate::workflows::scheduling::{Meeting, MeetingId, ScheduleRepository, Task, TaskId};

/// Process-local store implementing every workflow repository.
///
/// Collections keep insertion order; one mutex guards all of them, so a
/// single repository call is atomic but multi-call workflows are not.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Fixtures>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            state: Mutex::new(fixtures),
        }
    }

    pub fn seeded() -> Self {
        Self::from_fixtures(Fixtures::demo())
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Fixtures {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, Fixtures> {
        self.state.lock().expect("repository mutex poisoned")
    }
}

fn insert_front<T: Clone>(
    items: &mut Vec<T>,
    item: T,
    exists: impl Fn(&T) -> bool,
) -> Result<T, RepositoryError> {
    if items.iter().any(exists) {
        return Err(RepositoryError::Conflict);
    }
    items.insert(0, item.clone());
    Ok(item)
}

fn insert_back<T: Clone>(
    items: &mut Vec<T>,
    item: T,
    exists: impl Fn(&T) -> bool,
) -> Result<T, RepositoryError> {
    if items.iter().any(exists) {
        return Err(RepositoryError::Conflict);
    }
    items.push(item.clone());
    Ok(item)
}

fn replace<T>(items: &mut [T], item: T, same: impl Fn(&T) -> bool) -> Result<(), RepositoryError> {
    let slot = items
        .iter_mut()
        .find(|existing| same(existing))
        .ok_or(RepositoryError::NotFound)?;
    *slot = item;
    Ok(())
}

fn remove<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Result<(), RepositoryError> {
    let before = items.len();
    items.retain(|item| !matches(item));
    if items.len() == before {
        Err(RepositoryError::NotFound)
    } else {
        Ok(())
    }
}

impl ProspectRepository for MemoryStore {
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError> {
        Ok(self.state().leads.clone())
    }

    fn lead(&self, id: &LeadId) -> Result<Option<Lead>, RepositoryError> {
        Ok(self.state().leads.iter().find(|lead| &lead.id == id).cloned())
    }

    fn insert_lead(&self, lead: Lead) -> Result<Lead, RepositoryError> {
        let id = lead.id.clone();
        insert_front(&mut self.state().leads, lead, |existing| existing.id == id)
    }

    fn update_lead(&self, lead: Lead) -> Result<(), RepositoryError> {
        let id = lead.id.clone();
        replace(&mut self.state().leads, lead, |existing| existing.id == id)
    }

    fn delete_lead(&self, id: &LeadId) -> Result<(), RepositoryError> {
        remove(&mut self.state().leads, |lead| &lead.id == id)
    }

    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        Ok(self.state().companies.clone())
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        Ok(self
            .state()
            .companies
            .iter()
            .find(|company| &company.id == id)
            .cloned())
    }

    fn insert_company(&self, company: Company) -> Result<Company, RepositoryError> {
        let id = company.id.clone();
        insert_front(&mut self.state().companies, company, |existing| {
            existing.id == id
        })
    }

    fn update_company(&self, company: Company) -> Result<(), RepositoryError> {
        let id = company.id.clone();
        replace(&mut self.state().companies, company, |existing| {
            existing.id == id
        })
    }

    fn delete_company(&self, id: &CompanyId) -> Result<(), RepositoryError> {
        remove(&mut self.state().companies, |company| &company.id == id)
    }

    fn saved_searches(&self) -> Result<Vec<SavedSearch>, RepositoryError> {
        Ok(self.state().saved_searches.clone())
    }

    fn insert_saved_search(&self, search: SavedSearch) -> Result<SavedSearch, RepositoryError> {
        let id = search.id.clone();
        insert_back(&mut self.state().saved_searches, search, |existing| {
            existing.id == id
        })
    }
}

impl ListRepository for MemoryStore {
    fn lists(&self) -> Result<Vec<UserList>, RepositoryError> {
        Ok(self.state().lists.clone())
    }

    fn list(&self, id: &ListId) -> Result<Option<UserList>, RepositoryError> {
        Ok(self.state().lists.iter().find(|list| &list.id == id).cloned())
    }

    fn insert_list(&self, list: UserList) -> Result<UserList, RepositoryError> {
        let id = list.id.clone();
        insert_back(&mut self.state().lists, list, |existing| existing.id == id)
    }

    fn delete_list(&self, id: &ListId) -> Result<(), RepositoryError> {
        remove(&mut self.state().lists, |list| &list.id == id)
    }

    fn memberships(&self) -> Result<Vec<ListMembership>, RepositoryError> {
        Ok(self.state().memberships.clone())
    }

    fn add_membership(&self, membership: ListMembership) -> Result<bool, RepositoryError> {
        let mut state = self.state();
        if !state.lists.iter().any(|list| list.id == membership.list_id) {
            return Err(RepositoryError::NotFound);
        }
        if state.memberships.contains(&membership) {
            return Ok(false);
        }
        state.memberships.push(membership);
        Ok(true)
    }

    fn remove_membership(&self, membership: &ListMembership) -> Result<bool, RepositoryError> {
        let mut state = self.state();
        let before = state.memberships.len();
        state.memberships.retain(|existing| existing != membership);
        Ok(state.memberships.len() != before)
    }

    fn drop_list_memberships(&self, id: &ListId) -> Result<usize, RepositoryError> {
        let mut state = self.state();
        let before = state.memberships.len();
        state.memberships.retain(|membership| &membership.list_id != id);
        Ok(before - state.memberships.len())
    }

    fn drop_member(&self, member: &ListMember) -> Result<usize, RepositoryError> {
        let mut state = self.state();
        let before = state.memberships.len();
        state.memberships.retain(|membership| &membership.member != member);
        Ok(before - state.memberships.len())
    }
}

impl DealRepository for MemoryStore {
    fn deals(&self) -> Result<Vec<Deal>, RepositoryError> {
        Ok(self.state().deals.clone())
    }

    fn deal(&self, id: &DealId) -> Result<Option<Deal>, RepositoryError> {
        Ok(self.state().deals.iter().find(|deal| &deal.id == id).cloned())
    }

    fn insert_deal(&self, deal: Deal) -> Result<Deal, RepositoryError> {
        let id = deal.id.clone();
        insert_back(&mut self.state().deals, deal, |existing| existing.id == id)
    }

    fn update_deal(&self, deal: Deal) -> Result<(), RepositoryError> {
        let id = deal.id.clone();
        replace(&mut self.state().deals, deal, |existing| existing.id == id)
    }

    fn update_stage(&self, id: &DealId, stage: DealStage) -> Result<(), RepositoryError> {
        let mut state = self.state();
        let deal = state
            .deals
            .iter_mut()
            .find(|deal| &deal.id == id)
            .ok_or(RepositoryError::NotFound)?;
        deal.stage = stage;
        Ok(())
    }

    fn delete_deal(&self, id: &DealId) -> Result<(), RepositoryError> {
        remove(&mut self.state().deals, |deal| &deal.id == id)
    }
}

impl OutreachRepository for MemoryStore {
    fn sequences(&self) -> Result<Vec<Sequence>, RepositoryError> {
        Ok(self.state().sequences.clone())
    }

    fn sequence(&self, id: &SequenceId) -> Result<Option<Sequence>, RepositoryError> {
        Ok(self
            .state()
            .sequences
            .iter()
            .find(|sequence| &sequence.id == id)
            .cloned())
    }

    fn insert_sequence(&self, sequence: Sequence) -> Result<Sequence, RepositoryError> {
        let id = sequence.id.clone();
        insert_back(&mut self.state().sequences, sequence, |existing| {
            existing.id == id
        })
    }

    fn update_sequence(&self, sequence: Sequence) -> Result<(), RepositoryError> {
        let id = sequence.id.clone();
        replace(&mut self.state().sequences, sequence, |existing| {
            existing.id == id
        })
    }

    fn delete_sequence(&self, id: &SequenceId) -> Result<(), RepositoryError> {
        remove(&mut self.state().sequences, |sequence| &sequence.id == id)
    }

    fn campaigns(&self) -> Result<Vec<LinkedInCampaign>, RepositoryError> {
        Ok(self.state().campaigns.clone())
    }

    fn campaign(&self, id: &CampaignId) -> Result<Option<LinkedInCampaign>, RepositoryError> {
        Ok(self
            .state()
            .campaigns
            .iter()
            .find(|campaign| &campaign.id == id)
            .cloned())
    }

    fn insert_campaign(
        &self,
        campaign: LinkedInCampaign,
    ) -> Result<LinkedInCampaign, RepositoryError> {
        let id = campaign.id.clone();
        insert_front(&mut self.state().campaigns, campaign, |existing| {
            existing.id == id
        })
    }

    fn update_campaign(&self, campaign: LinkedInCampaign) -> Result<(), RepositoryError> {
        let id = campaign.id.clone();
        replace(&mut self.state().campaigns, campaign, |existing| {
            existing.id == id
        })
    }

    fn delete_campaign(&self, id: &CampaignId) -> Result<(), RepositoryError> {
        remove(&mut self.state().campaigns, |campaign| &campaign.id == id)
    }
}

impl ScheduleRepository for MemoryStore {
    fn meetings(&self) -> Result<Vec<Meeting>, RepositoryError> {
        Ok(self.state().meetings.clone())
    }

    fn meeting(&self, id: &MeetingId) -> Result<Option<Meeting>, RepositoryError> {
        Ok(self
            .state()
            .meetings
            .iter()
            .find(|meeting| &meeting.id == id)
            .cloned())
    }

    fn insert_meeting(&self, meeting: Meeting) -> Result<Meeting, RepositoryError> {
        let id = meeting.id.clone();
        insert_back(&mut self.state().meetings, meeting, |existing| {
            existing.id == id
        })
    }

    fn update_meeting(&self, meeting: Meeting) -> Result<(), RepositoryError> {
        let id = meeting.id.clone();
        replace(&mut self.state().meetings, meeting, |existing| {
            existing.id == id
        })
    }

    fn delete_meeting(&self, id: &MeetingId) -> Result<(), RepositoryError> {
        remove(&mut self.state().meetings, |meeting| &meeting.id == id)
    }

    fn tasks(&self) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.state().tasks.clone())
    }

    fn task(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self.state().tasks.iter().find(|task| &task.id == id).cloned())
    }

    fn insert_task(&self, task: Task) -> Result<Task, RepositoryError> {
        let id = task.id.clone();
        insert_back(&mut self.state().tasks, task, |existing| existing.id == id)
    }

    fn update_task(&self, task: Task) -> Result<(), RepositoryError> {
        let id = task.id.clone();
        replace(&mut self.state().tasks, task, |existing| existing.id == id)
    }

    fn delete_task(&self, id: &TaskId) -> Result<(), RepositoryError> {
        remove(&mut self.state().tasks, |task| &task.id == id)
    }
}

impl InboxRepository for MemoryStore {
    fn emails(&self) -> Result<Vec<EmailMessage>, RepositoryError> {
        Ok(self.state().emails.clone())
    }

    fn insert_email(&self, email: EmailMessage) -> Result<EmailMessage, RepositoryError> {
        let id = email.id.clone();
        insert_front(&mut self.state().emails, email, |existing| existing.id == id)
    }

    fn delete_email(&self, id: &EmailId) -> Result<(), RepositoryError> {
        remove(&mut self.state().emails, |email| &email.id == id)
    }

    fn linkedin_messages(&self) -> Result<Vec<LinkedInMessage>, RepositoryError> {
        Ok(self.state().linkedin_messages.clone())
    }
}

impl ContentRepository for MemoryStore {
    fn posts(&self) -> Result<Vec<ContentPost>, RepositoryError> {
        Ok(self.state().posts.clone())
    }

    fn insert_post(&self, post: ContentPost) -> Result<ContentPost, RepositoryError> {
        let id = post.id.clone();
        insert_back(&mut self.state().posts, post, |existing| existing.id == id)
    }

    fn delete_post(&self, id: &PostId) -> Result<(), RepositoryError> {
        remove(&mut self.state().posts, |post| &post.id == id)
    }
}

impl AccountRepository for MemoryStore {
    fn profile(&self, auth_id: &str) -> Result<Option<UserProfile>, RepositoryError> {
        Ok(self
            .state()
            .profiles
            .iter()
            .find(|profile| profile.auth_id == auth_id)
            .cloned())
    }

    fn insert_profile(&self, profile: UserProfile) -> Result<UserProfile, RepositoryError> {
        let auth_id = profile.auth_id.clone();
        insert_back(&mut self.state().profiles, profile, |existing| {
            existing.auth_id == auth_id
        })
    }

    fn update_profile(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let auth_id = profile.auth_id.clone();
        replace(&mut self.state().profiles, profile, |existing| {
            existing.auth_id == auth_id
        })
    }
}
