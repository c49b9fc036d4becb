//! Store whose every call fails, for exercising error mapping in tests.

use super::RepositoryError;
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

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct UnavailableStore;

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("store offline".to_string())
}

impl ProspectRepository for UnavailableStore {
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError> {
        Err(unavailable())
    }

    fn lead(&self, _id: &LeadId) -> Result<Option<Lead>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_lead(&self, _lead: Lead) -> Result<Lead, RepositoryError> {
        Err(unavailable())
    }

    fn update_lead(&self, _lead: Lead) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_lead(&self, _id: &LeadId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        Err(unavailable())
    }

    fn company(&self, _id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_company(&self, _company: Company) -> Result<Company, RepositoryError> {
        Err(unavailable())
    }

    fn update_company(&self, _company: Company) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_company(&self, _id: &CompanyId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn saved_searches(&self) -> Result<Vec<SavedSearch>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_saved_search(&self, _search: SavedSearch) -> Result<SavedSearch, RepositoryError> {
        Err(unavailable())
    }
}

impl ListRepository for UnavailableStore {
    fn lists(&self) -> Result<Vec<UserList>, RepositoryError> {
        Err(unavailable())
    }

    fn list(&self, _id: &ListId) -> Result<Option<UserList>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_list(&self, _list: UserList) -> Result<UserList, RepositoryError> {
        Err(unavailable())
    }

    fn delete_list(&self, _id: &ListId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn memberships(&self) -> Result<Vec<ListMembership>, RepositoryError> {
        Err(unavailable())
    }

    fn add_membership(&self, _membership: ListMembership) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    fn remove_membership(&self, _membership: &ListMembership) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    fn drop_list_memberships(&self, _id: &ListId) -> Result<usize, RepositoryError> {
        Err(unavailable())
    }

    fn drop_member(&self, _member: &ListMember) -> Result<usize, RepositoryError> {
        Err(unavailable())
    }
}

impl DealRepository for UnavailableStore {
    fn deals(&self) -> Result<Vec<Deal>, RepositoryError> {
        Err(unavailable())
    }

    fn deal(&self, _id: &DealId) -> Result<Option<Deal>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_deal(&self, _deal: Deal) -> Result<Deal, RepositoryError> {
        Err(unavailable())
    }

    fn update_deal(&self, _deal: Deal) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn update_stage(&self, _id: &DealId, _stage: DealStage) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_deal(&self, _id: &DealId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

impl OutreachRepository for UnavailableStore {
    fn sequences(&self) -> Result<Vec<Sequence>, RepositoryError> {
        Err(unavailable())
    }

    fn sequence(&self, _id: &SequenceId) -> Result<Option<Sequence>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_sequence(&self, _sequence: Sequence) -> Result<Sequence, RepositoryError> {
        Err(unavailable())
    }

    fn update_sequence(&self, _sequence: Sequence) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_sequence(&self, _id: &SequenceId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn campaigns(&self) -> Result<Vec<LinkedInCampaign>, RepositoryError> {
        Err(unavailable())
    }

    fn campaign(&self, _id: &CampaignId) -> Result<Option<LinkedInCampaign>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_campaign(
        &self,
        _campaign: LinkedInCampaign,
    ) -> Result<LinkedInCampaign, RepositoryError> {
        Err(unavailable())
    }

    fn update_campaign(&self, _campaign: LinkedInCampaign) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_campaign(&self, _id: &CampaignId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

impl ScheduleRepository for UnavailableStore {
    fn meetings(&self) -> Result<Vec<Meeting>, RepositoryError> {
        Err(unavailable())
    }

    fn meeting(&self, _id: &MeetingId) -> Result<Option<Meeting>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_meeting(&self, _meeting: Meeting) -> Result<Meeting, RepositoryError> {
        Err(unavailable())
    }

    fn update_meeting(&self, _meeting: Meeting) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_meeting(&self, _id: &MeetingId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn tasks(&self) -> Result<Vec<Task>, RepositoryError> {
        Err(unavailable())
    }

    fn task(&self, _id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_task(&self, _task: Task) -> Result<Task, RepositoryError> {
        Err(unavailable())
    }

    fn update_task(&self, _task: Task) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn delete_task(&self, _id: &TaskId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

impl InboxRepository for UnavailableStore {
    fn emails(&self) -> Result<Vec<EmailMessage>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_email(&self, _email: EmailMessage) -> Result<EmailMessage, RepositoryError> {
        Err(unavailable())
    }

    fn delete_email(&self, _id: &EmailId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    fn linkedin_messages(&self) -> Result<Vec<LinkedInMessage>, RepositoryError> {
        Err(unavailable())
    }
}

impl ContentRepository for UnavailableStore {
    fn posts(&self) -> Result<Vec<ContentPost>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_post(&self, _post: ContentPost) -> Result<ContentPost, RepositoryError> {
        Err(unavailable())
    }

    fn delete_post(&self, _id: &PostId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

impl AccountRepository for UnavailableStore {
    fn profile(&self, _auth_id: &str) -> Result<Option<UserProfile>, RepositoryError> {
        Err(unavailable())
    }

    fn insert_profile(&self, _profile: UserProfile) -> Result<UserProfile, RepositoryError> {
        Err(unavailable())
    }

    fn update_profile(&self, _profile: UserProfile) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}
