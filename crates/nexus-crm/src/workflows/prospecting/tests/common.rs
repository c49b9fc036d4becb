use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::store::{MemoryStore, UnavailableStore};
use crate::workflows::lists::{ListId, ListMember, ListMembership, MembershipIndex};
use crate::workflows::notices::RecordingNotifier;
use crate::workflows::prospecting::domain::{Company, Lead, LeadId};
use crate::workflows::prospecting::filter::{
    filter_prospects, CompanyDirectory, FilterContext, FilterState,
};
use crate::workflows::prospecting::{prospecting_router, ProspectingService};

pub(super) type MemoryService = ProspectingService<MemoryStore, RecordingNotifier>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryStore::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(ProspectingService::new(store.clone(), notifier.clone()));
    (service, store, notifier)
}

pub(super) fn unavailable_service() -> Arc<ProspectingService<UnavailableStore, RecordingNotifier>> {
    Arc::new(ProspectingService::new(
        Arc::new(UnavailableStore),
        Arc::new(RecordingNotifier::default()),
    ))
}

pub(super) fn router_with_service(service: Arc<MemoryService>) -> axum::Router {
    prospecting_router(service)
}

pub(super) fn demo_leads() -> Vec<Lead> {
    Fixtures::demo().leads
}

pub(super) fn demo_companies() -> Vec<Company> {
    Fixtures::demo().companies
}

pub(super) fn saved_lead(list: &str, lead: &str) -> ListMembership {
    ListMembership {
        list_id: ListId(list.to_string()),
        member: ListMember::Lead(LeadId(lead.to_string())),
    }
}

/// Ids of the demo leads passing `filters` given the membership rows.
pub(super) fn matching_lead_ids(filters: &FilterState, memberships: Vec<ListMembership>) -> Vec<String> {
    let leads = demo_leads();
    let companies = demo_companies();
    let index = MembershipIndex::from_memberships(memberships);
    let directory = CompanyDirectory::new(&companies);
    let context = FilterContext {
        memberships: &index,
        companies: &directory,
    };
    filter_prospects(&leads, filters, &context)
        .into_iter()
        .map(|lead| lead.id.0.clone())
        .collect()
}

pub(super) fn matching_company_ids(
    filters: &FilterState,
    memberships: Vec<ListMembership>,
) -> Vec<String> {
    let companies = demo_companies();
    let index = MembershipIndex::from_memberships(memberships);
    let directory = CompanyDirectory::new(&companies);
    let context = FilterContext {
        memberships: &index,
        companies: &directory,
    };
    filter_prospects(&companies, filters, &context)
        .into_iter()
        .map(|company| company.id.0.clone())
        .collect()
}

pub(super) fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
