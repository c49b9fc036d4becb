use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{
    Company, CompanyDraft, CompanyId, CompanyView, Lead, LeadDraft, LeadId, LeadStatus, LeadView,
    SavedSearch,
};
use super::export::{companies_csv, leads_csv, ExportError};
use super::filter::{filter_prospects, CompanyDirectory, EntityType, FilterContext, FilterState};
use super::repository::ProspectRepository;
use super::session::{paginate, Page, ProspectingSession};
use crate::store::{next_id, RepositoryError};
use crate::workflows::lists::{ListMember, ListRepository, MembershipIndex};
use crate::workflows::notices::{publish, Notice, Notifier};

/// Search, CRUD, and bulk actions over leads and companies.
pub struct ProspectingService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub entity_type: EntityType,
    pub filters: FilterState,
    pub page: usize,
    /// Saved search overlaid onto `filters` before searching.
    pub saved_search_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity_type", content = "results", rename_all = "snake_case")]
pub enum SearchResults {
    People(Page<LeadView>),
    Companies(Page<CompanyView>),
}

impl SearchResults {
    pub fn total_items(&self) -> usize {
        match self {
            Self::People(page) => page.total_items,
            Self::Companies(page) => page.total_items,
        }
    }

    /// Ids on the returned page, in display order.
    pub fn page_ids(&self) -> Vec<String> {
        match self {
            Self::People(page) => page.items.iter().map(|lead| lead.id.0.clone()).collect(),
            Self::Companies(page) => page
                .items
                .iter()
                .map(|company| company.company.id.0.clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub entity_type: EntityType,
    pub ids: Vec<String>,
}

impl<R, N> ProspectingService<R, N>
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub fn search(&self, request: SearchRequest) -> Result<SearchResults, ProspectingError> {
        let mut filters = request.filters;
        if let Some(search_id) = request.saved_search_id.as_deref() {
            let saved = self.saved_search(search_id)?;
            filters.overlay(&saved.filters);
        }
        if request.entity_type == EntityType::Companies {
            filters.clear_people_only();
        }
        self.run_search(request.entity_type, &filters, request.page)
    }

    pub fn search_session(
        &self,
        session: &ProspectingSession,
    ) -> Result<SearchResults, ProspectingError> {
        self.run_search(session.entity_type(), session.filters(), session.page())
    }

    fn run_search(
        &self,
        entity_type: EntityType,
        filters: &FilterState,
        page: usize,
    ) -> Result<SearchResults, ProspectingError> {
        let memberships = self.memberships()?;
        let companies = self.repository.companies()?;
        let directory = CompanyDirectory::new(&companies);
        let context = FilterContext {
            memberships: &memberships,
            companies: &directory,
        };

        let results = match entity_type {
            EntityType::People => {
                let leads = self.repository.leads()?;
                let matched: Vec<LeadView> = filter_prospects(&leads, filters, &context)
                    .into_iter()
                    .map(|lead| lead.view(memberships.list_ids(&lead.member())))
                    .collect();
                SearchResults::People(paginate(matched, page))
            }
            EntityType::Companies => {
                let matched: Vec<CompanyView> = filter_prospects(&companies, filters, &context)
                    .into_iter()
                    .map(|company| company.view(memberships.list_ids(&company.member())))
                    .collect();
                SearchResults::Companies(paginate(matched, page))
            }
        };

        debug!(
            ?entity_type,
            total = results.total_items(),
            "prospect search completed"
        );
        Ok(results)
    }

    pub fn lead(&self, id: &LeadId) -> Result<LeadView, ProspectingError> {
        let lead = self.require_lead(id)?;
        let memberships = self.memberships()?;
        Ok(lead.view(memberships.list_ids(&lead.member())))
    }

    pub fn company(&self, id: &CompanyId) -> Result<CompanyView, ProspectingError> {
        let company = self
            .repository
            .company(id)?
            .ok_or(RepositoryError::NotFound)?;
        let memberships = self.memberships()?;
        Ok(company.view(memberships.list_ids(&company.member())))
    }

    /// Manually add a lead; it starts in the `New` status.
    pub fn create_lead(&self, draft: LeadDraft) -> Result<LeadView, ProspectingError> {
        if draft.name.trim().is_empty() {
            return Err(ProspectingError::NameRequired);
        }

        let mut lead = draft.into_lead(LeadId(next_id("lead")));
        lead.status = LeadStatus::New;
        let stored = self.repository.insert_lead(lead)?;
        info!(lead_id = %stored.id, "lead created");
        publish(
            self.notifier.as_ref(),
            Notice::success("Record created manually"),
        );
        Ok(stored.view(Vec::new()))
    }

    /// Replace editable fields; outreach state and the reveal flag are kept.
    pub fn update_lead(&self, id: &LeadId, draft: LeadDraft) -> Result<LeadView, ProspectingError> {
        if draft.name.trim().is_empty() {
            return Err(ProspectingError::NameRequired);
        }

        let existing = self.require_lead(id)?;
        let status = draft.status.unwrap_or(existing.status);
        let mut lead = draft.into_lead(existing.id.clone());
        lead.status = status;
        lead.campaign_status = existing.campaign_status;
        lead.linkedin_status = existing.linkedin_status;
        lead.is_contact_revealed = existing.is_contact_revealed;

        self.repository.update_lead(lead)?;
        self.lead(id)
    }

    /// Remove a lead along with its list memberships.
    pub fn delete_lead(&self, id: &LeadId) -> Result<(), ProspectingError> {
        self.require_lead(id)?;
        self.repository
            .drop_member(&ListMember::Lead(id.clone()))?;
        self.repository.delete_lead(id)?;
        info!(lead_id = %id, "lead deleted");
        Ok(())
    }

    pub fn create_company(&self, draft: CompanyDraft) -> Result<CompanyView, ProspectingError> {
        if draft.name.trim().is_empty() {
            return Err(ProspectingError::NameRequired);
        }

        let company = draft.into_company(CompanyId(next_id("company")));
        let stored = self.repository.insert_company(company)?;
        info!(company_id = %stored.id, "company created");
        publish(
            self.notifier.as_ref(),
            Notice::success("Record created manually"),
        );
        Ok(stored.view(Vec::new()))
    }

    pub fn update_company(
        &self,
        id: &CompanyId,
        draft: CompanyDraft,
    ) -> Result<CompanyView, ProspectingError> {
        if draft.name.trim().is_empty() {
            return Err(ProspectingError::NameRequired);
        }
        if self.repository.company(id)?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        self.repository
            .update_company(draft.into_company(id.clone()))?;
        self.company(id)
    }

    pub fn delete_company(&self, id: &CompanyId) -> Result<(), ProspectingError> {
        if self.repository.company(id)?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }
        self.repository
            .drop_member(&ListMember::Company(id.clone()))?;
        self.repository.delete_company(id)?;
        info!(company_id = %id, "company deleted");
        Ok(())
    }

    /// Unlock a lead's email and phone. Revealing twice is a no-op.
    pub fn reveal_contact(&self, id: &LeadId) -> Result<LeadView, ProspectingError> {
        let mut lead = self.require_lead(id)?;
        if !lead.is_contact_revealed {
            lead.is_contact_revealed = true;
            self.repository.update_lead(lead)?;
            info!(lead_id = %id, "contact revealed");
            publish(
                self.notifier.as_ref(),
                Notice::success("Contact info revealed (1 credit used)"),
            );
        }
        self.lead(id)
    }

    /// CSV export of the selected records; unknown ids are skipped.
    pub fn export(&self, request: &ExportRequest) -> Result<String, ProspectingError> {
        let wanted: HashSet<&str> = request.ids.iter().map(String::as_str).collect();

        let (csv, exported) = match request.entity_type {
            EntityType::People => {
                let leads: Vec<Lead> = self
                    .repository
                    .leads()?
                    .into_iter()
                    .filter(|lead| wanted.contains(lead.id.0.as_str()))
                    .collect();
                (leads_csv(&leads)?, leads.len())
            }
            EntityType::Companies => {
                let companies: Vec<Company> = self
                    .repository
                    .companies()?
                    .into_iter()
                    .filter(|company| wanted.contains(company.id.0.as_str()))
                    .collect();
                (companies_csv(&companies)?, companies.len())
            }
        };

        publish(
            self.notifier.as_ref(),
            Notice::success(format!("Exported {exported} records")),
        );
        Ok(csv)
    }

    pub fn saved_searches(&self) -> Result<Vec<SavedSearch>, ProspectingError> {
        Ok(self.repository.saved_searches()?)
    }

    pub fn saved_search(&self, id: &str) -> Result<SavedSearch, ProspectingError> {
        self.repository
            .saved_searches()?
            .into_iter()
            .find(|search| search.id == id)
            .ok_or_else(|| ProspectingError::UnknownSavedSearch(id.to_string()))
    }

    pub fn save_search(
        &self,
        name: &str,
        filters: FilterState,
    ) -> Result<SavedSearch, ProspectingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProspectingError::NameRequired);
        }

        let search = self.repository.insert_saved_search(SavedSearch {
            id: next_id("search"),
            name: name.to_string(),
            filters,
        })?;
        publish(self.notifier.as_ref(), Notice::success("Search criteria saved."));
        Ok(search)
    }

    /// Overlay a saved search onto a session, returning to page one.
    pub fn apply_saved_search(
        &self,
        session: &mut ProspectingSession,
        id: &str,
    ) -> Result<(), ProspectingError> {
        let search = self.saved_search(id)?;
        session.apply_saved_search(&search.filters);
        publish(
            self.notifier.as_ref(),
            Notice::info(format!("Applied filter: {}", search.name)),
        );
        Ok(())
    }

    fn require_lead(&self, id: &LeadId) -> Result<Lead, ProspectingError> {
        Ok(self.repository.lead(id)?.ok_or(RepositoryError::NotFound)?)
    }

    fn memberships(&self) -> Result<MembershipIndex, RepositoryError> {
        Ok(MembershipIndex::from_memberships(
            self.repository.memberships()?,
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProspectingError {
    #[error("Name is required")]
    NameRequired,
    #[error("saved search {0} does not exist")]
    UnknownSavedSearch(String),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
