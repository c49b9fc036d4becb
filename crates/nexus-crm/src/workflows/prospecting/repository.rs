use super::domain::{Company, CompanyId, Lead, LeadId, SavedSearch};
use crate::store::RepositoryError;

/// Storage abstraction for leads, companies, and saved searches.
///
/// `insert_*` places new records at the front of the collection so the newest
/// prospect is listed first.
pub trait ProspectRepository: Send + Sync {
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError>;
    fn lead(&self, id: &LeadId) -> Result<Option<Lead>, RepositoryError>;
    fn insert_lead(&self, lead: Lead) -> Result<Lead, RepositoryError>;
    fn update_lead(&self, lead: Lead) -> Result<(), RepositoryError>;
    fn delete_lead(&self, id: &LeadId) -> Result<(), RepositoryError>;

    fn companies(&self) -> Result<Vec<Company>, RepositoryError>;
    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError>;
    fn insert_company(&self, company: Company) -> Result<Company, RepositoryError>;
    fn update_company(&self, company: Company) -> Result<(), RepositoryError>;
    fn delete_company(&self, id: &CompanyId) -> Result<(), RepositoryError>;

    fn saved_searches(&self) -> Result<Vec<SavedSearch>, RepositoryError>;
    fn insert_saved_search(&self, search: SavedSearch) -> Result<SavedSearch, RepositoryError>;
}
