use super::domain::UserProfile;
use crate::store::RepositoryError;

pub trait AccountRepository: Send + Sync {
    fn profile(&self, auth_id: &str) -> Result<Option<UserProfile>, RepositoryError>;
    /// Fails with `Conflict` when the auth id is already linked.
    fn insert_profile(&self, profile: UserProfile) -> Result<UserProfile, RepositoryError>;
    fn update_profile(&self, profile: UserProfile) -> Result<(), RepositoryError>;
}
