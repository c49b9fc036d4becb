use super::domain::{ListId, ListMember, ListMembership, UserList};
use crate::store::RepositoryError;

/// Storage for lists and their membership rows.
pub trait ListRepository: Send + Sync {
    fn lists(&self) -> Result<Vec<UserList>, RepositoryError>;
    fn list(&self, id: &ListId) -> Result<Option<UserList>, RepositoryError>;
    fn insert_list(&self, list: UserList) -> Result<UserList, RepositoryError>;
    fn delete_list(&self, id: &ListId) -> Result<(), RepositoryError>;
    fn memberships(&self) -> Result<Vec<ListMembership>, RepositoryError>;
    /// Returns `false` when the membership already existed.
    fn add_membership(&self, membership: ListMembership) -> Result<bool, RepositoryError>;
    fn remove_membership(&self, membership: &ListMembership) -> Result<bool, RepositoryError>;
    /// Remove every membership row of a list, returning how many were dropped.
    fn drop_list_memberships(&self, id: &ListId) -> Result<usize, RepositoryError>;
    /// Remove a member from every list it belongs to.
    fn drop_member(&self, member: &ListMember) -> Result<usize, RepositoryError>;
}
