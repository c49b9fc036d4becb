use super::domain::{ContentPost, PostId};
use crate::store::RepositoryError;

pub trait ContentRepository: Send + Sync {
    fn posts(&self) -> Result<Vec<ContentPost>, RepositoryError>;
    fn insert_post(&self, post: ContentPost) -> Result<ContentPost, RepositoryError>;
    fn delete_post(&self, id: &PostId) -> Result<(), RepositoryError>;
}
