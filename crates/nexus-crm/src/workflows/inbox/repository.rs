use super::domain::{EmailId, EmailMessage, LinkedInMessage};
use crate::store::RepositoryError;

/// Received mail is returned newest first.
pub trait InboxRepository: Send + Sync {
    fn emails(&self) -> Result<Vec<EmailMessage>, RepositoryError>;
    fn insert_email(&self, email: EmailMessage) -> Result<EmailMessage, RepositoryError>;
    fn delete_email(&self, id: &EmailId) -> Result<(), RepositoryError>;
    fn linkedin_messages(&self) -> Result<Vec<LinkedInMessage>, RepositoryError>;
}
