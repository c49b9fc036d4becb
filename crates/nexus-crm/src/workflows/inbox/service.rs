use std::sync::Arc;

use tracing::info;

use super::domain::{EmailDraft, EmailId, EmailMessage, LinkedInMessage};
use super::repository::InboxRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};

pub struct InboxService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> InboxService<R, N>
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Emails, optionally narrowed by a free-text query.
    pub fn emails(&self, query: Option<&str>) -> Result<Vec<EmailMessage>, InboxError> {
        let emails = self.repository.emails()?;
        Ok(match query {
            Some(needle) => emails
                .into_iter()
                .filter(|email| email.matches(needle))
                .collect(),
            None => emails,
        })
    }

    pub fn unread_count(&self) -> Result<usize, InboxError> {
        Ok(self
            .repository
            .emails()?
            .iter()
            .filter(|email| email.unread)
            .count())
    }

    pub fn add_email(&self, draft: EmailDraft) -> Result<EmailMessage, InboxError> {
        if draft.from.trim().is_empty() || draft.subject.trim().is_empty() {
            return Err(InboxError::MissingFields);
        }

        let email = EmailMessage {
            id: EmailId(next_id("email")),
            from: draft.from.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            preview: draft.preview,
            content: draft.content,
            time: draft.time,
            unread: draft.unread,
            is_reply: draft.is_reply,
        };
        let stored = self.repository.insert_email(email)?;
        info!(email_id = %stored.id, "email stored");
        Ok(stored)
    }

    pub fn delete_email(&self, id: &EmailId) -> Result<(), InboxError> {
        self.repository.delete_email(id)?;
        publish(self.notifier.as_ref(), Notice::success("Email deleted"));
        Ok(())
    }

    pub fn linkedin_messages(&self) -> Result<Vec<LinkedInMessage>, InboxError> {
        Ok(self.repository.linkedin_messages()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InboxError {
    #[error("sender and subject are required")]
    MissingFields,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
