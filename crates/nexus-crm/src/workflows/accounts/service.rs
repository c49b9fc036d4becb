use std::sync::Arc;

use tracing::info;

use super::domain::{ProfileUpdate, ProfileView, Registration, UserProfile, UserRole};
use super::repository::AccountRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};

pub struct AccountService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> AccountService<R, N>
where
    R: AccountRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Create the profile row for a freshly signed-up identity.
    pub fn register(&self, registration: Registration) -> Result<ProfileView, AccountError> {
        let name = registration.name.trim();
        let email = registration.email.trim();
        if registration.auth_id.trim().is_empty() || name.is_empty() || email.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let profile = self.repository.insert_profile(UserProfile {
            id: next_id("user"),
            auth_id: registration.auth_id.trim().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            avatar_url: None,
            phone: None,
            location: None,
            timezone: None,
            language: None,
        })?;
        info!(user_id = %profile.id, "profile registered");
        Ok(profile.view())
    }

    pub fn profile(&self, auth_id: &str) -> Result<ProfileView, AccountError> {
        Ok(self.require(auth_id)?.view())
    }

    pub fn update(&self, auth_id: &str, update: ProfileUpdate) -> Result<ProfileView, AccountError> {
        let mut profile = self.require(auth_id)?;
        profile.apply(update);
        self.repository.update_profile(profile.clone())?;
        publish(
            self.notifier.as_ref(),
            Notice::success("Profile updated successfully"),
        );
        Ok(profile.view())
    }

    fn require(&self, auth_id: &str) -> Result<UserProfile, AccountError> {
        self.repository
            .profile(auth_id)?
            .ok_or_else(|| AccountError::UnknownUser(auth_id.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("auth id, name and email are required")]
    MissingFields,
    #[error("no profile for auth id {0}")]
    UnknownUser(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
