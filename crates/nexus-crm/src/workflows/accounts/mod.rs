//! User profiles keyed by the external auth identity.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{ProfileUpdate, ProfileView, Registration, UserProfile, UserRole};
pub use repository::AccountRepository;
pub use router::account_router;
pub use service::{AccountError, AccountService};
