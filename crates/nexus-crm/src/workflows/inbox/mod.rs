//! Email inbox and LinkedIn message feed.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{EmailDraft, EmailId, EmailMessage, LinkedInMessage, MessageId};
pub use repository::InboxRepository;
pub use router::inbox_router;
pub use service::{InboxError, InboxService};
