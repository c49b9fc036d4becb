//! Weekly content calendar and generated sales copy.

pub mod domain;
pub mod generator;
pub mod prompts;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    ContentPost, EmailBrief, GeneratedContent, IcebreakerRequest, Platform, PostDraft, PostId,
    RefineRequest,
};
pub use generator::{ContentGenerator, GeminiClient, GeneratorError};
pub use repository::ContentRepository;
pub use router::content_router;
pub use service::{ContentError, ContentService};
