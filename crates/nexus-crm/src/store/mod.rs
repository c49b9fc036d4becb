//! Persistence primitives shared by every workflow repository.

#[cfg(test)]
mod failing;
mod memory;

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(test)]
pub(crate) use failing::UnavailableStore;
pub use memory::MemoryStore;

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique identifier such as `lead-000042`.
pub fn next_id(prefix: &str) -> String {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_prefixed_and_unique() {
        let first = next_id("deal");
        let second = next_id("deal");
        assert!(first.starts_with("deal-"));
        assert_ne!(first, second);
    }
}
