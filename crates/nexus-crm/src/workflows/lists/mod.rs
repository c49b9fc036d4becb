//! User-defined lists backed by an explicit membership join table.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ListId, ListMember, ListMembership, MembershipIndex, UserList, UserListView};
pub use repository::ListRepository;
pub use router::list_router;
pub use service::{ListError, ListService, SaveToListOutcome, SaveToListRequest};
