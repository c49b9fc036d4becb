use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{ListId, ListMember, ListMembership, MembershipIndex, UserList, UserListView};
use super::repository::ListRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};
use crate::workflows::prospecting::repository::ProspectRepository;

/// Manages lists and the records saved into them.
pub struct ListService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

/// Save records into an existing list, or into a list created on the fly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveToListRequest {
    pub list_id: Option<ListId>,
    pub new_list_name: Option<String>,
    pub members: Vec<ListMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveToListOutcome {
    pub list: UserList,
    pub added: usize,
    pub already_present: usize,
    /// Members that reference no stored lead or company.
    pub missing: Vec<ListMember>,
}

impl<R, N> ListService<R, N>
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Lists with member counts derived from the join table.
    pub fn lists(&self) -> Result<Vec<UserListView>, ListError> {
        let counts = self.index()?.counts();
        let lists = self.repository.lists()?;
        Ok(lists
            .into_iter()
            .map(|list| UserListView {
                count: counts.get(&list.id).copied().unwrap_or(0),
                id: list.id,
                name: list.name,
            })
            .collect())
    }

    pub fn index(&self) -> Result<MembershipIndex, ListError> {
        let memberships = self.repository.memberships()?;
        Ok(MembershipIndex::from_memberships(memberships))
    }

    pub fn members(&self, list_id: &ListId) -> Result<Vec<ListMember>, ListError> {
        self.require_list(list_id)?;
        let memberships = self.repository.memberships()?;
        Ok(memberships
            .into_iter()
            .filter(|membership| &membership.list_id == list_id)
            .map(|membership| membership.member)
            .collect())
    }

    pub fn create(&self, name: &str) -> Result<UserList, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }

        let list = self.repository.insert_list(UserList {
            id: ListId(next_id("list")),
            name: name.to_string(),
        })?;
        info!(list_id = %list.id.0, "list created");
        Ok(list)
    }

    /// Delete a list and every membership row pointing at it.
    pub fn delete(&self, list_id: &ListId) -> Result<usize, ListError> {
        let list = self.require_list(list_id)?;
        let dropped = self.repository.drop_list_memberships(list_id)?;
        self.repository.delete_list(list_id)?;
        info!(list_id = %list_id.0, dropped, "list deleted");
        publish(
            self.notifier.as_ref(),
            Notice::info(format!("Deleted list {}", list.name)),
        );
        Ok(dropped)
    }

    pub fn save_members(&self, request: SaveToListRequest) -> Result<SaveToListOutcome, ListError> {
        if request.members.is_empty() {
            return Err(ListError::NoMembers);
        }

        let list = match (request.list_id, request.new_list_name) {
            (Some(list_id), _) => self.require_list(&list_id)?,
            (None, Some(name)) => self.create(&name)?,
            (None, None) => return Err(ListError::MissingTarget),
        };

        let mut added = 0;
        let mut already_present = 0;
        let mut missing = Vec::new();
        for member in request.members {
            if !self.member_exists(&member)? {
                missing.push(member);
                continue;
            }

            let inserted = self.repository.add_membership(ListMembership {
                list_id: list.id.clone(),
                member,
            })?;
            if inserted {
                added += 1;
            } else {
                already_present += 1;
            }
        }

        publish(
            self.notifier.as_ref(),
            Notice::success(format!("{added} records saved to {}", list.name)),
        );

        Ok(SaveToListOutcome {
            list,
            added,
            already_present,
            missing,
        })
    }

    pub fn remove_member(&self, list_id: &ListId, member: ListMember) -> Result<(), ListError> {
        self.require_list(list_id)?;
        let removed = self.repository.remove_membership(&ListMembership {
            list_id: list_id.clone(),
            member,
        })?;
        if removed {
            Ok(())
        } else {
            Err(ListError::Repository(RepositoryError::NotFound))
        }
    }

    fn require_list(&self, list_id: &ListId) -> Result<UserList, ListError> {
        self.repository
            .list(list_id)?
            .ok_or_else(|| ListError::UnknownList(list_id.clone()))
    }

    fn member_exists(&self, member: &ListMember) -> Result<bool, RepositoryError> {
        Ok(match member {
            ListMember::Lead(id) => self.repository.lead(id)?.is_some(),
            ListMember::Company(id) => self.repository.company(id)?.is_some(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list name must not be empty")]
    EmptyName,
    #[error("select at least one record to save")]
    NoMembers,
    #[error("choose an existing list or name a new one")]
    MissingTarget,
    #[error("list {0} does not exist")]
    UnknownList(ListId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
