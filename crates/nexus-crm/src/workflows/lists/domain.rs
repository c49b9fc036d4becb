use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::prospecting::domain::{CompanyId, LeadId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListId(pub String);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named bucket of saved leads or companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub id: ListId,
    pub name: String,
}

/// Record that can be saved into a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ListMember {
    Lead(LeadId),
    Company(CompanyId),
}

/// Join row between a list and one of its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListMembership {
    pub list_id: ListId,
    pub member: ListMember,
}

/// List with its derived member count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListView {
    pub id: ListId,
    pub name: String,
    pub count: usize,
}

/// Lookup from member to the lists it belongs to, built from the join table.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    by_member: HashMap<ListMember, BTreeSet<ListId>>,
}

impl MembershipIndex {
    pub fn from_memberships<I>(memberships: I) -> Self
    where
        I: IntoIterator<Item = ListMembership>,
    {
        let mut by_member: HashMap<ListMember, BTreeSet<ListId>> = HashMap::new();
        for membership in memberships {
            by_member
                .entry(membership.member)
                .or_default()
                .insert(membership.list_id);
        }
        Self { by_member }
    }

    pub fn lists_for(&self, member: &ListMember) -> Option<&BTreeSet<ListId>> {
        self.by_member.get(member).filter(|lists| !lists.is_empty())
    }

    pub fn list_ids(&self, member: &ListMember) -> Vec<ListId> {
        self.lists_for(member)
            .map(|lists| lists.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_saved(&self, member: &ListMember) -> bool {
        self.lists_for(member).is_some()
    }

    pub fn contains(&self, member: &ListMember, list_id: &ListId) -> bool {
        self.lists_for(member)
            .is_some_and(|lists| lists.contains(list_id))
    }

    pub fn counts(&self) -> BTreeMap<ListId, usize> {
        let mut counts = BTreeMap::new();
        for list_id in self.by_member.values().flatten() {
            *counts.entry(list_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(list: &str, member: ListMember) -> ListMembership {
        ListMembership {
            list_id: ListId(list.to_string()),
            member,
        }
    }

    #[test]
    fn index_counts_members_across_entity_kinds() {
        let index = MembershipIndex::from_memberships(vec![
            membership("l1", ListMember::Lead(LeadId("1".into()))),
            membership("l1", ListMember::Company(CompanyId("1".into()))),
            membership("l2", ListMember::Lead(LeadId("1".into()))),
        ]);

        let counts = index.counts();
        assert_eq!(counts.get(&ListId("l1".into())), Some(&2));
        assert_eq!(counts.get(&ListId("l2".into())), Some(&1));
        assert_eq!(
            index.list_ids(&ListMember::Lead(LeadId("1".into()))),
            vec![ListId("l1".into()), ListId("l2".into())]
        );
        assert!(!index.is_saved(&ListMember::Lead(LeadId("2".into()))));
    }

    #[test]
    fn lead_and_company_with_same_raw_id_are_distinct_members() {
        let index = MembershipIndex::from_memberships(vec![membership(
            "l1",
            ListMember::Company(CompanyId("7".into())),
        )]);
        assert!(index.is_saved(&ListMember::Company(CompanyId("7".into()))));
        assert!(!index.is_saved(&ListMember::Lead(LeadId("7".into()))));
    }
}
