//! Multi-predicate filtering shared by the people and company views.
//!
//! Every active predicate must hold (AND across groups); multi-select groups
//! such as signals or management levels match when any selected value holds.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::{Company, Lead};
use crate::workflows::lists::{ListId, ListMember, MembershipIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    NetNew,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    #[default]
    People,
    Companies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntentBucket {
    High,
    Medium,
    Low,
}

impl IntentBucket {
    pub const HIGH_THRESHOLD: u8 = 80;
    pub const MEDIUM_THRESHOLD: u8 = 50;

    /// Buckets a score; a missing score counts as zero.
    pub fn classify(score: Option<u8>) -> Self {
        match score.unwrap_or(0) {
            s if s >= Self::HIGH_THRESHOLD => Self::High,
            s if s >= Self::MEDIUM_THRESHOLD => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ManagementLevel {
    #[serde(rename = "C-Level")]
    CLevel,
    #[serde(rename = "VP")]
    Vp,
    Director,
    Manager,
    Individual,
}

impl ManagementLevel {
    /// Whole-word, case-insensitive title test.
    pub fn matches_title(self, title: &str) -> bool {
        let pattern = match self {
            Self::CLevel => title_pattern(&C_LEVEL, r"(?i)\b(Chief|CEO|CTO|CFO|COO)\b"),
            Self::Vp => title_pattern(&VP, r"(?i)\b(VP|Vice President)\b"),
            Self::Director => title_pattern(&DIRECTOR, r"(?i)\bDirector\b"),
            Self::Manager => title_pattern(&MANAGER, r"(?i)\bManager\b"),
            Self::Individual => return true,
        };
        pattern.is_match(title)
    }
}

static C_LEVEL: OnceLock<Regex> = OnceLock::new();
static VP: OnceLock<Regex> = OnceLock::new();
static DIRECTOR: OnceLock<Regex> = OnceLock::new();
static MANAGER: OnceLock<Regex> = OnceLock::new();

fn title_pattern<'a>(cell: &'a OnceLock<Regex>, pattern: &str) -> &'a Regex {
    // Patterns are literals; a failure here is a programming error.
    cell.get_or_init(|| Regex::new(pattern).expect("valid title pattern"))
}

/// Criteria shared across both entity views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub view_mode: ViewMode,
    /// Restricts the saved view to one list; `None` means every list.
    pub list_id: Option<ListId>,
    pub name: String,
    pub job_titles: String,
    pub company: String,
    pub location: String,
    pub industry: String,
    pub keyword: String,
    pub employee_ranges: BTreeSet<String>,
    pub management_levels: BTreeSet<ManagementLevel>,
    pub intent: Option<IntentBucket>,
    pub signals: BTreeSet<String>,
}

impl FilterState {
    /// Overlay the non-empty criteria of `other`, keeping the rest.
    pub fn overlay(&mut self, other: &FilterState) {
        fn text(target: &mut String, source: &str) {
            if !source.is_empty() {
                *target = source.to_string();
            }
        }
        fn set<T: Clone + Ord>(target: &mut BTreeSet<T>, source: &BTreeSet<T>) {
            if !source.is_empty() {
                *target = source.clone();
            }
        }

        text(&mut self.name, &other.name);
        text(&mut self.job_titles, &other.job_titles);
        text(&mut self.company, &other.company);
        text(&mut self.location, &other.location);
        text(&mut self.industry, &other.industry);
        text(&mut self.keyword, &other.keyword);
        set(&mut self.employee_ranges, &other.employee_ranges);
        set(&mut self.management_levels, &other.management_levels);
        set(&mut self.signals, &other.signals);
        if other.intent.is_some() {
            self.intent = other.intent;
        }
        if other.list_id.is_some() {
            self.list_id = other.list_id.clone();
        }
    }

    /// Drop criteria that only apply to people.
    pub fn clear_people_only(&mut self) {
        self.job_titles.clear();
        self.management_levels.clear();
    }

    fn needs_company(&self) -> bool {
        !self.industry.is_empty() || !self.employee_ranges.is_empty()
    }
}

/// Exact-name lookup used to resolve a lead's company.
#[derive(Debug, Default)]
pub struct CompanyDirectory<'a> {
    by_name: HashMap<&'a str, &'a Company>,
}

impl<'a> CompanyDirectory<'a> {
    pub fn new(companies: &'a [Company]) -> Self {
        let by_name = companies
            .iter()
            .map(|company| (company.name.as_str(), company))
            .collect();
        Self { by_name }
    }

    pub fn resolve(&self, name: &str) -> Option<&'a Company> {
        self.by_name.get(name).copied()
    }
}

/// Collaborators a filter pass needs besides the records themselves.
pub struct FilterContext<'a> {
    pub memberships: &'a MembershipIndex,
    pub companies: &'a CompanyDirectory<'a>,
}

/// Record kinds the prospecting filter can operate on.
pub trait Prospect {
    fn record_id(&self) -> &str;
    fn list_member(&self) -> ListMember;
    fn display_name(&self) -> &str;
    fn location(&self) -> &str;
    fn intent_score(&self) -> Option<u8>;
    fn signals(&self) -> &[String];
    /// Lowercased text searched by the keyword filter.
    fn keyword_haystack(&self) -> String;
    /// Predicates whose meaning depends on the entity kind.
    fn matches_entity_filters(&self, filters: &FilterState, companies: &CompanyDirectory<'_>)
        -> bool;
}

impl Prospect for Lead {
    fn record_id(&self) -> &str {
        &self.id.0
    }

    fn list_member(&self) -> ListMember {
        self.member()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn intent_score(&self) -> Option<u8> {
        self.intent_score
    }

    fn signals(&self) -> &[String] {
        &self.signals
    }

    fn keyword_haystack(&self) -> String {
        let mut parts = vec![self.name.as_str(), self.title.as_str(), self.company.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    fn matches_entity_filters(
        &self,
        filters: &FilterState,
        companies: &CompanyDirectory<'_>,
    ) -> bool {
        if !contains_ignore_case(&self.title, &filters.job_titles)
            || !contains_ignore_case(&self.company, &filters.company)
        {
            return false;
        }

        if !filters.management_levels.is_empty()
            && !filters
                .management_levels
                .iter()
                .any(|level| level.matches_title(&self.title))
        {
            return false;
        }

        if filters.needs_company() {
            // Unresolvable companies fail closed.
            let Some(company) = companies.resolve(&self.company) else {
                return false;
            };
            return company_attributes_match(company, filters);
        }

        true
    }
}

impl Prospect for Company {
    fn record_id(&self) -> &str {
        &self.id.0
    }

    fn list_member(&self) -> ListMember {
        self.member()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn intent_score(&self) -> Option<u8> {
        self.intent_score
    }

    fn signals(&self) -> &[String] {
        &self.signals
    }

    fn keyword_haystack(&self) -> String {
        let mut parts = vec![self.name.as_str(), self.industry.as_str()];
        if let Some(description) = &self.description {
            parts.push(description);
        }
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    fn matches_entity_filters(
        &self,
        filters: &FilterState,
        _companies: &CompanyDirectory<'_>,
    ) -> bool {
        contains_ignore_case(&self.name, &filters.company) && company_attributes_match(self, filters)
    }
}

fn company_attributes_match(company: &Company, filters: &FilterState) -> bool {
    contains_ignore_case(&company.industry, &filters.industry)
        && (filters.employee_ranges.is_empty()
            || filters.employee_ranges.contains(&company.employees))
}

/// Empty needles match everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_view<P: Prospect>(record: &P, filters: &FilterState, memberships: &MembershipIndex) -> bool {
    let member = record.list_member();
    match filters.view_mode {
        ViewMode::NetNew => !memberships.is_saved(&member),
        ViewMode::Saved => match &filters.list_id {
            Some(list_id) => memberships.contains(&member, list_id),
            None => memberships.is_saved(&member),
        },
    }
}

/// Whether a single record passes every active predicate.
pub fn matches<P: Prospect>(record: &P, filters: &FilterState, context: &FilterContext<'_>) -> bool {
    if !matches_view(record, filters, context.memberships) {
        return false;
    }

    if !contains_ignore_case(record.display_name(), &filters.name)
        || !contains_ignore_case(record.location(), &filters.location)
    {
        return false;
    }

    if let Some(bucket) = filters.intent {
        if IntentBucket::classify(record.intent_score()) != bucket {
            return false;
        }
    }

    if !filters.signals.is_empty()
        && !record
            .signals()
            .iter()
            .any(|signal| filters.signals.contains(signal))
    {
        return false;
    }

    if !record.matches_entity_filters(filters, context.companies) {
        return false;
    }

    filters.keyword.is_empty()
        || record
            .keyword_haystack()
            .contains(&filters.keyword.to_lowercase())
}

/// Apply the filter to a record set, preserving input order.
pub fn filter_prospects<'r, P: Prospect>(
    records: &'r [P],
    filters: &FilterState,
    context: &FilterContext<'_>,
) -> Vec<&'r P> {
    records
        .iter()
        .filter(|record| matches(*record, filters, context))
        .collect()
}
