//! Lead finder used when building LinkedIn audiences.

use serde::{Deserialize, Serialize};

use crate::workflows::prospecting::domain::Lead;
use crate::workflows::prospecting::filter::CompanyDirectory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadFinderQuery {
    /// Matches name, company, or title.
    pub search: String,
    pub title: String,
    pub location: String,
    pub industry: String,
    /// Exact employee range, e.g. `50-200`.
    pub company_size: String,
}

impl LeadFinderQuery {
    pub fn matches(&self, lead: &Lead, companies: &CompanyDirectory<'_>) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || [&lead.name, &lead.company, &lead.title]
                .iter()
                .any(|field| field.to_lowercase().contains(&search));

        if !matches_search
            || !contains(&lead.title, &self.title)
            || !contains(&lead.location, &self.location)
        {
            return false;
        }

        if self.industry.is_empty() && self.company_size.is_empty() {
            return true;
        }

        match companies.resolve(&lead.company) {
            Some(company) => {
                contains(&company.industry, &self.industry)
                    && (self.company_size.is_empty() || company.employees == self.company_size)
            }
            None => false,
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
