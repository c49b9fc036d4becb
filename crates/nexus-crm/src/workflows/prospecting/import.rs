//! Lead import from contact exports (`Name,Title,Company,...` headers).

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{clamp_intent, LeadDraft};

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Company", default)]
    company: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "LinkedIn", default, deserialize_with = "empty_string_as_none")]
    linkedin_url: Option<String>,
    #[serde(
        rename = "Intent Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    intent_score: Option<String>,
    #[serde(rename = "Signals", default)]
    signals: String,
    #[serde(rename = "Tags", default)]
    tags: String,
}

impl LeadRow {
    fn into_draft(self) -> LeadDraft {
        LeadDraft {
            name: self.name,
            title: self.title,
            company: self.company,
            location: self.location,
            email: self.email,
            phone: self.phone,
            linkedin_url: self.linkedin_url,
            intent_score: self
                .intent_score
                .as_deref()
                .and_then(|score| score.trim().parse::<u16>().ok())
                .map(|score| clamp_intent(score.min(u16::from(u8::MAX)) as u8)),
            signals: split_list(&self.signals),
            tags: split_list(&self.tags),
            ..LeadDraft::default()
        }
    }
}

pub fn parse_leads<R: Read>(reader: R) -> Result<Vec<LeadDraft>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut drafts = Vec::new();
    for row in csv_reader.deserialize::<LeadRow>() {
        let row = row?;
        if row.name.trim().is_empty() {
            continue;
        }
        drafts.push(row.into_draft());
    }
    Ok(drafts)
}

pub fn parse_leads_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeadDraft>, ImportError> {
    let file = std::fs::File::open(path)?;
    Ok(parse_leads(file)?)
}

/// `;`-separated cell values.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read lead export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
}
