use super::domain::{Company, Lead};

const LOCKED: &str = "Locked";

pub(crate) const PEOPLE_HEADERS: [&str; 7] = [
    "Name", "Title", "Company", "Email", "Phone", "Location", "LinkedIn",
];
pub(crate) const COMPANY_HEADERS: [&str; 5] = ["Name", "Industry", "Employees", "Website", "Location"];

/// Render leads as CSV. Contact fields read `Locked` until revealed.
pub fn leads_csv<'a, I>(leads: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(PEOPLE_HEADERS)?;

    for lead in leads {
        let (email, phone) = if lead.is_contact_revealed {
            (lead.email.as_str(), lead.phone.as_deref().unwrap_or_default())
        } else {
            (LOCKED, LOCKED)
        };
        writer.write_record([
            lead.name.as_str(),
            lead.title.as_str(),
            lead.company.as_str(),
            email,
            phone,
            lead.location.as_str(),
            lead.linkedin_url.as_deref().unwrap_or_default(),
        ])?;
    }

    finish(writer)
}

pub fn companies_csv<'a, I>(companies: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Company>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COMPANY_HEADERS)?;

    for company in companies {
        writer.write_record([
            company.name.as_str(),
            company.industry.as_str(),
            company.employees.as_str(),
            company.website.as_deref().unwrap_or_default(),
            company.location.as_str(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Flush(err.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not write CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not finish CSV export: {0}")]
    Flush(String),
}
