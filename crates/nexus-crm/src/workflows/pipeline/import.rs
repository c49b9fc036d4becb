//! Deal board snapshots read from CSV (`Title,Value,Stage,Lead ID,Lead Name`).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Deal, DealId, DealStage, MAX_DEAL_VALUE};
use crate::workflows::prospecting::domain::LeadId;

#[derive(Debug, Deserialize)]
struct DealRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Value")]
    value: u64,
    #[serde(rename = "Stage")]
    stage: String,
    #[serde(rename = "Lead ID", default)]
    lead_id: String,
    #[serde(rename = "Lead Name", default)]
    lead_name: String,
}

pub fn parse_deals<R: Read>(reader: R) -> Result<Vec<Deal>, DealImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut deals = Vec::new();
    for (index, row) in csv_reader.deserialize::<DealRow>().enumerate() {
        let row = row?;
        let line = index + 2;
        let stage = DealStage::parse(&row.stage).ok_or_else(|| DealImportError::UnknownStage {
            line,
            stage: row.stage.clone(),
        })?;

        if row.value > MAX_DEAL_VALUE {
            return Err(DealImportError::ValueTooLarge {
                line,
                value: row.value,
            });
        }

        deals.push(Deal {
            id: DealId(format!("row-{line}")),
            title: row.title,
            value: row.value,
            stage,
            lead_id: LeadId(row.lead_id),
            lead_name: row.lead_name,
        });
    }
    Ok(deals)
}

pub fn parse_deals_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Deal>, DealImportError> {
    let file = std::fs::File::open(path)?;
    parse_deals(file)
}

#[derive(Debug, thiserror::Error)]
pub enum DealImportError {
    #[error("failed to read deal export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid deal CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown stage `{stage}`")]
    UnknownStage { line: usize, stage: String },
    #[error("line {line}: deal value {value} exceeds the maximum of {max}", max = MAX_DEAL_VALUE)]
    ValueTooLarge { line: usize, value: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::pipeline::board::summarize;
    use std::io::Cursor;

    #[test]
    fn parsed_board_summarizes() {
        let csv = "Title,Value,Stage,Lead ID,Lead Name\n\
Enterprise License,25000,in-progress,1,Shivtej Magar\n\
Q3 Marketing Retainer,15000,to-contact,2,John Doe\n\
Consulting Project,5000,closed,3,Sarah Smith\n\
Pilot Program,2000,To-Contact,4,Michael Brown\n";
        let deals = parse_deals(Cursor::new(csv)).expect("parse");
        assert_eq!(deals.len(), 4);

        let summary = summarize(&deals);
        assert_eq!(summary.total_pipeline, 47_000);
        assert!((summary.weighted_pipeline - 23_400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_stage_reports_line() {
        let csv = "Title,Value,Stage\nA,10,won\n";
        match parse_deals(Cursor::new(csv)) {
            Err(DealImportError::UnknownStage { line, stage }) => {
                assert_eq!(line, 2);
                assert_eq!(stage, "won");
            }
            other => panic!("expected unknown stage, got {other:?}"),
        }
    }

    #[test]
    fn oversized_value_is_rejected_with_its_line() {
        let csv = format!(
            "Title,Value,Stage\nSmall,10,closed\nHuge,{},closed\n",
            u64::MAX
        );
        match parse_deals(Cursor::new(csv)) {
            Err(DealImportError::ValueTooLarge { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, u64::MAX);
            }
            other => panic!("expected oversized value, got {other:?}"),
        }
    }
}
