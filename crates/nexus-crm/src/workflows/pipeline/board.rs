use serde::Serialize;

use super::domain::{Deal, DealId, DealStage};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineColumn {
    pub stage: DealStage,
    pub stage_label: &'static str,
    pub probability: f64,
    pub deal_count: usize,
    pub total_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub columns: Vec<PipelineColumn>,
    pub total_pipeline: u64,
    /// Sum of each deal's value times its stage probability.
    pub weighted_pipeline: f64,
}

impl PipelineSummary {
    pub fn column(&self, stage: DealStage) -> Option<&PipelineColumn> {
        self.columns.iter().find(|column| column.stage == stage)
    }
}

/// Aggregate deals per kanban column, in column order.
pub fn summarize(deals: &[Deal]) -> PipelineSummary {
    let columns = DealStage::ALL
        .into_iter()
        .map(|stage| {
            let (deal_count, total_value) = deals
                .iter()
                .filter(|deal| deal.stage == stage)
                .fold((0, 0u64), |(count, sum), deal| {
                    (count + 1, sum.saturating_add(deal.value))
                });
            PipelineColumn {
                stage,
                stage_label: stage.label(),
                probability: stage.probability(),
                deal_count,
                total_value,
            }
        })
        .collect();

    let total_pipeline = deals
        .iter()
        .fold(0u64, |sum, deal| sum.saturating_add(deal.value));
    // Whole-percent weights keep the sum exact before the final division.
    let weighted_hundredths: u128 = deals
        .iter()
        .map(|deal| u128::from(deal.value) * u128::from(deal.stage.probability_percent()))
        .sum();

    PipelineSummary {
        columns,
        total_pipeline,
        weighted_pipeline: weighted_hundredths as f64 / 100.0,
    }
}

/// Drop `deal_id` onto `stage`. Any transition is allowed; returns `false`
/// when no deal matches.
pub fn move_deal(deals: &mut [Deal], deal_id: &DealId, stage: DealStage) -> bool {
    match deals.iter_mut().find(|deal| &deal.id == deal_id) {
        Some(deal) => {
            deal.stage = stage;
            true
        }
        None => false,
    }
}

/// Deals ordered by value, largest first.
pub fn top_deals(deals: &[Deal], limit: usize) -> Vec<Deal> {
    let mut ranked = deals.to_vec();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::prospecting::domain::LeadId;

    fn deal(id: &str, value: u64, stage: DealStage) -> Deal {
        Deal {
            id: DealId(id.to_string()),
            title: format!("Deal {id}"),
            value,
            stage,
            lead_id: LeadId(id.to_string()),
            lead_name: "Lead".to_string(),
        }
    }

    fn board() -> Vec<Deal> {
        vec![
            deal("1", 25_000, DealStage::InProgress),
            deal("2", 15_000, DealStage::ToContact),
            deal("3", 5_000, DealStage::Closed),
            deal("4", 2_000, DealStage::ToContact),
        ]
    }

    #[test]
    fn summary_totals_and_weights_columns() {
        let summary = summarize(&board());

        assert_eq!(summary.total_pipeline, 47_000);
        assert!((summary.weighted_pipeline - 23_400.0).abs() < f64::EPSILON);

        let to_contact = summary.column(DealStage::ToContact).expect("column");
        assert_eq!(to_contact.deal_count, 2);
        assert_eq!(to_contact.total_value, 17_000);
        let closed = summary.column(DealStage::Closed).expect("column");
        assert_eq!(closed.total_value, 5_000);
    }

    #[test]
    fn empty_board_has_zeroed_columns() {
        let summary = summarize(&[]);
        assert_eq!(summary.columns.len(), 3);
        assert_eq!(summary.total_pipeline, 0);
        assert_eq!(summary.weighted_pipeline, 0.0);
        assert!(summary.columns.iter().all(|column| column.deal_count == 0));
    }

    #[test]
    fn moving_a_deal_only_touches_that_deal() {
        let mut deals = board();
        assert!(move_deal(&mut deals, &DealId("4".into()), DealStage::Closed));

        assert_eq!(deals[3].stage, DealStage::Closed);
        assert_eq!(deals[1].stage, DealStage::ToContact);
        let summary = summarize(&deals);
        assert_eq!(summary.column(DealStage::Closed).map(|c| c.deal_count), Some(2));
        assert_eq!(summary.total_pipeline, 47_000);
    }

    #[test]
    fn closed_deals_can_move_back() {
        let mut deals = board();
        assert!(move_deal(&mut deals, &DealId("3".into()), DealStage::ToContact));
        assert!(!move_deal(&mut deals, &DealId("99".into()), DealStage::Closed));
        assert_eq!(deals[2].stage, DealStage::ToContact);
    }

    #[test]
    fn top_deals_are_sorted_by_value() {
        let top = top_deals(&board(), 2);
        let ids: Vec<&str> = top.iter().map(|deal| deal.id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn oversized_values_saturate_instead_of_wrapping() {
        let deals = vec![
            deal("1", u64::MAX, DealStage::Closed),
            deal("2", u64::MAX, DealStage::Closed),
            deal("3", u64::MAX / 50, DealStage::InProgress),
        ];

        let summary = summarize(&deals);

        assert_eq!(summary.total_pipeline, u64::MAX);
        assert_eq!(
            summary.column(DealStage::Closed).map(|column| column.total_value),
            Some(u64::MAX)
        );
        assert_eq!(
            summary.column(DealStage::Closed).map(|column| column.deal_count),
            Some(2)
        );
        assert!(summary.weighted_pipeline > u64::MAX as f64);
    }
}
