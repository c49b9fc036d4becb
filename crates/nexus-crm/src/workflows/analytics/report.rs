use serde::Serialize;

use crate::workflows::outreach::Sequence;
use crate::workflows::pipeline::{top_deals, Deal, DealStage};
use crate::workflows::scheduling::Task;

pub const DASHBOARD_ROWS: usize = 4;

/// Share of total leads attributed to each acquisition channel, in percent.
const LEAD_SOURCES: [(&str, u64); 4] = [
    ("Email", 45),
    ("LinkedIn", 30),
    ("Inbound", 15),
    ("Events", 10),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub pipeline_value: u64,
    pub active_deals: usize,
    pub emails_sent: u64,
    pub meetings_booked: usize,
    pub top_deals: Vec<Deal>,
    pub pending_tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSource {
    pub name: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsOverview {
    pub total_revenue: u64,
    pub deals_won: usize,
    pub emails_sent: u64,
    pub total_leads: usize,
    pub lead_sources: Vec<LeadSource>,
}

pub fn emails_sent(sequences: &[Sequence]) -> u64 {
    sequences
        .iter()
        .map(|sequence| u64::from(sequence.stats.sent))
        .sum()
}

pub fn dashboard(
    deals: &[Deal],
    sequences: &[Sequence],
    tasks: &[Task],
    meetings_booked: usize,
) -> DashboardStats {
    DashboardStats {
        pipeline_value: deals
            .iter()
            .fold(0, |sum, deal| sum.saturating_add(deal.value)),
        active_deals: deals
            .iter()
            .filter(|deal| deal.stage != DealStage::Closed)
            .count(),
        emails_sent: emails_sent(sequences),
        meetings_booked,
        top_deals: top_deals(deals, DASHBOARD_ROWS),
        pending_tasks: tasks
            .iter()
            .filter(|task| !task.completed)
            .take(DASHBOARD_ROWS)
            .cloned()
            .collect(),
    }
}

pub fn overview(deals: &[Deal], sequences: &[Sequence], total_leads: usize) -> AnalyticsOverview {
    let won = deals.iter().filter(|deal| deal.stage == DealStage::Closed);
    AnalyticsOverview {
        total_revenue: won
            .clone()
            .fold(0, |sum: u64, deal| sum.saturating_add(deal.value)),
        deals_won: won.count(),
        emails_sent: emails_sent(sequences),
        total_leads,
        lead_sources: lead_sources(total_leads),
    }
}

/// Floors each share, so the parts may sum to less than the total.
pub fn lead_sources(total_leads: usize) -> Vec<LeadSource> {
    let total = total_leads as u64;
    LEAD_SOURCES
        .iter()
        .map(|&(name, percent)| LeadSource {
            name,
            value: total * percent / 100,
        })
        .collect()
}
