use crate::infra::{build_store, LogNotifier};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use nexus_crm::error::AppError;
use nexus_crm::fixtures::Fixtures;
use nexus_crm::store::MemoryStore;
use nexus_crm::workflows::analytics::AnalyticsService;
use nexus_crm::workflows::inbox::InboxService;
use nexus_crm::workflows::outreach::OutreachService;
use nexus_crm::workflows::pipeline::{
    parse_deals_from_path, summarize, top_deals, Deal, PipelineSummary,
};
use nexus_crm::workflows::prospecting::import::parse_leads_from_path;
use nexus_crm::workflows::prospecting::{
    EntityType, FilterState, IntentBucket, ProspectingService, SearchRequest, SearchResults,
};
use nexus_crm::workflows::scheduling::ScheduleService;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for upcoming meetings (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct PipelineReportArgs {
    /// Deal export (`Title,Value,Stage,Lead ID,Lead Name`) to report on instead of the demo deals
    #[arg(long)]
    pub(crate) deals_csv: Option<PathBuf>,
    /// Number of top deals to list
    #[arg(long, default_value_t = 4)]
    pub(crate) top: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum IntentArg {
    High,
    Medium,
    Low,
}

impl From<IntentArg> for IntentBucket {
    fn from(value: IntentArg) -> Self {
        match value {
            IntentArg::High => IntentBucket::High,
            IntentArg::Medium => IntentBucket::Medium,
            IntentArg::Low => IntentBucket::Low,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProspectSearchArgs {
    /// Lead export to search instead of the demo workspace
    #[arg(long)]
    pub(crate) leads_csv: Option<PathBuf>,
    /// Search companies rather than people
    #[arg(long)]
    pub(crate) companies: bool,
    #[arg(long, value_enum)]
    pub(crate) intent: Option<IntentArg>,
    /// Case-insensitive substring of the job title
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long)]
    pub(crate) industry: Option<String>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    #[arg(long)]
    pub(crate) keyword: Option<String>,
    /// Saved search id whose criteria are layered on top
    #[arg(long)]
    pub(crate) saved_search: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
}

impl ProspectSearchArgs {
    fn request(&self) -> SearchRequest {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        SearchRequest {
            entity_type: if self.companies {
                EntityType::Companies
            } else {
                EntityType::People
            },
            filters: FilterState {
                job_titles: text(&self.title),
                industry: text(&self.industry),
                location: text(&self.location),
                keyword: text(&self.keyword),
                intent: self.intent.map(IntentBucket::from),
                ..FilterState::default()
            },
            page: self.page,
            saved_search_id: self.saved_search.clone(),
        }
    }
}

pub(crate) fn run_pipeline_report(args: PipelineReportArgs) -> Result<(), AppError> {
    let (deals, source) = match args.deals_csv {
        Some(path) => {
            let deals = parse_deals_from_path(&path)?;
            (deals, path.display().to_string())
        }
        None => (Fixtures::demo().deals, "demo workspace".to_string()),
    };

    println!("Pipeline report ({source})");
    render_pipeline(&summarize(&deals), &deals, args.top);
    Ok(())
}

pub(crate) fn run_prospect_search(args: ProspectSearchArgs) -> Result<(), AppError> {
    let store = match args.leads_csv.as_ref() {
        Some(_) => Arc::new(MemoryStore::new()),
        None => build_store(true),
    };
    let service = ProspectingService::new(store, Arc::new(LogNotifier));

    if let Some(path) = args.leads_csv.as_ref() {
        let drafts = parse_leads_from_path(path)?;
        // New leads are listed first; import in reverse to keep file order.
        for draft in drafts.into_iter().rev() {
            service.create_lead(draft).map_err(AppError::workflow)?;
        }
    }

    let results = service.search(args.request()).map_err(AppError::workflow)?;
    render_search(&results);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let store = build_store(true);
    let notifier = Arc::new(LogNotifier);

    println!("Nexus CRM demo ({today})");

    let analytics = AnalyticsService::new(store.clone());
    let stats = analytics.dashboard().map_err(AppError::workflow)?;
    println!("\nDashboard");
    println!(
        "- {} pipeline value | {} active deals | {} emails sent | {} meetings booked",
        format_usd(stats.pipeline_value),
        stats.active_deals,
        stats.emails_sent,
        stats.meetings_booked
    );

    let prospects = ProspectingService::new(store.clone(), notifier.clone());
    let high_intent = prospects
        .search(SearchRequest {
            filters: FilterState {
                intent: Some(IntentBucket::High),
                ..FilterState::default()
            },
            ..SearchRequest::default()
        })
        .map_err(AppError::workflow)?;
    println!("\nHigh intent prospects");
    render_search(&high_intent);

    let deals = Fixtures::demo().deals;
    println!("\nPipeline");
    render_pipeline(&summarize(&deals), &deals, 3);

    let outreach = OutreachService::new(store.clone(), notifier.clone());
    println!("\nSequences");
    for view in outreach.sequences().map_err(AppError::workflow)? {
        println!(
            "- {} [{}] {} steps | {}% open | {}% reply",
            view.sequence.name,
            if view.sequence.active { "active" } else { "paused" },
            view.sequence.steps.len(),
            view.open_rate,
            view.reply_rate
        );
    }
    for campaign in outreach.campaigns().map_err(AppError::workflow)? {
        println!(
            "- LinkedIn: {} ({:?}) {} steps",
            campaign.name,
            campaign.status,
            campaign.steps.len()
        );
    }

    let schedule = ScheduleService::new(store.clone(), notifier.clone());
    println!(
        "\nCalendar ({} upcoming after {today})",
        schedule.upcoming_count(today).map_err(AppError::workflow)?
    );
    for day in schedule.meetings_by_day().map_err(AppError::workflow)? {
        println!("- {}", day.date.format("%a %b %-d"));
        for meeting in day.meetings {
            println!(
                "    {} {} ({} min){}",
                meeting.time,
                meeting.title,
                meeting.duration_minutes,
                meeting
                    .lead_name
                    .map(|name| format!(" with {name}"))
                    .unwrap_or_default()
            );
        }
    }
    println!("Pending tasks:");
    for task in stats.pending_tasks {
        println!("  - [{:?}] {} (due {})", task.priority, task.title, task.due);
    }

    let inbox = InboxService::new(store, notifier);
    println!(
        "\nInbox: {} unread",
        inbox.unread_count().map_err(AppError::workflow)?
    );
    Ok(())
}

fn render_pipeline(summary: &PipelineSummary, deals: &[Deal], top: usize) {
    for column in &summary.columns {
        println!(
            "- {:<12} {:>2} deals | {:>10} | {:.0}% probability",
            column.stage_label,
            column.deal_count,
            format_usd(column.total_value),
            column.probability * 100.0
        );
    }
    println!(
        "Total {} | weighted forecast {}",
        format_usd(summary.total_pipeline),
        format_usd(summary.weighted_pipeline.round() as u64)
    );

    if top > 0 && !deals.is_empty() {
        println!("Top deals:");
        for deal in top_deals(deals, top) {
            println!(
                "  - {} ({}) {} [{}]",
                deal.title,
                deal.lead_name,
                format_usd(deal.value),
                deal.stage.label()
            );
        }
    }
}

fn render_search(results: &SearchResults) {
    match results {
        SearchResults::People(page) => {
            for lead in &page.items {
                println!(
                    "- {} | {} @ {} | intent {} | {}",
                    lead.name,
                    lead.title,
                    lead.company,
                    lead.intent_score
                        .map(|score| score.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    lead.email.as_deref().unwrap_or("email locked")
                );
            }
            println!(
                "Page {}/{} ({} matches)",
                page.page,
                page.total_pages.max(1),
                page.total_items
            );
        }
        SearchResults::Companies(page) => {
            for view in &page.items {
                let company = &view.company;
                println!(
                    "- {} | {} | {} employees | {}",
                    company.name, company.industry, company.employees, company.location
                );
            }
            println!(
                "Page {}/{} ({} matches)",
                page.page,
                page.total_pages.max(1),
                page.total_items
            );
        }
    }
}

fn format_usd(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(950), "$950");
        assert_eq!(format_usd(47_000), "$47,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn search_args_become_a_people_request() {
        let args = ProspectSearchArgs {
            intent: Some(IntentArg::High),
            title: Some("Director".to_string()),
            page: 2,
            ..ProspectSearchArgs::default()
        };

        let request = args.request();

        assert_eq!(request.entity_type, EntityType::People);
        assert_eq!(request.filters.intent, Some(IntentBucket::High));
        assert_eq!(request.filters.job_titles, "Director");
        assert!(request.filters.industry.is_empty());
        assert_eq!(request.page, 2);
    }

    #[test]
    fn company_flag_switches_entity() {
        let args = ProspectSearchArgs {
            companies: true,
            saved_search: Some("s2".to_string()),
            ..ProspectSearchArgs::default()
        };

        let request = args.request();

        assert_eq!(request.entity_type, EntityType::Companies);
        assert_eq!(request.saved_search_id.as_deref(), Some("s2"));
    }

    #[test]
    fn seeded_high_intent_search_runs_offline() {
        let args = ProspectSearchArgs {
            intent: Some(IntentArg::High),
            page: 1,
            ..ProspectSearchArgs::default()
        };

        assert!(run_prospect_search(args).is_ok());
    }
}
