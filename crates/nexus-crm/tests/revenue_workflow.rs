use std::sync::Arc;

use chrono::NaiveDate;
use nexus_crm::store::MemoryStore;
use nexus_crm::workflows::analytics::AnalyticsService;
use nexus_crm::workflows::pipeline::{DealDraft, DealId, DealStage, PipelineService};
use nexus_crm::workflows::prospecting::LeadId;
use nexus_crm::workflows::scheduling::{MeetingDraft, MeetingKind, ScheduleService, TaskId};
use nexus_crm::workflows::RecordingNotifier;

#[test]
fn pipeline_and_calendar_changes_flow_into_analytics() {
    let store = Arc::new(MemoryStore::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = PipelineService::new(store.clone(), notifier.clone());
    let schedule = ScheduleService::new(store.clone(), notifier.clone());
    let analytics = AnalyticsService::new(store);

    let baseline = analytics.dashboard().expect("dashboard");
    assert_eq!(baseline.pipeline_value, 47_000);
    assert_eq!(baseline.meetings_booked, 3);

    let deal = pipeline
        .create(DealDraft {
            title: "Platform Expansion".to_string(),
            value: 8_000,
            lead_id: LeadId("5".to_string()),
        })
        .expect("create deal");
    assert_eq!(deal.stage, DealStage::ToContact);
    pipeline
        .move_to_stage(&DealId("2".to_string()), DealStage::Closed)
        .expect("close deal");

    let meeting = schedule
        .schedule(MeetingDraft {
            title: "Kickoff".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 30).expect("date"),
            time: "09:00".to_string(),
            duration_minutes: 45,
            kind: MeetingKind::Zoom,
            lead_id: Some(LeadId("5".to_string())),
            notes: None,
        })
        .expect("schedule");
    assert!(meeting.lead_name.is_some());
    schedule
        .toggle_task(&TaskId("1".to_string()))
        .expect("complete task");

    let stats = analytics.dashboard().expect("dashboard");
    assert_eq!(stats.pipeline_value, 55_000);
    assert_eq!(stats.active_deals, 3);
    assert_eq!(stats.meetings_booked, 4);
    let pending: Vec<&str> = stats
        .pending_tasks
        .iter()
        .map(|task| task.id.0.as_str())
        .collect();
    assert_eq!(pending, vec!["2", "3"]);

    let overview = analytics.overview().expect("overview");
    assert_eq!(overview.total_revenue, 20_000);
    assert_eq!(overview.deals_won, 2);

    let summary = pipeline.summary().expect("summary");
    assert_eq!(summary.total_pipeline, 55_000);
}
