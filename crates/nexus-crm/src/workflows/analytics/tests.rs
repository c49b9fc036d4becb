use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::router::{analytics_router, dashboard_handler};
use super::service::AnalyticsService;
use crate::store::{MemoryStore, UnavailableStore};
use crate::workflows::http::read_json_body;
use crate::workflows::lists::{ListId, ListMember, ListMembership, ListRepository};
use crate::workflows::prospecting::LeadId;

fn seeded() -> (AnalyticsService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    (AnalyticsService::new(store.clone()), store)
}

fn member(list: &str, lead: &str) -> ListMembership {
    ListMembership {
        list_id: ListId(list.to_string()),
        member: ListMember::Lead(LeadId(lead.to_string())),
    }
}

#[test]
fn dashboard_rolls_up_seeded_workflows() {
    let (service, _) = seeded();

    let stats = service.dashboard().expect("dashboard");

    assert_eq!(stats.pipeline_value, 47_000);
    assert_eq!(stats.active_deals, 3);
    assert_eq!(stats.emails_sent, 420);
    assert_eq!(stats.meetings_booked, 3);
    let top: Vec<u64> = stats.top_deals.iter().map(|deal| deal.value).collect();
    assert_eq!(top, vec![25_000, 15_000, 5_000, 2_000]);
    let pending: Vec<&str> = stats
        .pending_tasks
        .iter()
        .map(|task| task.id.0.as_str())
        .collect();
    assert_eq!(pending, vec!["1", "2", "3"]);
}

#[test]
fn overview_counts_closed_revenue_and_lead_sources() {
    let (service, _) = seeded();

    let overview = service.overview().expect("overview");

    assert_eq!(overview.total_revenue, 5_000);
    assert_eq!(overview.deals_won, 1);
    assert_eq!(overview.total_leads, 12);
    let sources: Vec<(&str, u64)> = overview
        .lead_sources
        .iter()
        .map(|source| (source.name, source.value))
        .collect();
    assert_eq!(
        sources,
        vec![("Email", 5), ("LinkedIn", 3), ("Inbound", 1), ("Events", 1)]
    );
}

#[test]
fn list_counts_follow_memberships() {
    let (service, store) = seeded();
    store.add_membership(member("l1", "1")).expect("add");
    store.add_membership(member("l1", "2")).expect("add");
    store.add_membership(member("l3", "2")).expect("add");

    let counts: Vec<(String, usize)> = service
        .list_counts()
        .expect("counts")
        .into_iter()
        .map(|count| (count.list_id, count.members))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("l1".to_string(), 2),
            ("l2".to_string(), 0),
            ("l3".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn routes_serve_every_roll_up() {
    let (service, _) = seeded();
    let app = analytics_router(Arc::new(service));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/analytics/dashboard")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pipeline_value"], 47_000);
    assert_eq!(body["top_deals"].as_array().map(Vec::len), Some(4));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/analytics/overview")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["deals_won"], 1);
    assert_eq!(body["lead_sources"][0]["name"], "Email");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/analytics/lists")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body[1]["name"], "Competitors");
    assert_eq!(body[1]["members"], 0);
}

#[tokio::test]
async fn outage_maps_to_server_error() {
    let service = Arc::new(AnalyticsService::new(Arc::new(UnavailableStore)));

    let response = dashboard_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
