use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use nexus_crm::store::MemoryStore;
use nexus_crm::workflows::accounts::{account_router, AccountService};
use nexus_crm::workflows::analytics::{analytics_router, AnalyticsService};
use nexus_crm::workflows::content::{content_router, ContentGenerator, ContentService};
use nexus_crm::workflows::inbox::{inbox_router, InboxService};
use nexus_crm::workflows::lists::{list_router, ListService};
use nexus_crm::workflows::outreach::{outreach_router, OutreachService};
use nexus_crm::workflows::pipeline::{pipeline_router, PipelineService};
use nexus_crm::workflows::prospecting::{prospecting_router, ProspectingService};
use nexus_crm::workflows::scheduling::{schedule_router, ScheduleService};
use nexus_crm::workflows::Notifier;
use serde_json::json;
use std::sync::Arc;

/// Every workflow router over one shared store, plus the health and readiness endpoints.
pub(crate) fn api_router<N, G>(
    store: Arc<MemoryStore>,
    notifier: Arc<N>,
    generator: Arc<G>,
    default_api_key: Option<String>,
) -> Router
where
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    let prospecting = Arc::new(ProspectingService::new(store.clone(), notifier.clone()));
    let lists = Arc::new(ListService::new(store.clone(), notifier.clone()));
    let pipeline = Arc::new(PipelineService::new(store.clone(), notifier.clone()));
    let outreach = Arc::new(OutreachService::new(store.clone(), notifier.clone()));
    let schedule = Arc::new(ScheduleService::new(store.clone(), notifier.clone()));
    let inbox = Arc::new(InboxService::new(store.clone(), notifier.clone()));
    let content = Arc::new(ContentService::new(
        store.clone(),
        notifier.clone(),
        generator,
        default_api_key,
    ));
    let accounts = Arc::new(AccountService::new(store.clone(), notifier));
    let analytics = Arc::new(AnalyticsService::new(store));

    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(prospecting_router(prospecting))
        .merge(list_router(lists))
        .merge(pipeline_router(pipeline))
        .merge(outreach_router(outreach))
        .merge(schedule_router(schedule))
        .merge(inbox_router(inbox))
        .merge(content_router(content))
        .merge(account_router(accounts))
        .merge(analytics_router(analytics))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
