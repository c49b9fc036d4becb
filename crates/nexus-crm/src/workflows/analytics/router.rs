use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::service::AnalyticsService;
use crate::workflows::http::repository_failure;
use crate::workflows::lists::ListRepository;
use crate::workflows::outreach::OutreachRepository;
use crate::workflows::pipeline::DealRepository;
use crate::workflows::prospecting::ProspectRepository;
use crate::workflows::scheduling::ScheduleRepository;

pub fn analytics_router<R>(service: Arc<AnalyticsService<R>>) -> Router
where
    R: DealRepository
        + OutreachRepository
        + ScheduleRepository
        + ProspectRepository
        + ListRepository
        + 'static,
{
    Router::new()
        .route("/api/v1/analytics/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/analytics/overview", get(overview_handler::<R>))
        .route("/api/v1/analytics/lists", get(list_counts_handler::<R>))
        .with_state(service)
}

pub(crate) async fn dashboard_handler<R>(State(service): State<Arc<AnalyticsService<R>>>) -> Response
where
    R: DealRepository
        + OutreachRepository
        + ScheduleRepository
        + ProspectRepository
        + ListRepository
        + 'static,
{
    match service.dashboard() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => repository_failure(&error),
    }
}

pub(crate) async fn overview_handler<R>(State(service): State<Arc<AnalyticsService<R>>>) -> Response
where
    R: DealRepository
        + OutreachRepository
        + ScheduleRepository
        + ProspectRepository
        + ListRepository
        + 'static,
{
    match service.overview() {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => repository_failure(&error),
    }
}

pub(crate) async fn list_counts_handler<R>(
    State(service): State<Arc<AnalyticsService<R>>>,
) -> Response
where
    R: DealRepository
        + OutreachRepository
        + ScheduleRepository
        + ProspectRepository
        + ListRepository
        + 'static,
{
    match service.list_counts() {
        Ok(counts) => (StatusCode::OK, Json(counts)).into_response(),
        Err(error) => repository_failure(&error),
    }
}
