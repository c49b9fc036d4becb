use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{DealDraft, DealId, DealStage};
use super::repository::DealRepository;
use super::service::{PipelineError, PipelineService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;
use crate::workflows::prospecting::repository::ProspectRepository;

const DEFAULT_TOP_DEALS: usize = 4;

pub fn pipeline_router<R, N>(service: Arc<PipelineService<R, N>>) -> Router
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/deals",
            get(deals_handler::<R, N>).post(create_handler::<R, N>),
        )
        .route(
            "/api/v1/deals/:deal_id",
            put(update_handler::<R, N>).delete(delete_handler::<R, N>),
        )
        .route("/api/v1/deals/:deal_id/stage", put(stage_handler::<R, N>))
        .route("/api/v1/pipeline/summary", get(summary_handler::<R, N>))
        .route("/api/v1/pipeline/top", get(top_handler::<R, N>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StageBody {
    stage: DealStage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopQuery {
    limit: Option<usize>,
}

pub(crate) async fn deals_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.deals() {
        Ok(deals) => (StatusCode::OK, Json(deals)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn create_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
    Json(draft): Json<DealDraft>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.create(draft) {
        Ok(deal) => (StatusCode::CREATED, Json(deal)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn update_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
    Path(deal_id): Path<String>,
    Json(draft): Json<DealDraft>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.update(&DealId(deal_id), draft) {
        Ok(deal) => (StatusCode::OK, Json(deal)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn stage_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
    Path(deal_id): Path<String>,
    Json(body): Json<StageBody>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.move_to_stage(&DealId(deal_id), body.stage) {
        Ok(deal) => (StatusCode::OK, Json(deal)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn delete_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
    Path(deal_id): Path<String>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete(&DealId(deal_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn summary_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

pub(crate) async fn top_handler<R, N>(
    State(service): State<Arc<PipelineService<R, N>>>,
    Query(query): Query<TopQuery>,
) -> Response
where
    R: DealRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.top_deals(query.limit.unwrap_or(DEFAULT_TOP_DEALS)) {
        Ok(deals) => (StatusCode::OK, Json(deals)).into_response(),
        Err(error) => pipeline_failure(error),
    }
}

fn pipeline_failure(error: PipelineError) -> Response {
    match error {
        PipelineError::Repository(ref inner) => repository_failure(inner),
        other => json_error(StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
    }
}
