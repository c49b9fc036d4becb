use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{MeetingDraft, MeetingId, TaskDraft, TaskId};
use super::repository::ScheduleRepository;
use super::service::{ScheduleError, ScheduleService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;
use crate::workflows::prospecting::repository::ProspectRepository;

const DEFAULT_PENDING_TASKS: usize = 4;

pub fn schedule_router<R, N>(service: Arc<ScheduleService<R, N>>) -> Router
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/meetings",
            get(meetings_handler::<R, N>).post(schedule_handler::<R, N>),
        )
        .route("/api/v1/meetings/by-day", get(by_day_handler::<R, N>))
        .route("/api/v1/meetings/upcoming", get(upcoming_handler::<R, N>))
        .route(
            "/api/v1/meetings/:meeting_id",
            put(reschedule_handler::<R, N>).delete(cancel_handler::<R, N>),
        )
        .route(
            "/api/v1/tasks",
            get(tasks_handler::<R, N>).post(create_task_handler::<R, N>),
        )
        .route("/api/v1/tasks/pending", get(pending_handler::<R, N>))
        .route(
            "/api/v1/tasks/:task_id",
            delete(delete_task_handler::<R, N>),
        )
        .route(
            "/api/v1/tasks/:task_id/toggle",
            post(toggle_task_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpcomingQuery {
    today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PendingQuery {
    limit: Option<usize>,
}

pub(crate) async fn meetings_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.meetings() {
        Ok(meetings) => (StatusCode::OK, Json(meetings)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn by_day_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.meetings_by_day() {
        Ok(days) => (StatusCode::OK, Json(days)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn upcoming_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Query(query): Query<UpcomingQuery>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    let today = query
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    match service.upcoming_count(today) {
        Ok(count) => (StatusCode::OK, Json(json!({ "today": today, "upcoming": count })))
            .into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn schedule_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Json(draft): Json<MeetingDraft>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.schedule(draft) {
        Ok(meeting) => (StatusCode::CREATED, Json(meeting)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn reschedule_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Path(meeting_id): Path<String>,
    Json(draft): Json<MeetingDraft>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.reschedule(&MeetingId(meeting_id), draft) {
        Ok(meeting) => (StatusCode::OK, Json(meeting)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn cancel_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Path(meeting_id): Path<String>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.cancel(&MeetingId(meeting_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn tasks_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.tasks() {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn pending_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Query(query): Query<PendingQuery>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.pending_tasks(query.limit.unwrap_or(DEFAULT_PENDING_TASKS)) {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn create_task_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Json(draft): Json<TaskDraft>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.create_task(draft) {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn toggle_task_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Path(task_id): Path<String>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.toggle_task(&TaskId(task_id)) {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(error) => schedule_failure(error),
    }
}

pub(crate) async fn delete_task_handler<R, N>(
    State(service): State<Arc<ScheduleService<R, N>>>,
    Path(task_id): Path<String>,
) -> Response
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_task(&TaskId(task_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => schedule_failure(error),
    }
}

fn schedule_failure(error: ScheduleError) -> Response {
    match error {
        ScheduleError::Repository(ref inner) => repository_failure(inner),
        other => json_error(StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
    }
}
