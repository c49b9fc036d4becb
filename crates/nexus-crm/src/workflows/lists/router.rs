use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{ListId, ListMember};
use super::repository::ListRepository;
use super::service::{ListError, ListService, SaveToListRequest};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;
use crate::workflows::prospecting::domain::{CompanyId, LeadId};
use crate::workflows::prospecting::repository::ProspectRepository;

pub fn list_router<R, N>(service: Arc<ListService<R, N>>) -> Router
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/lists",
            get(lists_handler::<R, N>).post(create_handler::<R, N>),
        )
        .route("/api/v1/lists/members", post(save_handler::<R, N>))
        .route("/api/v1/lists/:list_id", delete(delete_handler::<R, N>))
        .route(
            "/api/v1/lists/:list_id/members",
            get(members_handler::<R, N>),
        )
        .route(
            "/api/v1/lists/:list_id/members/:kind/:member_id",
            delete(remove_member_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateListBody {
    name: String,
}

pub(crate) async fn lists_handler<R, N>(State(service): State<Arc<ListService<R, N>>>) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.lists() {
        Ok(lists) => (StatusCode::OK, Json(lists)).into_response(),
        Err(error) => list_failure(error),
    }
}

pub(crate) async fn create_handler<R, N>(
    State(service): State<Arc<ListService<R, N>>>,
    Json(body): Json<CreateListBody>,
) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.create(&body.name) {
        Ok(list) => (StatusCode::CREATED, Json(list)).into_response(),
        Err(error) => list_failure(error),
    }
}

pub(crate) async fn delete_handler<R, N>(
    State(service): State<Arc<ListService<R, N>>>,
    Path(list_id): Path<String>,
) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete(&ListId(list_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => list_failure(error),
    }
}

pub(crate) async fn save_handler<R, N>(
    State(service): State<Arc<ListService<R, N>>>,
    Json(request): Json<SaveToListRequest>,
) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.save_members(request) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => list_failure(error),
    }
}

pub(crate) async fn members_handler<R, N>(
    State(service): State<Arc<ListService<R, N>>>,
    Path(list_id): Path<String>,
) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    match service.members(&ListId(list_id)) {
        Ok(members) => (StatusCode::OK, Json(members)).into_response(),
        Err(error) => list_failure(error),
    }
}

pub(crate) async fn remove_member_handler<R, N>(
    State(service): State<Arc<ListService<R, N>>>,
    Path((list_id, kind, member_id)): Path<(String, String, String)>,
) -> Response
where
    R: ListRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    let member = match kind.as_str() {
        "lead" => ListMember::Lead(LeadId(member_id)),
        "company" => ListMember::Company(CompanyId(member_id)),
        other => {
            return json_error(
                StatusCode::BAD_REQUEST,
                format!("unknown member kind `{other}`"),
            )
        }
    };

    match service.remove_member(&ListId(list_id), member) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => list_failure(error),
    }
}

fn list_failure(error: ListError) -> Response {
    match error {
        ListError::UnknownList(_) => json_error(StatusCode::NOT_FOUND, error.to_string()),
        ListError::Repository(ref inner) => repository_failure(inner),
        other => json_error(StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
    }
}
