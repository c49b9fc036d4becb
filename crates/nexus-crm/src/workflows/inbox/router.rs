use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EmailDraft, EmailId};
use super::repository::InboxRepository;
use super::service::{InboxError, InboxService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;

pub fn inbox_router<R, N>(service: Arc<InboxService<R, N>>) -> Router
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/inbox/emails",
            get(emails_handler::<R, N>).post(add_email_handler::<R, N>),
        )
        .route(
            "/api/v1/inbox/emails/:email_id",
            delete(delete_email_handler::<R, N>),
        )
        .route("/api/v1/inbox/unread", get(unread_handler::<R, N>))
        .route("/api/v1/linkedin/messages", get(messages_handler::<R, N>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InboxQuery {
    q: Option<String>,
}

pub(crate) async fn emails_handler<R, N>(
    State(service): State<Arc<InboxService<R, N>>>,
    Query(query): Query<InboxQuery>,
) -> Response
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    match service.emails(query.q.as_deref()) {
        Ok(emails) => (StatusCode::OK, Json(emails)).into_response(),
        Err(error) => inbox_failure(error),
    }
}

pub(crate) async fn add_email_handler<R, N>(
    State(service): State<Arc<InboxService<R, N>>>,
    Json(draft): Json<EmailDraft>,
) -> Response
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    match service.add_email(draft) {
        Ok(email) => (StatusCode::CREATED, Json(email)).into_response(),
        Err(error) => inbox_failure(error),
    }
}

pub(crate) async fn delete_email_handler<R, N>(
    State(service): State<Arc<InboxService<R, N>>>,
    Path(email_id): Path<String>,
) -> Response
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_email(&EmailId(email_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => inbox_failure(error),
    }
}

pub(crate) async fn unread_handler<R, N>(State(service): State<Arc<InboxService<R, N>>>) -> Response
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    match service.unread_count() {
        Ok(unread) => (StatusCode::OK, Json(json!({ "unread": unread }))).into_response(),
        Err(error) => inbox_failure(error),
    }
}

pub(crate) async fn messages_handler<R, N>(
    State(service): State<Arc<InboxService<R, N>>>,
) -> Response
where
    R: InboxRepository + 'static,
    N: Notifier + 'static,
{
    match service.linkedin_messages() {
        Ok(messages) => (StatusCode::OK, Json(messages)).into_response(),
        Err(error) => inbox_failure(error),
    }
}

fn inbox_failure(error: InboxError) -> Response {
    match error {
        InboxError::MissingFields => json_error(StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
        InboxError::Repository(ref inner) => repository_failure(inner),
    }
}
