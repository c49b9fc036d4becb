use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::domain::{ProfileUpdate, Registration};
use super::repository::AccountRepository;
use super::service::{AccountError, AccountService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;

pub fn account_router<R, N>(service: Arc<AccountService<R, N>>) -> Router
where
    R: AccountRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/users", post(register_handler::<R, N>))
        .route(
            "/api/v1/users/:auth_id",
            get(profile_handler::<R, N>).put(update_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R, N>(
    State(service): State<Arc<AccountService<R, N>>>,
    Json(registration): Json<Registration>,
) -> Response
where
    R: AccountRepository + 'static,
    N: Notifier + 'static,
{
    match service.register(registration) {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(error) => account_failure(error),
    }
}

pub(crate) async fn profile_handler<R, N>(
    State(service): State<Arc<AccountService<R, N>>>,
    Path(auth_id): Path<String>,
) -> Response
where
    R: AccountRepository + 'static,
    N: Notifier + 'static,
{
    match service.profile(&auth_id) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => account_failure(error),
    }
}

pub(crate) async fn update_handler<R, N>(
    State(service): State<Arc<AccountService<R, N>>>,
    Path(auth_id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Response
where
    R: AccountRepository + 'static,
    N: Notifier + 'static,
{
    match service.update(&auth_id, update) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => account_failure(error),
    }
}

fn account_failure(error: AccountError) -> Response {
    match error {
        AccountError::MissingFields => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        AccountError::UnknownUser(_) => json_error(StatusCode::NOT_FOUND, error.to_string()),
        AccountError::Repository(ref inner) => repository_failure(inner),
    }
}
