use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

use super::domain::{EmailBrief, IcebreakerRequest, PostDraft, PostId, RefineRequest};
use super::generator::ContentGenerator;
use super::repository::ContentRepository;
use super::service::{ContentError, ContentService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::notices::Notifier;
use crate::workflows::prospecting::repository::ProspectRepository;

pub fn content_router<R, N, G>(service: Arc<ContentService<R, N, G>>) -> Router
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    Router::new()
        .route(
            "/api/v1/content/posts",
            get(posts_handler::<R, N, G>).post(schedule_post_handler::<R, N, G>),
        )
        .route(
            "/api/v1/content/posts/:post_id",
            delete(delete_post_handler::<R, N, G>),
        )
        .route("/api/v1/content/email", post(email_handler::<R, N, G>))
        .route(
            "/api/v1/content/icebreaker",
            post(icebreaker_handler::<R, N, G>),
        )
        .route("/api/v1/content/refine", post(refine_handler::<R, N, G>))
        .with_state(service)
}

pub(crate) async fn posts_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.posts() {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(error) => content_failure(error),
    }
}

pub(crate) async fn schedule_post_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
    Json(draft): Json<PostDraft>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.schedule_post(draft) {
        Ok(post) => (StatusCode::CREATED, Json(post)).into_response(),
        Err(error) => content_failure(error),
    }
}

pub(crate) async fn delete_post_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
    Path(post_id): Path<String>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.delete_post(&PostId(post_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => content_failure(error),
    }
}

pub(crate) async fn email_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
    Json(brief): Json<EmailBrief>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.generate_email(brief).await {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(error) => content_failure(error),
    }
}

pub(crate) async fn icebreaker_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
    Json(request): Json<IcebreakerRequest>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.generate_icebreaker(request).await {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(error) => content_failure(error),
    }
}

pub(crate) async fn refine_handler<R, N, G>(
    State(service): State<Arc<ContentService<R, N, G>>>,
    Json(request): Json<RefineRequest>,
) -> Response
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    match service.refine(request).await {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(error) => content_failure(error),
    }
}

fn content_failure(error: ContentError) -> Response {
    match error {
        ContentError::TitleRequired
        | ContentError::InvalidDay(_)
        | ContentError::BriefIncomplete => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        ContentError::UnknownLead(_) => json_error(StatusCode::NOT_FOUND, error.to_string()),
        ContentError::Generator(_) => json_error(StatusCode::BAD_GATEWAY, error.to_string()),
        ContentError::Repository(ref inner) => repository_failure(inner),
    }
}
