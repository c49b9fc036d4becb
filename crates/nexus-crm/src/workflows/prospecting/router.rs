use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{CompanyDraft, CompanyId, LeadDraft, LeadId};
use super::filter::FilterState;
use super::repository::ProspectRepository;
use super::service::{ExportRequest, ProspectingError, ProspectingService, SearchRequest};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::lists::ListRepository;
use crate::workflows::notices::Notifier;

/// HTTP surface for prospect search, records, exports, and saved searches.
pub fn prospecting_router<R, N>(service: Arc<ProspectingService<R, N>>) -> Router
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/prospects/search", post(search_handler::<R, N>))
        .route("/api/v1/prospects/export", post(export_handler::<R, N>))
        .route("/api/v1/leads", post(create_lead_handler::<R, N>))
        .route(
            "/api/v1/leads/:lead_id",
            get(lead_handler::<R, N>)
                .put(update_lead_handler::<R, N>)
                .delete(delete_lead_handler::<R, N>),
        )
        .route(
            "/api/v1/leads/:lead_id/reveal",
            post(reveal_handler::<R, N>),
        )
        .route("/api/v1/companies", post(create_company_handler::<R, N>))
        .route(
            "/api/v1/companies/:company_id",
            get(company_handler::<R, N>)
                .put(update_company_handler::<R, N>)
                .delete(delete_company_handler::<R, N>),
        )
        .route(
            "/api/v1/saved-searches",
            get(saved_searches_handler::<R, N>).post(save_search_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveSearchBody {
    name: String,
    #[serde(default)]
    filters: FilterState,
}

pub(crate) async fn search_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Json(request): Json<SearchRequest>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.search(request) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn export_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Json(request): Json<ExportRequest>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.export(&request) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())],
            csv,
        )
            .into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn lead_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.lead(&LeadId(lead_id)) {
        Ok(lead) => (StatusCode::OK, Json(lead)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn create_lead_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Json(draft): Json<LeadDraft>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.create_lead(draft) {
        Ok(lead) => (StatusCode::CREATED, Json(lead)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn update_lead_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(lead_id): Path<String>,
    Json(draft): Json<LeadDraft>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.update_lead(&LeadId(lead_id), draft) {
        Ok(lead) => (StatusCode::OK, Json(lead)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn delete_lead_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_lead(&LeadId(lead_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn reveal_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.reveal_contact(&LeadId(lead_id)) {
        Ok(lead) => (StatusCode::OK, Json(lead)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn company_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.company(&CompanyId(company_id)) {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn create_company_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Json(draft): Json<CompanyDraft>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.create_company(draft) {
        Ok(company) => (StatusCode::CREATED, Json(company)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn update_company_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(company_id): Path<String>,
    Json(draft): Json<CompanyDraft>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.update_company(&CompanyId(company_id), draft) {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn delete_company_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_company(&CompanyId(company_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn saved_searches_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.saved_searches() {
        Ok(searches) => (StatusCode::OK, Json(searches)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

pub(crate) async fn save_search_handler<R, N>(
    State(service): State<Arc<ProspectingService<R, N>>>,
    Json(body): Json<SaveSearchBody>,
) -> Response
where
    R: ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.save_search(&body.name, body.filters) {
        Ok(search) => (StatusCode::CREATED, Json(search)).into_response(),
        Err(error) => prospecting_failure(error),
    }
}

fn prospecting_failure(error: ProspectingError) -> Response {
    match error {
        ProspectingError::NameRequired => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        ProspectingError::UnknownSavedSearch(_) => {
            json_error(StatusCode::NOT_FOUND, error.to_string())
        }
        ProspectingError::Repository(ref inner) => repository_failure(inner),
        ProspectingError::Export(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
