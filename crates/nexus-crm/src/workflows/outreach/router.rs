use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{CampaignId, SequenceId, SequenceStep, StepDraft, StepId};
use super::finder::LeadFinderQuery;
use super::repository::OutreachRepository;
use super::service::{NewSequence, OutreachError, OutreachService};
use crate::workflows::http::{json_error, repository_failure};
use crate::workflows::lists::ListRepository;
use crate::workflows::notices::Notifier;
use crate::workflows::prospecting::domain::LeadId;
use crate::workflows::prospecting::repository::ProspectRepository;

pub fn outreach_router<R, N>(service: Arc<OutreachService<R, N>>) -> Router
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/sequences",
            get(sequences_handler::<R, N>).post(create_sequence_handler::<R, N>),
        )
        .route(
            "/api/v1/sequences/:sequence_id",
            get(sequence_handler::<R, N>).delete(delete_sequence_handler::<R, N>),
        )
        .route(
            "/api/v1/sequences/:sequence_id/toggle",
            post(toggle_sequence_handler::<R, N>),
        )
        .route(
            "/api/v1/sequences/:sequence_id/steps",
            post(add_sequence_step_handler::<R, N>),
        )
        .route(
            "/api/v1/sequences/:sequence_id/steps/:step_id",
            delete(remove_sequence_step_handler::<R, N>),
        )
        .route(
            "/api/v1/sequences/:sequence_id/enroll",
            post(enroll_sequence_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns",
            get(campaigns_handler::<R, N>).post(create_campaign_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id",
            get(campaign_handler::<R, N>).delete(delete_campaign_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id/toggle",
            post(toggle_campaign_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id/steps",
            post(add_campaign_step_handler::<R, N>).put(replace_campaign_steps_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id/steps/connect",
            post(quick_connect_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id/steps/:step_id",
            delete(remove_campaign_step_handler::<R, N>),
        )
        .route(
            "/api/v1/linkedin/campaigns/:campaign_id/enroll",
            post(enroll_campaign_handler::<R, N>),
        )
        .route("/api/v1/linkedin/leads", post(find_leads_handler::<R, N>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SequenceQuery {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CampaignBody {
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnrollBody {
    lead_ids: Vec<LeadId>,
}

pub(crate) async fn sequences_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Query(query): Query<SequenceQuery>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    let result = match query.q.as_deref() {
        Some(q) => service.search_sequences(q),
        None => service.sequences(),
    };
    match result {
        Ok(sequences) => (StatusCode::OK, Json(sequences)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn sequence_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(sequence_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.sequence(&SequenceId(sequence_id)) {
        Ok(sequence) => (StatusCode::OK, Json(sequence)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn create_sequence_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Json(request): Json<NewSequence>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.create_sequence(request) {
        Ok(sequence) => (StatusCode::CREATED, Json(sequence)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn toggle_sequence_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(sequence_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.toggle_sequence(&SequenceId(sequence_id)) {
        Ok(sequence) => (StatusCode::OK, Json(sequence)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn add_sequence_step_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(sequence_id): Path<String>,
    Json(draft): Json<StepDraft>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.add_sequence_step(&SequenceId(sequence_id), draft) {
        Ok(step) => (StatusCode::CREATED, Json(step)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn remove_sequence_step_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path((sequence_id, step_id)): Path<(String, String)>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.remove_sequence_step(&SequenceId(sequence_id), &StepId(step_id)) {
        Ok(sequence) => (StatusCode::OK, Json(sequence)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn delete_sequence_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(sequence_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_sequence(&SequenceId(sequence_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn enroll_sequence_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(sequence_id): Path<String>,
    Json(body): Json<EnrollBody>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.enroll_in_sequence(&SequenceId(sequence_id), &body.lead_ids) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn campaigns_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.campaigns() {
        Ok(campaigns) => (StatusCode::OK, Json(campaigns)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn campaign_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.campaign(&CampaignId(campaign_id)) {
        Ok(campaign) => (StatusCode::OK, Json(campaign)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn create_campaign_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Json(body): Json<CampaignBody>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.create_campaign(&body.name) {
        Ok(campaign) => (StatusCode::CREATED, Json(campaign)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn toggle_campaign_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.toggle_campaign(&CampaignId(campaign_id)) {
        Ok(campaign) => (StatusCode::OK, Json(campaign)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn add_campaign_step_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
    Json(draft): Json<StepDraft>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.add_campaign_step(&CampaignId(campaign_id), draft) {
        Ok(step) => (StatusCode::CREATED, Json(step)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn replace_campaign_steps_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
    Json(steps): Json<Vec<SequenceStep>>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.replace_campaign_steps(&CampaignId(campaign_id), steps) {
        Ok(campaign) => (StatusCode::OK, Json(campaign)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn quick_connect_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.quick_add_connection(&CampaignId(campaign_id)) {
        Ok(step) => (StatusCode::CREATED, Json(step)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn remove_campaign_step_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path((campaign_id, step_id)): Path<(String, String)>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.remove_campaign_step(&CampaignId(campaign_id), &StepId(step_id)) {
        Ok(campaign) => (StatusCode::OK, Json(campaign)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn delete_campaign_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.delete_campaign(&CampaignId(campaign_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn enroll_campaign_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Path(campaign_id): Path<String>,
    Json(body): Json<EnrollBody>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.enroll_in_campaign(&CampaignId(campaign_id), &body.lead_ids) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

pub(crate) async fn find_leads_handler<R, N>(
    State(service): State<Arc<OutreachService<R, N>>>,
    Json(query): Json<LeadFinderQuery>,
) -> Response
where
    R: OutreachRepository + ProspectRepository + ListRepository + 'static,
    N: Notifier + 'static,
{
    match service.find_leads(&query) {
        Ok(leads) => (StatusCode::OK, Json(leads)).into_response(),
        Err(error) => outreach_failure(error),
    }
}

fn outreach_failure(error: OutreachError) -> Response {
    match error {
        OutreachError::UnknownSequence(_)
        | OutreachError::UnknownCampaign(_)
        | OutreachError::UnknownStep(_) => json_error(StatusCode::NOT_FOUND, error.to_string()),
        OutreachError::Repository(ref inner) => repository_failure(inner),
        other => json_error(StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
    }
}
