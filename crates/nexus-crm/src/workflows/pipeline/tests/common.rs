use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};

use crate::store::MemoryStore;
use crate::workflows::notices::RecordingNotifier;
use crate::workflows::pipeline::{DealDraft, PipelineService};
use crate::workflows::prospecting::domain::LeadId;

pub(super) type MemoryService = PipelineService<MemoryStore, RecordingNotifier>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryStore::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(PipelineService::new(store.clone(), notifier.clone()));
    (service, store, notifier)
}

pub(super) fn draft(title: &str, value: u64, lead: &str) -> DealDraft {
    DealDraft {
        title: title.to_string(),
        value,
        lead_id: LeadId(lead.to_string()),
    }
}

pub(super) fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
