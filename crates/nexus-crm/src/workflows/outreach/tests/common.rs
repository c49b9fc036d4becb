use std::sync::Arc;

use crate::store::MemoryStore;
use crate::workflows::notices::RecordingNotifier;
use crate::workflows::outreach::{OutreachService, StepAction, StepDraft};
use crate::workflows::prospecting::domain::LeadId;

pub(super) type MemoryService = OutreachService<MemoryStore, RecordingNotifier>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryStore::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(OutreachService::new(store.clone(), notifier.clone()));
    (service, store, notifier)
}

pub(super) fn email_step(content: &str) -> StepDraft {
    StepDraft {
        delay_days: None,
        variant_label: None,
        action: StepAction::Email {
            content: content.to_string(),
        },
    }
}

pub(super) fn wait_step(days: u32) -> StepDraft {
    StepDraft {
        delay_days: Some(days),
        variant_label: None,
        action: StepAction::Wait,
    }
}

pub(super) fn lead_ids(ids: &[&str]) -> Vec<LeadId> {
    ids.iter().map(|id| LeadId(id.to_string())).collect()
}
