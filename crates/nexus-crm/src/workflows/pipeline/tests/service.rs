use std::sync::Arc;

use super::common::*;
use crate::store::{RepositoryError, UnavailableStore};
use crate::workflows::notices::RecordingNotifier;
use crate::workflows::pipeline::{
    DealId, DealRepository, DealStage, PipelineError, PipelineService, MAX_DEAL_VALUE,
};

#[test]
fn seeded_pipeline_rolls_up_by_column() {
    let (service, _, _) = build_service();

    let summary = service.summary().expect("summary");

    assert_eq!(summary.total_pipeline, 47_000);
    assert_eq!(summary.weighted_pipeline, 23_400.0);
    let to_contact = summary.column(DealStage::ToContact).expect("column");
    assert_eq!(to_contact.deal_count, 2);
    assert_eq!(to_contact.total_value, 17_000);
    assert_eq!(to_contact.stage_label, "To Contact");
    let stages: Vec<DealStage> = summary.columns.iter().map(|column| column.stage).collect();
    assert_eq!(stages, DealStage::ALL.to_vec());
}

#[test]
fn top_deals_rank_by_value() {
    let (service, _, _) = build_service();

    let top = service.top_deals(2).expect("top");

    let values: Vec<u64> = top.iter().map(|deal| deal.value).collect();
    assert_eq!(values, vec![25_000, 15_000]);
}

#[test]
fn new_deals_start_in_the_first_column() {
    let (service, store, notifier) = build_service();

    let deal = service
        .create(draft("  Expansion seats ", 8_000, "7"))
        .expect("create");

    assert_eq!(deal.title, "Expansion seats");
    assert_eq!(deal.stage, DealStage::ToContact);
    assert_eq!(deal.lead_name, "Lisa Taylor");
    assert_eq!(store.deals().expect("deals").len(), 5);
    assert_eq!(service.summary().expect("summary").total_pipeline, 55_000);
    assert_eq!(
        notifier.messages(),
        vec!["Deal added successfully to pipeline!"]
    );
}

#[test]
fn incomplete_deals_are_rejected() {
    let (service, _, notifier) = build_service();

    for candidate in [draft("", 100, "1"), draft("Deal", 0, "1"), draft("Deal", 100, " ")] {
        let error = service.create(candidate).expect_err("incomplete");
        assert!(matches!(error, PipelineError::IncompleteDeal));
    }

    let error = service
        .create(draft("Deal", 100, "ghost"))
        .expect_err("unknown lead");
    assert!(matches!(error, PipelineError::UnknownLead(_)));
    assert!(notifier.notices().is_empty());
}

#[test]
fn deal_values_are_capped() {
    let (service, store, notifier) = build_service();

    for value in [MAX_DEAL_VALUE + 1, u64::MAX] {
        let error = service
            .create(draft("Whale", value, "1"))
            .expect_err("oversized");
        assert!(matches!(error, PipelineError::ValueTooLarge(rejected) if rejected == value));
    }
    let error = service
        .update(&DealId("1".to_string()), draft("Whale", u64::MAX, "1"))
        .expect_err("oversized update");
    assert!(matches!(error, PipelineError::ValueTooLarge(_)));
    assert_eq!(store.deals().expect("deals").len(), 4);
    assert!(notifier.notices().is_empty());

    let deal = service
        .create(draft("Largest allowed", MAX_DEAL_VALUE, "1"))
        .expect("at the cap");
    assert_eq!(deal.value, MAX_DEAL_VALUE);
    assert_eq!(
        service.summary().expect("summary").total_pipeline,
        MAX_DEAL_VALUE + 47_000
    );
}

#[test]
fn stage_moves_are_unconstrained() {
    let (service, _, _) = build_service();
    let id = DealId("3".to_string());

    let reopened = service
        .move_to_stage(&id, DealStage::ToContact)
        .expect("move back");
    assert_eq!(reopened.stage, DealStage::ToContact);

    let closed = service
        .move_to_stage(&id, DealStage::Closed)
        .expect("move forward");
    assert_eq!(closed.stage, DealStage::Closed);
    assert_eq!(service.summary().expect("summary").weighted_pipeline, 23_400.0);
}

#[test]
fn updates_keep_the_stage_and_refresh_the_lead_name() {
    let (service, _, _) = build_service();

    let updated = service
        .update(&DealId("1".to_string()), draft("Enterprise License v2", 30_000, "8"))
        .expect("update");

    assert_eq!(updated.stage, DealStage::InProgress);
    assert_eq!(updated.lead_name, "James Anderson");
    assert_eq!(updated.value, 30_000);
}

#[test]
fn deleting_a_deal_drops_it_from_the_roll_up() {
    let (service, _, notifier) = build_service();

    service.delete(&DealId("2".to_string())).expect("delete");

    assert_eq!(service.summary().expect("summary").total_pipeline, 32_000);
    assert_eq!(notifier.last().expect("notice").message, "Deal removed from pipeline");

    let error = service
        .delete(&DealId("2".to_string()))
        .expect_err("already gone");
    assert!(matches!(
        error,
        PipelineError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn moving_an_unknown_deal_is_not_found() {
    let (service, _, _) = build_service();

    let error = service
        .move_to_stage(&DealId("ghost".to_string()), DealStage::Closed)
        .expect_err("missing deal");

    assert!(matches!(
        error,
        PipelineError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn store_outages_propagate() {
    let service = PipelineService::new(
        Arc::new(UnavailableStore),
        Arc::new(RecordingNotifier::default()),
    );

    assert!(matches!(
        service.summary(),
        Err(PipelineError::Repository(RepositoryError::Unavailable(_)))
    ));
}
