use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::domain::{ListId, ListMember};
use super::router::list_router;
use super::service::{ListError, ListService, SaveToListRequest};
use crate::store::{MemoryStore, RepositoryError, UnavailableStore};
use crate::workflows::http::read_json_body;
use crate::workflows::notices::RecordingNotifier;
use crate::workflows::prospecting::domain::{CompanyId, LeadId};

fn build_service() -> (
    Arc<ListService<MemoryStore, RecordingNotifier>>,
    Arc<RecordingNotifier>,
) {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(ListService::new(
        Arc::new(MemoryStore::seeded()),
        notifier.clone(),
    ));
    (service, notifier)
}

fn lead(id: &str) -> ListMember {
    ListMember::Lead(LeadId(id.to_string()))
}

fn list_id(id: &str) -> ListId {
    ListId(id.to_string())
}

fn count_for(service: &ListService<MemoryStore, RecordingNotifier>, id: &str) -> usize {
    service
        .lists()
        .expect("lists")
        .into_iter()
        .find(|list| list.id == list_id(id))
        .map(|list| list.count)
        .unwrap_or_default()
}

#[test]
fn seeded_lists_start_empty() {
    let (service, _) = build_service();

    let lists = service.lists().expect("lists");

    let names: Vec<&str> = lists.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, vec!["Q3 Outreach", "Competitors", "Conference Leads"]);
    assert!(lists.iter().all(|list| list.count == 0));
}

#[test]
fn saving_members_counts_additions_and_duplicates() {
    let (service, notifier) = build_service();

    let first = service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("l1")),
            new_list_name: None,
            members: vec![lead("1"), lead("2"), ListMember::Company(CompanyId("3".into()))],
        })
        .expect("save");
    assert_eq!(first.added, 3);

    let second = service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("l1")),
            new_list_name: None,
            members: vec![lead("2"), lead("ghost")],
        })
        .expect("save again");

    assert_eq!(second.added, 0);
    assert_eq!(second.already_present, 1);
    assert_eq!(second.missing, vec![lead("ghost")]);
    assert_eq!(count_for(&service, "l1"), 3);
    assert_eq!(
        notifier.messages(),
        vec!["3 records saved to Q3 Outreach", "0 records saved to Q3 Outreach"]
    );
}

#[test]
fn saving_into_a_new_list_creates_it_first() {
    let (service, _) = build_service();

    let outcome = service
        .save_members(SaveToListRequest {
            list_id: None,
            new_list_name: Some("Board intros".to_string()),
            members: vec![lead("4")],
        })
        .expect("save");

    assert_eq!(outcome.list.name, "Board intros");
    assert_eq!(outcome.added, 1);
    assert_eq!(service.lists().expect("lists").len(), 4);
    assert_eq!(
        service.members(&outcome.list.id).expect("members"),
        vec![lead("4")]
    );
}

#[test]
fn save_requests_need_members_and_a_target() {
    let (service, _) = build_service();

    let error = service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("l1")),
            ..SaveToListRequest::default()
        })
        .expect_err("no members");
    assert!(matches!(error, ListError::NoMembers));

    let error = service
        .save_members(SaveToListRequest {
            members: vec![lead("1")],
            ..SaveToListRequest::default()
        })
        .expect_err("no target");
    assert!(matches!(error, ListError::MissingTarget));

    let error = service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("missing")),
            new_list_name: None,
            members: vec![lead("1")],
        })
        .expect_err("unknown list");
    assert!(matches!(error, ListError::UnknownList(_)));
}

#[test]
fn blank_list_names_are_rejected() {
    let (service, _) = build_service();

    let error = service.create("   ").expect_err("blank");

    assert!(matches!(error, ListError::EmptyName));
}

#[test]
fn deleting_a_list_cascades_to_memberships() {
    let (service, notifier) = build_service();
    service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("l2")),
            new_list_name: None,
            members: vec![lead("1"), lead("5")],
        })
        .expect("save");
    service
        .save_members(SaveToListRequest {
            list_id: Some(list_id("l3")),
            new_list_name: None,
            members: vec![lead("1")],
        })
        .expect("save");

    let dropped = service.delete(&list_id("l2")).expect("delete");

    assert_eq!(dropped, 2);
    let index = service.index().expect("index");
    assert_eq!(index.list_ids(&lead("1")), vec![list_id("l3")]);
    assert!(!index.is_saved(&lead("5")));
    assert_eq!(notifier.last().expect("notice").message, "Deleted list Competitors");
}

#[test]
fn removing_a_member_that_is_not_saved_is_not_found() {
    let (service, _) = build_service();

    let error = service
        .remove_member(&list_id("l1"), lead("1"))
        .expect_err("not a member");

    assert!(matches!(
        error,
        ListError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn store_outages_propagate() {
    let service = ListService::new(
        Arc::new(UnavailableStore),
        Arc::new(RecordingNotifier::default()),
    );

    assert!(matches!(
        service.lists(),
        Err(ListError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn member_routes_save_and_remove() {
    let (service, _) = build_service();
    let router = list_router(service.clone());

    let saved = router
        .clone()
        .oneshot(
            Request::post("/api/v1/lists/members")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "list_id": "l1",
                        "members": [{ "kind": "lead", "id": "2" }]
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(saved.status(), StatusCode::OK);
    let payload = read_json_body(saved).await;
    assert_eq!(payload["added"], 1);

    let removed = router
        .clone()
        .oneshot(
            Request::delete("/api/v1/lists/l1/members/lead/2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);
    assert_eq!(count_for(&service, "l1"), 0);

    let bad_kind = router
        .oneshot(
            Request::delete("/api/v1/lists/l1/members/deal/2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(bad_kind.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_list_routes_return_not_found() {
    let (service, _) = build_service();
    let router = list_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/lists/nope/members")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
