use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::http::read_json_body;
use crate::workflows::pipeline::pipeline_router;

#[tokio::test]
async fn summary_route_reports_totals() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/pipeline/summary")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_pipeline"], 47_000);
    assert_eq!(payload["weighted_pipeline"], 23_400.0);
    assert_eq!(payload["columns"][1]["stage"], "in-progress");
}

#[tokio::test]
async fn top_route_defaults_to_four_deals() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/pipeline/top")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(4));

    let limited = router
        .oneshot(
            Request::get("/api/v1/pipeline/top?limit=1")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let payload = read_json_body(limited).await;
    assert_eq!(payload[0]["title"], "Enterprise License");
}

#[tokio::test]
async fn stage_route_moves_deals() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service);

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/v1/deals/2/stage",
            json!({ "stage": "closed" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["stage"], "closed");
}

#[tokio::test]
async fn create_route_rejects_incomplete_deals() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/deals",
            json!({ "title": "", "value": 10, "lead_id": "1" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Please fill in all fields");
}

#[tokio::test]
async fn create_route_rejects_oversized_values() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service.clone());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/deals",
            json!({ "title": "Whale", "value": u64::MAX, "lead_id": "1" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("exceeds the maximum")));
    assert_eq!(service.summary().expect("summary").total_pipeline, 47_000);
}

#[tokio::test]
async fn deleting_unknown_deal_is_not_found() {
    let (service, _, _) = build_service();
    let router = pipeline_router(service);

    let response = router
        .oneshot(
            Request::delete("/api/v1/deals/ghost")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
