use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

#[tokio::test]
async fn healthz_reports_ok() {
    let Json(body) = healthz().await;
    assert_eq!(body.status, "ok");
    assert_eq!(serde_json::to_value(&body).unwrap()["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let response = api_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let response = api_routes()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
