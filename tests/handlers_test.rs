//! API surface tests against an unavailable store.
//!
//! These exercise routing, validation ordering, and error shaping without a
//! live document store: validation failures must surface before any store
//! access, and store-backed endpoints must report a server error when no
//! store is configured.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use vibehunt::db::Store;
use vibehunt::handlers;

fn store() -> web::Data<Store> {
    web::Data::new(Store::unavailable())
}

#[actix_rt::test]
async fn root_reports_liveness_without_store() {
    let app =
        test::init_service(App::new().route("/", web::get().to(handlers::root))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "VibeHunt API running");
}

#[actix_rt::test]
async fn health_is_unhealthy_without_store() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/health", web::get().to(handlers::health)),
    )
    .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
}

#[actix_rt::test]
async fn diagnostics_always_answer() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/test", web::get().to(handlers::store_diagnostics)),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/test").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["backend"], "healthy");
    assert_eq!(body["database"], "unhealthy");
    assert_eq!(body["connection_status"], "not_connected");
    assert_eq!(body["collections"], json!([]));
}

#[actix_rt::test]
async fn listing_without_store_is_a_server_error() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/posts", web::get().to(handlers::list_posts)),
    )
    .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert!(body["error"].as_str().unwrap().contains("Store unavailable"));
}

#[actix_rt::test]
async fn listing_rejects_out_of_range_params_before_store_access() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/posts", web::get().to(handlers::list_posts)),
    )
    .await;

    // page_size above the cap: validation answers 400 even though the
    // store is unavailable, proving the store is never consulted.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/posts?page_size=100")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts?page=0").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn create_post_rejects_empty_title_before_store_access() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/posts", web::post().to(handlers::create_post)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "", "description": "An idea" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[actix_rt::test]
async fn create_comment_rejects_empty_content_before_store_access() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/comments", web::post().to(handlers::create_comment)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/comments")
            .set_json(json!({ "post_id": "65f0a1b2c3d4e5f6a7b8c9d0", "content": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn toggle_without_store_is_a_server_error() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/vote/toggle", web::post().to(handlers::toggle_vote)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/vote/toggle")
            .set_json(json!({ "post_id": "65f0a1b2c3d4e5f6a7b8c9d0", "client_id": "c1" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn toggle_rejects_blank_client_id() {
    let app = test::init_service(
        App::new()
            .app_data(store())
            .route("/api/vote/toggle", web::post().to(handlers::toggle_vote)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/vote/toggle")
            .set_json(json!({ "post_id": "65f0a1b2c3d4e5f6a7b8c9d0", "client_id": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
