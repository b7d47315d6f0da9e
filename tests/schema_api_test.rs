//! HTTP contract tests for the schema endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::{middleware::Logger, test, web, App};
use common::{StoreFixture, UnavailableStore};
use schema_builder::server::{configure_api, cors, AppState};
use schema_builder::store::SchemaStore;
use serde_json::{json, Value};
use std::sync::Arc;

fn state(store: Arc<dyn SchemaStore>) -> web::Data<AppState> {
    web::Data::new(AppState { store })
}

#[actix_web::test]
async fn create_returns_stored_record() {
    let _ = env_logger::builder().is_test(true).try_init();
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .wrap(Logger::default())
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/schemas/add")
        .set_json(json!({
            "title": "User",
            "description": "A person",
            "schemaJson": {"name": "", "address": {"zip": 0}}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "User");
    assert_eq!(body["description"], "A person");
    assert_eq!(body["schemaJson"], json!({"name": "", "address": {"zip": 0}}));
    assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[actix_web::test]
async fn list_returns_every_created_record() {
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    let mut ids = Vec::new();
    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/api/schemas/add")
            .set_json(json!({"title": title, "description": "", "schemaJson": {}}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["_id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::get().uri("/api/schemas").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let listed: Vec<&str> = body
        .as_array()
        .expect("list body is an array")
        .iter()
        .filter_map(|r| r["_id"].as_str())
        .collect();
    assert!(listed.len() >= 2);
    for id in &ids {
        assert!(listed.contains(&id.as_str()), "missing {}", id);
    }
}

#[actix_web::test]
async fn rejected_shape_is_bad_request_and_not_persisted() {
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/schemas/add")
        .set_json(json!({"title": ["not", "a", "string"], "schemaJson": {}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(fixture.store.list().unwrap().is_empty());
}

#[actix_web::test]
async fn non_object_schema_json_is_stored_as_sent() {
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    for schema_json in [json!([1, 2]), json!("x")] {
        let req = test::TestRequest::post()
            .uri("/api/schemas/add")
            .set_json(json!({"title": "T", "schemaJson": schema_json.clone()}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["schemaJson"], schema_json);
    }
    assert_eq!(fixture.store.list().unwrap().len(), 2);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/schemas/add")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(fixture.store.is_empty());
}

#[actix_web::test]
async fn storage_failures_are_server_errors() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(UnavailableStore)))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/schemas").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "storage unavailable: connection refused");

    let req = test::TestRequest::post()
        .uri("/api/schemas/add")
        .set_json(json!({"title": "T", "schemaJson": {}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn cross_origin_requests_are_allowed() {
    let fixture = StoreFixture::new();
    let app = test::init_service(
        App::new()
            .wrap(cors())
            .app_data(state(fixture.store.clone()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/schemas")
        .insert_header(("origin", "http://somewhere.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let allowed = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert!(
        allowed == Some("*") || allowed == Some("http://somewhere.example"),
        "unexpected allow-origin {:?}",
        allowed
    );
}
