mod common;

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use common::*;
use rust_evalsystem::models::AppStartTime;
use rust_evalsystem::routes;
use rust_evalsystem::storage::{RosterSource, Storage};
use rust_evalsystem::utils::{json_error_handler, local_today, query_error_handler};

macro_rules! init_app {
    ($storage:expr, $roster:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new($roster.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_campaign_routes)
                .configure(routes::configure_aspect_routes)
                .configure(routes::configure_valuation_routes)
                .configure(routes::configure_question_routes)
                .configure(routes::configure_evaluation_routes)
                .configure(routes::configure_generic_evaluation_routes)
                .configure(routes::configure_system_routes),
        )
        .await
    };
}

async fn shared_backend() -> (Arc<dyn Storage>, Arc<dyn RosterSource>, sea_orm::DatabaseConnection) {
    let (storage, roster) = setup().await;
    let db = storage.connection().clone();
    (Arc::new(storage), Arc::new(roster), db)
}

fn campaign_body(teacher_evaluation: bool) -> Value {
    let today = local_today();
    json!({
        "name": "Evaluación docente",
        "start_date": today,
        "end_date": today + chrono::Duration::days(14),
        "teacher_evaluation": teacher_evaluation,
    })
}

#[actix_web::test]
async fn test_health() {
    let (storage, roster, _) = shared_backend().await;
    let app = init_app!(storage, roster);

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_campaign_endpoints() {
    let (storage, roster, _) = shared_backend().await;
    let app = init_app!(storage, roster);

    let req = test::TestRequest::post()
        .uri("/api/v1/campaigns")
        .set_json(campaign_body(true))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["active"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/campaigns/{id}/form"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["configuracion"]["id"], id);
    assert_eq!(body["data"]["aspectos"].as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/campaigns/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/campaigns/0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/campaigns")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_bootstrap_endpoint() {
    let (storage, roster, db) = shared_backend().await;
    add_roster_row(&db, "S1", Some("MAT101"), "T1").await;
    let app = init_app!(storage, roster);

    let req = test::TestRequest::post()
        .uri("/api/v1/campaigns")
        .set_json(campaign_body(true))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let campaign_id = body["data"]["id"].as_i64().unwrap();

    let bootstrap = |roles: Value| {
        test::TestRequest::post()
            .uri("/api/v1/evaluations/bootstrap")
            .set_json(json!({
                "studentId": "S1",
                "campaignId": campaign_id,
                "roles": roles,
            }))
            .to_request()
    };

    let resp = test::call_service(&app, bootstrap(json!(["Estudiante"]))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let created = body["data"]["evaluacionesCreadas"].as_array().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["course_code"], "MAT101");
    assert!(body["data"].get("isGenericEvaluation").is_none());

    let resp = test::call_service(&app, bootstrap(json!(["docente"]))).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/evaluations?studentId=S1&campaignId={campaign_id}"
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_generic_bootstrap_flag() {
    let (storage, roster, _) = shared_backend().await;
    let app = init_app!(storage, roster);

    let req = test::TestRequest::post()
        .uri("/api/v1/campaigns")
        .set_json(campaign_body(false))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let campaign_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluations/bootstrap")
        .set_json(json!({
            "studentId": "S9",
            "campaignId": campaign_id,
            "roles": ["admin"],
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["isGenericEvaluation"], true);
    assert!(body["data"]["evaluacionesCreadas"].as_array().unwrap().is_empty());
}
