//! Tests for server wiring and readiness signalling.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use emr::domain::{Encounter, Visit};
use emr::outbound::memory::InMemoryDirectory;

use super::*;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.register_user(1, "admin");
    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp");
    let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket address"))
        .with_directory(directory);
    config
        .visits
        .insert(Visit::new(5, start).with_encounter(Encounter::new(8, start)));
    config
}

fn deps(health_state: web::Data<HealthState>, config: &ServerConfig) -> AppDependencies {
    AppDependencies {
        health_state,
        http_state: web::Data::new(build_http_state(config)),
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready());
    let _server = create_server(health_state.clone(), config).expect("server binds");
    assert!(health_state.is_ready());
}

#[rstest]
#[actix_rt::test]
async fn seeded_username_is_reported_as_duplicate(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    let app = actix_test::init_service(build_app(deps(health_state, &config))).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/accounts/validate")
        .set_json(json!({
            "givenName": "Ada",
            "familyName": "Admin",
            "gender": "F",
            "username": "ADMIN",
            "password": "Passw0rd",
            "confirmPassword": "Passw0rd",
            "privilegeLevel": "Privilege Level: Full",
            "capabilities": ["Application Role: Registration"]
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["details"]["fieldErrors"],
        json!([{
            "field": "username",
            "code": "duplicate_username",
            "message": "This username is already in use."
        }])
    );
}

#[rstest]
#[actix_rt::test]
async fn default_password_rules_apply(health_state: web::Data<HealthState>, config: ServerConfig) {
    let app = actix_test::init_service(build_app(deps(health_state, &config))).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/accounts/validate")
        .set_json(json!({
            "givenName": "Grace",
            "familyName": "Hopper",
            "gender": "F",
            "username": "ghopper",
            "password": "short",
            "confirmPassword": "short",
            "privilegeLevel": "Privilege Level: Full",
            "capabilities": ["Application Role: Registration"]
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["fieldErrors"][0]["code"], "password_policy");
}

#[rstest]
#[actix_rt::test]
async fn seeded_visit_is_served(health_state: web::Data<HealthState>, config: ServerConfig) {
    let app = actix_test::init_service(build_app(deps(health_state, &config))).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/v1/visits/5/details")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("trace-id"));
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["encounters"][0]["encounterId"], 8);
}

#[rstest]
#[actix_rt::test]
async fn probes_are_mounted_outside_the_api_scope(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    health_state.mark_ready();
    let app = actix_test::init_service(build_app(deps(health_state, &config))).await;
    let request = actix_test::TestRequest::get().uri("/health/ready").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}
