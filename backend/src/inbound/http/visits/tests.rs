//! Tests for the visit details endpoint.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockVisitQuery;
use crate::domain::{Encounter, EncounterProvider, EncounterType, Location, Visit};
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::test_app;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

fn ports_with(query: MockVisitQuery) -> HttpStatePorts {
    HttpStatePorts {
        visits: Arc::new(query),
        ..HttpStatePorts::fixtures()
    }
}

async fn get(ports: HttpStatePorts, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(HttpState::new(ports))).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

#[rstest]
#[actix_web::test]
async fn renders_live_encounters_newest_first() {
    let visit = Visit::new(42, at(9, 30))
        .with_location(Location::new("Outpatient Clinic"))
        .with_encounter(
            Encounter::new(1, at(10, 0))
                .with_encounter_type(EncounterType::new("Check In"))
                .with_provider(EncounterProvider::new("Dr Jones").with_role("Clinician")),
        )
        .with_encounter(Encounter::new(2, at(11, 0)).voided())
        .with_encounter(Encounter::new(3, at(12, 15)));
    let mut query = MockVisitQuery::new();
    query
        .expect_find_visit()
        .withf(|visit_id| *visit_id == 42)
        .times(1)
        .return_once(move |_| Ok(Some(visit)));

    let (status, body) = get(ports_with(query), "/api/v1/visits/42/details").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["startDatetime"], "01 Mar 2024 09:30");
    assert_eq!(body["stopDatetime"], Value::Null);
    assert_eq!(body["location"], "Outpatient Clinic");
    let ids: Vec<u64> = body["encounters"]
        .as_array()
        .expect("encounters array")
        .iter()
        .filter_map(|encounter| encounter["encounterId"].as_u64())
        .collect();
    assert_eq!(ids, [3, 1]);
    assert_eq!(
        body["encounters"][1]["encounterProviders"],
        json!([{ "provider": "Dr Jones", "encounterRole": "Clinician" }])
    );
}

#[rstest]
#[actix_web::test]
async fn missing_visit_is_not_found() {
    let (status, body) = get(HttpStatePorts::fixtures(), "/api/v1/visits/9/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"]["visitId"], 9);
}

#[rstest]
#[case(VisitQueryError::connection("refused"), StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")]
#[case(VisitQueryError::query("syntax"), StatusCode::INTERNAL_SERVER_ERROR, "internal_error")]
#[actix_web::test]
async fn query_failures_map_to_status(
    #[case] failure: VisitQueryError,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let mut query = MockVisitQuery::new();
    query
        .expect_find_visit()
        .return_once(move |_| Err(failure));

    let (actual, body) = get(ports_with(query), "/api/v1/visits/5/details").await;

    assert_eq!(actual, status);
    assert_eq!(body["code"], code);
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut query = MockVisitQuery::new();
    query
        .expect_find_visit()
        .return_once(|_| Err(VisitQueryError::query("relation visit does not exist")));

    let (_, body) = get(ports_with(query), "/api/v1/visits/5/details").await;

    assert_eq!(body["message"], "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn non_numeric_identifier_is_rejected() {
    let app = actix_test::init_service(test_app(HttpState::new(HttpStatePorts::fixtures()))).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/v1/visits/abc/details")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_client_error());
}
