//! API integration tests
//!
//! The router runs in-process against a stub booking service.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use desk_insights::{
    api,
    config::AppConfig,
    error::FetchError,
    models::{DashboardContext, DayResponse},
    repository::Repository,
    services::{
        fetcher::{ApiToken, DayFetcher},
        Services,
    },
    AppState,
};

const TOKEN: &str = "Bearer test-token";

/// Serves a fixed two-day office, optionally failing one day
struct StubFetcher {
    fail_on: Option<NaiveDate>,
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn slot(name: Option<&str>, start: &str, end: &str, label: Option<&str>) -> Value {
    let user = name.map(|n| json!({ "name": n }));
    json!({ "user": user, "startTime": start, "endTime": end, "availability": label })
}

#[async_trait]
impl DayFetcher for StubFetcher {
    async fn fetch_day(&self, _token: &ApiToken, day: NaiveDate) -> Result<DayResponse, FetchError> {
        if self.fail_on == Some(day) {
            return Err(FetchError::Status { date: day, status: 503 });
        }

        let desks = if day == date("2024-03-04") {
            json!([
                { "id": 1, "name": "Desk 6.A01.1",
                  "timeSlots": [slot(Some("Alice"), "09:00:00", "12:00:00", Some("Booked"))] },
                { "id": 2, "name": "Desk 6.A01.2",
                  "timeSlots": [slot(Some("Bob"), "00:00:00", "23:59:00", Some("Booked"))] },
                { "id": 3, "name": "Desk 6.A01.3",
                  "timeSlots": [slot(None, "00:00:00", "23:59:00", Some("Available"))] }
            ])
        } else {
            json!([
                { "id": 1, "name": "Desk 6.A01.1",
                  "timeSlots": [slot(Some("Alice"), "13:00:00", "17:00:00", Some("Booked"))] }
            ])
        };

        let body = json!({ "floors": [{ "floorName": "Level 6", "desks": desks }] });
        Ok(serde_json::from_value(body).unwrap())
    }
}

/// Router with an empty snapshot; keep the TempDir alive for the test
fn test_app(fail_on: Option<NaiveDate>) -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.cache.bookings_csv = dir.path().join("all_bookings.csv");

    let repository = Repository::new(&config.cache);
    let services = Services::new(repository, Arc::new(StubFetcher { fail_on }));
    let state = AppState::new(config, services, DashboardContext::default());

    (api::create_router(state), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn fetch_two_days(app: &Router) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/v1/bookings/fetch",
            json!({ "start_date": "2024-03-04", "end_date": "2024-03-05" }),
        ),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = test_app(None);
    let (status, body) = send(&app, get("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["people"], 0);
}

#[tokio::test]
async fn test_fetch_requires_token() {
    let (app, _dir) = test_app(None);
    let request = Request::post("/api/v1/bookings/fetch")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_fetch_rejects_bad_dates() {
    let (app, _dir) = test_app(None);
    let (status, _) = send(
        &app,
        post_json("/api/v1/bookings/fetch", json!({ "start_date": "04/03/2024" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fetch_rejects_malformed_body() {
    let (app, _dir) = test_app(None);
    let request = Request::post("/api/v1/bookings/fetch")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, TOKEN)
        .body(Body::from(r#"{"start_date": "2024-03-04", "end_date": 20240310"#))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4);

    // Nothing was fetched in place of the requested range
    let (_, body) = send(&app, get("/api/v1/people")).await;
    assert_eq!(body["team_members"], json!([]));
}

#[tokio::test]
async fn test_fetch_without_body_uses_default_window() {
    let (app, _dir) = test_app(None);
    let request = Request::post("/api/v1/bookings/fetch")
        .header(header::AUTHORIZATION, TOKEN)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 4);
}

#[tokio::test]
async fn test_fetch_then_capacity_and_people() {
    let (app, _dir) = test_app(None);

    let (status, body) = fetch_two_days(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 2);
    assert_eq!(body["bookings"], 3);
    assert_eq!(body["team_members"], json!(["Alice", "Bob"]));

    let (status, body) = send(&app, get("/api/v1/capacity")).await;
    assert_eq!(status, StatusCode::OK);
    let first = &body[0];
    assert_eq!(first["date"], "2024-03-04");
    assert_eq!(first["floors"][0]["floor"], "Level 6");
    assert_eq!(first["floors"][0]["total_desks"], 3);
    assert_eq!(first["floors"][0]["booked_desks_am"], 2);
    assert_eq!(first["floors"][0]["booked_desks_pm"], 0);
    assert_eq!(first["floors"][0]["available_desks"], 1);

    let (_, body) = send(&app, get("/api/v1/people")).await;
    assert_eq!(body["team_members"], json!(["Alice", "Bob"]));
}

#[tokio::test]
async fn test_availability_after_fetch() {
    let (app, _dir) = test_app(None);
    fetch_two_days(&app).await;

    let (status, body) = send(
        &app,
        get("/api/v1/availability?floor=Level%206&neighbourhood=A%20(Station)"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-03-04");
    assert_eq!(days[0]["available_desks"], 86);
    assert_eq!(days[1]["available_desks"], 87);

    let alice = days[0]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["desk"] == "Desk 6.A01.1")
        .unwrap();
    assert_eq!(alice["name"], "Alice");
    assert_eq!(alice["availability"], "Booked");
    assert_eq!(alice["booking_period"], "Morning Only");
}

#[tokio::test]
async fn test_availability_unknown_neighbourhood() {
    let (app, _dir) = test_app(None);
    let (status, body) = send(
        &app,
        get("/api/v1/availability?floor=Level%209&neighbourhood=Z"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_upstream_failure_keeps_previous_snapshot() {
    let (app, _dir) = test_app(Some(date("2024-03-05")));

    let (status, body) = fetch_two_days(&app).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 5);
    assert_eq!(body["failed_date"], "2024-03-05");

    let (_, body) = send(&app, get("/api/v1/people")).await;
    assert_eq!(body["team_members"], json!([]));
}

#[tokio::test]
async fn test_people_bookings() {
    let (app, _dir) = test_app(None);
    fetch_two_days(&app).await;

    let (status, body) = send(
        &app,
        post_json("/api/v1/people/bookings", json!({ "names": ["Alice", "Carol"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Alice");
    assert_eq!(body[0]["bookings"][0]["booking_period"], "Morning Only");
    assert_eq!(body[0]["bookings"][1]["booking_period"], "Afternoon Only");
    assert_eq!(body[1]["bookings"], json!([]));
}

#[tokio::test]
async fn test_people_bookings_requires_names() {
    let (app, _dir) = test_app(None);
    let (status, body) = send(&app, post_json("/api/v1/people/bookings", json!({ "names": [] }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4);
}

#[tokio::test]
async fn test_team_bookings_from_csv() {
    let (app, _dir) = test_app(None);
    fetch_two_days(&app).await;

    let request = Request::post("/api/v1/team/bookings?start_date=2024-03-04&end_date=2024-03-05")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("Bob,\nDave,\nAlice,\n"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requested"], 3);
    assert_eq!(body["matched"], 2);
    assert_eq!(body["message"], Value::Null);
    assert_eq!(body["days"][0]["bookings"][0]["name"], "Alice");
    assert_eq!(body["days"][0]["bookings"][1]["name"], "Bob");
    assert_eq!(body["days"][0]["bookings"][1]["booking_period"], "All Day");
}

#[tokio::test]
async fn test_team_without_bookings_has_message() {
    let (app, _dir) = test_app(None);
    let request = Request::post("/api/v1/team/bookings")
        .body(Body::from("Dave,\n"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], 0);
    assert!(body["message"].is_string());
    assert_eq!(body["days"], json!([]));
}

#[tokio::test]
async fn test_save_and_clear_cache() {
    let (app, dir) = test_app(None);
    fetch_two_days(&app).await;

    let request = Request::post("/api/v1/bookings/save").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["saved"], 3);
    assert!(dir.path().join("all_bookings.csv").exists());

    let request = Request::delete("/api/v1/bookings/cache").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared"], 1);
}
