//! Booking data endpoints: fetch, clear memoised fetches, save the CSV mirror

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{booking::total_bookings, DateRange},
    AppState,
};

use super::BearerToken;

/// Fetch request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FetchRequest {
    /// Start date (YYYY-MM-DD), defaults to today
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD), defaults to today + 3 days
    pub end_date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct FetchResponse {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    /// Days requested from the booking service
    pub days: usize,
    /// Bookings aggregated over the range
    pub bookings: usize,
    /// Everyone holding a booking in the range, ascending
    pub team_members: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ClearCacheResponse {
    /// Number of memoised fetches dropped
    pub cleared: usize,
}

#[derive(Serialize, ToSchema)]
pub struct SaveResponse {
    /// Bookings written
    pub saved: usize,
    pub path: String,
}

/// Fetch booking data for a date range
#[utoipa::path(
    post,
    path = "/bookings/fetch",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = FetchRequest,
    responses(
        (status = 200, description = "Booking data fetched", body = FetchResponse),
        (status = 400, description = "Invalid dates", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing token", body = crate::error::ErrorResponse),
        (status = 502, description = "Booking data unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn fetch_bookings(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    body: Bytes,
) -> AppResult<Json<FetchResponse>> {
    let request = parse_fetch_request(&body)?;
    // Missing bounds come from the default window, not the previous fetch
    let today = chrono::Local::now().date_naive();
    let range = DateRange::from_args(
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        DateRange::default_window(today),
    )?;

    let context = state.services.bookings.fetch(&token, range).await?;
    let context = state.replace_snapshot(context).await;

    Ok(Json(FetchResponse {
        start_date: range.start,
        end_date: range.end,
        days: range.num_days(),
        bookings: total_bookings(&context.bookings),
        team_members: context.team_members.clone(),
    }))
}

/// An empty body asks for the default window; anything else must be a valid request
fn parse_fetch_request(body: &[u8]) -> AppResult<FetchRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FetchRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid fetch request: {}", e)))
}

/// Drop memoised fetches so the next fetch goes to the booking service
#[utoipa::path(
    delete,
    path = "/bookings/cache",
    tag = "bookings",
    responses(
        (status = 200, description = "Memoised fetches cleared", body = ClearCacheResponse)
    )
)]
pub async fn clear_cache(State(state): State<AppState>) -> AppResult<Json<ClearCacheResponse>> {
    let cleared = state.services.bookings.clear_cache()?;
    Ok(Json(ClearCacheResponse { cleared }))
}

/// Write the current bookings to the CSV mirror
#[utoipa::path(
    post,
    path = "/bookings/save",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings saved", body = SaveResponse),
        (status = 500, description = "Cache write failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn save_bookings(State(state): State<AppState>) -> AppResult<Json<SaveResponse>> {
    let context = state.snapshot().await;
    let saved = state.services.bookings.save_snapshot(&context).await?;

    Ok(Json(SaveResponse {
        saved,
        path: state.config.cache.bookings_csv.display().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_default_window() {
        let request = parse_fetch_request(b"").unwrap();
        assert!(request.start_date.is_none());
        assert!(request.end_date.is_none());
        assert!(parse_fetch_request(b" \n").unwrap().start_date.is_none());
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let err = parse_fetch_request(br#"{"start_date": "2024-03-04", "end_date": 20240310"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = parse_fetch_request(br#"{"end_date": 20240310}"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_partial_body() {
        let request = parse_fetch_request(br#"{"start_date": "2024-03-04"}"#).unwrap();
        assert_eq!(request.start_date.as_deref(), Some("2024-03-04"));
        assert!(request.end_date.is_none());
    }
}
