//! API handlers for Desk Insights REST endpoints

pub mod availability;
pub mod bookings;
pub mod capacity;
pub mod health;
pub mod openapi;
pub mod people;
pub mod team;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::DateRange,
    services::fetcher::ApiToken,
    AppState,
};

/// Extractor for the caller's booking service token.
///
/// The token is forwarded upstream as is; this server does not validate it.
pub struct BearerToken(pub ApiToken);

#[async_trait]
impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        Ok(BearerToken(ApiToken::new(token)))
    }
}

/// Date range query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RangeQuery {
    /// Start date (YYYY-MM-DD), defaults to the last fetched range or today
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD), defaults to the last fetched range or today + 3 days
    pub end_date: Option<String>,
}

/// Resolve request dates against the current snapshot's range
pub(crate) async fn resolve_range(
    state: &AppState,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> AppResult<DateRange> {
    let today = chrono::Local::now().date_naive();
    let fallback = state.snapshot().await.range_or(DateRange::default_window(today));
    DateRange::from_args(start_date, end_date, fallback)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Bookings
        .route("/bookings/fetch", post(bookings::fetch_bookings))
        .route("/bookings/cache", delete(bookings::clear_cache))
        .route("/bookings/save", post(bookings::save_bookings))
        // Office capacity
        .route("/capacity", get(capacity::get_capacity))
        // Desk availability
        .route("/neighbourhoods", get(availability::list_neighbourhoods))
        .route("/availability", get(availability::get_availability))
        // People finder
        .route("/people", get(people::list_people))
        .route("/people/bookings", post(people::people_bookings))
        // Team finder
        .route("/team/bookings", post(team::team_bookings))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
