//! Team finder endpoint

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    services::team::{self, TeamDay},
    AppState,
};

use super::{resolve_range, RangeQuery};

#[derive(Serialize, ToSchema)]
pub struct TeamResponse {
    /// Distinct names read from the upload
    pub requested: usize,
    /// Names holding at least one booking
    pub matched: usize,
    pub days: Vec<TeamDay>,
    /// Set when none of the team has bookings
    pub message: Option<String>,
}

/// Bookings of a team uploaded as CSV, one name per row
#[utoipa::path(
    post,
    path = "/team/bookings",
    tag = "team",
    params(RangeQuery),
    request_body(content = String, content_type = "text/csv", description = "One team member name per row"),
    responses(
        (status = 200, description = "Team bookings grouped by day", body = TeamResponse),
        (status = 400, description = "Empty or unreadable CSV", body = crate::error::ErrorResponse)
    )
)]
pub async fn team_bookings(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
    body: Bytes,
) -> AppResult<Json<TeamResponse>> {
    let names = team::parse_team_csv(&body)?;
    if names.is_empty() {
        return Err(AppError::BadRequest("Team CSV contains no names".to_string()));
    }
    let range = resolve_range(&state, query.start_date.as_deref(), query.end_date.as_deref()).await?;

    let context = state.snapshot().await;
    let matched = team::known_members(&names, &context.bookings);
    let days = team::team_bookings(&names, &context.bookings, range);
    let message = (matched == 0).then(|| "No bookings found for the team members provided".to_string());

    tracing::info!("Team lookup: {} name(s), {} with bookings", names.len(), matched);

    Ok(Json(TeamResponse {
        requested: names.len(),
        matched,
        days,
        message,
    }))
}
