//! Desk availability per neighbourhood

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{
        neighbourhood::{self, FloorNeighbourhoods},
        AvailabilityRow,
    },
    services::grid,
    AppState,
};

use super::resolve_range;

/// Query parameters for desk availability
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityQuery {
    /// Floor name, e.g. "Level 6"
    pub floor: String,
    /// Neighbourhood name, e.g. "A (Station)"
    pub neighbourhood: String,
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// Desks of a neighbourhood on one day
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    pub available_desks: usize,
    pub rows: Vec<AvailabilityRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub floor: String,
    pub neighbourhood: String,
    pub days: Vec<AvailabilityDay>,
}

/// List floors and their neighbourhoods
#[utoipa::path(
    get,
    path = "/neighbourhoods",
    tag = "availability",
    responses(
        (status = 200, description = "Known neighbourhoods", body = Vec<FloorNeighbourhoods>)
    )
)]
pub async fn list_neighbourhoods() -> Json<Vec<FloorNeighbourhoods>> {
    Json(neighbourhood::by_floor())
}

/// Availability of every desk of a neighbourhood for each day of the range
#[utoipa::path(
    get,
    path = "/availability",
    tag = "availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability grid grouped by day", body = AvailabilityResponse),
        (status = 400, description = "Invalid dates", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown floor or neighbourhood", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let hood = neighbourhood::find(&query.floor, &query.neighbourhood).ok_or_else(|| {
        AppError::NotFound(format!(
            "No neighbourhood '{}' on '{}'",
            query.neighbourhood, query.floor
        ))
    })?;
    let range = resolve_range(&state, query.start_date.as_deref(), query.end_date.as_deref()).await?;

    let context = state.snapshot().await;
    let rows = grid::build_grid(&hood.desk_ids(), &context.bookings, range);
    tracing::debug!(
        "Availability grid for {} / {}: {} row(s)",
        hood.floor,
        hood.name,
        rows.len()
    );

    let days = grid::group_by_date(rows)
        .into_iter()
        .map(|(date, rows)| AvailabilityDay {
            date,
            available_desks: grid::available_count(&rows, date),
            rows,
        })
        .collect();

    Ok(Json(AvailabilityResponse {
        floor: hood.floor.to_string(),
        neighbourhood: hood.name.to_string(),
        days,
    }))
}
