//! People finder endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    services::team::{self, PersonBookings},
    AppState,
};

use super::resolve_range;

#[derive(Serialize, ToSchema)]
pub struct PeopleResponse {
    /// Everyone holding a booking in the last fetch, ascending
    pub team_members: Vec<String>,
}

/// People lookup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PeopleRequest {
    #[validate(length(min = 1, message = "Select at least one person"))]
    pub names: Vec<String>,
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// List the team member directory
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "Team member directory", body = PeopleResponse)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> Json<PeopleResponse> {
    Json(PeopleResponse {
        team_members: state.snapshot().await.team_members.clone(),
    })
}

/// Daily desk and booking period of each selected person
#[utoipa::path(
    post,
    path = "/people/bookings",
    tag = "people",
    request_body = PeopleRequest,
    responses(
        (status = 200, description = "Bookings per person", body = Vec<PersonBookings>),
        (status = 400, description = "No names or invalid dates", body = crate::error::ErrorResponse)
    )
)]
pub async fn people_bookings(
    State(state): State<AppState>,
    Json(request): Json<PeopleRequest>,
) -> AppResult<Json<Vec<PersonBookings>>> {
    request.validate()?;
    let range = resolve_range(&state, request.start_date.as_deref(), request.end_date.as_deref()).await?;

    let context = state.snapshot().await;
    Ok(Json(team::person_bookings(&request.names, &context.bookings, range)))
}
