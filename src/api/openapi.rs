//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{availability, bookings, capacity, health, people, team};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Desk Insights API",
        version = "0.3.0",
        description = "Office desk booking dashboard REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Bookings
        bookings::fetch_bookings,
        bookings::clear_cache,
        bookings::save_bookings,
        // Capacity
        capacity::get_capacity,
        // Availability
        availability::list_neighbourhoods,
        availability::get_availability,
        // People
        people::list_people,
        people::people_bookings,
        // Team
        team::team_bookings,
    ),
    components(
        schemas(
            // Bookings
            bookings::FetchRequest,
            bookings::FetchResponse,
            bookings::ClearCacheResponse,
            bookings::SaveResponse,
            crate::models::Booking,
            crate::models::DateRange,
            // Capacity
            capacity::CapacityDay,
            capacity::FloorCapacity,
            crate::models::FloorDailySummary,
            // Availability
            availability::AvailabilityQuery,
            availability::AvailabilityDay,
            availability::AvailabilityResponse,
            crate::models::AvailabilityRow,
            crate::models::BookingPeriod,
            crate::models::neighbourhood::FloorNeighbourhoods,
            // People
            people::PeopleResponse,
            people::PeopleRequest,
            crate::models::PersonDayBooking,
            crate::services::team::PersonBookings,
            // Team
            team::TeamResponse,
            crate::services::team::TeamDay,
            crate::api::RangeQuery,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "bookings", description = "Booking data retrieval and CSV mirror"),
        (name = "capacity", description = "Office capacity per floor"),
        (name = "availability", description = "Desk availability per neighbourhood"),
        (name = "people", description = "People finder"),
        (name = "team", description = "Team finder")
    )
)]
pub struct ApiDoc;

/// Registers the booking service token scheme
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
