//! Office capacity endpoint

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::FloorSummaries, AppState};

/// Occupancy of one floor
#[derive(Debug, Serialize, ToSchema)]
pub struct FloorCapacity {
    pub floor: String,
    pub total_desks: usize,
    pub booked_desks_am: usize,
    pub booked_desks_pm: usize,
    /// Busier of the two half days
    pub booked_desks: usize,
    pub available_desks: usize,
}

/// Occupancy of every floor on one day
#[derive(Debug, Serialize, ToSchema)]
pub struct CapacityDay {
    pub date: NaiveDate,
    pub floors: Vec<FloorCapacity>,
}

/// Booked and available desks per floor for each fetched day
#[utoipa::path(
    get,
    path = "/capacity",
    tag = "capacity",
    responses(
        (status = 200, description = "Per-day floor occupancy of the last fetch", body = Vec<CapacityDay>)
    )
)]
pub async fn get_capacity(State(state): State<AppState>) -> AppResult<Json<Vec<CapacityDay>>> {
    let context = state.snapshot().await;
    Ok(Json(capacity_days(&context.floor_summaries)))
}

pub(crate) fn capacity_days(summaries: &FloorSummaries) -> Vec<CapacityDay> {
    summaries
        .iter()
        .map(|(date, floors)| CapacityDay {
            date: *date,
            floors: floors
                .iter()
                .map(|(floor, summary)| FloorCapacity {
                    floor: floor.clone(),
                    total_desks: summary.total_desks,
                    booked_desks_am: summary.booked_desks_am,
                    booked_desks_pm: summary.booked_desks_pm,
                    booked_desks: summary.booked_desks(),
                    available_desks: summary.available_desks(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FloorDailySummary;

    #[test]
    fn test_capacity_days_keeps_floor_order() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut summaries = FloorSummaries::new();
        let floors = summaries.entry(day).or_default();
        floors.insert(
            "Level 7".to_string(),
            FloorDailySummary { total_desks: 20, booked_desks_am: 3, booked_desks_pm: 5 },
        );
        floors.insert("Level 6".to_string(), FloorDailySummary::default());

        let days = capacity_days(&summaries);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].floors[0].floor, "Level 7");
        assert_eq!(days[0].floors[0].booked_desks, 5);
        assert_eq!(days[0].floors[0].available_desks, 15);
        assert_eq!(days[0].floors[1].floor, "Level 6");
    }
}
