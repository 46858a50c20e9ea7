//! Office capacity model

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Occupancy of one floor on one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FloorDailySummary {
    /// Desks listed for the floor, booked or not
    pub total_desks: usize,
    /// Distinct desks with a slot starting before 13:00
    pub booked_desks_am: usize,
    /// Distinct desks with a slot starting at or after 13:00
    pub booked_desks_pm: usize,
}

impl FloorDailySummary {
    /// Busier half of the day
    pub fn booked_desks(&self) -> usize {
        self.booked_desks_am.max(self.booked_desks_pm)
    }

    pub fn available_desks(&self) -> usize {
        self.total_desks.saturating_sub(self.booked_desks())
    }
}

/// Floors in upstream order, per day
pub type FloorSummaries = BTreeMap<NaiveDate, IndexMap<String, FloorDailySummary>>;
