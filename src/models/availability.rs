//! Desk availability and booking period models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Availability label for a desk nobody booked
pub const AVAILABLE: &str = "Available";

/// Which half(s) of a day a booking covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BookingPeriod {
    #[serde(rename = "All Day")]
    AllDay,
    #[serde(rename = "Morning Only")]
    MorningOnly,
    #[serde(rename = "Afternoon Only")]
    AfternoonOnly,
    /// Slot boundaries that fit none of the other buckets
    #[serde(rename = "Unclassified")]
    Unclassified,
}

impl BookingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BookingPeriod::AllDay => "All Day",
            BookingPeriod::MorningOnly => "Morning Only",
            BookingPeriod::AfternoonOnly => "Afternoon Only",
            BookingPeriod::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for BookingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cell of the desk × date availability grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityRow {
    pub date: NaiveDate,
    pub desk: String,
    /// Who booked the desk, empty when available. Several occupants are
    /// joined with ", ".
    pub name: String,
    /// "Available" or the upstream status label
    pub availability: String,
    pub booking_period: Option<BookingPeriod>,
}

impl AvailabilityRow {
    pub fn is_available(&self) -> bool {
        self.availability == AVAILABLE
    }
}

/// One person's desk for one day, as listed by the people and team finders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDayBooking {
    pub date: NaiveDate,
    pub name: String,
    pub desk: Option<String>,
    pub booking_period: BookingPeriod,
}
