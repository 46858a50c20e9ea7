//! Booking model

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::time_of_day;

/// One person's reservation of one desk for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    /// Person holding the booking
    pub name: String,
    pub date: NaiveDate,
    /// Desk name, absent when the upstream record had none
    pub desk: Option<String>,
    #[serde(with = "time_of_day")]
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    #[schema(value_type = String, example = "13:00:00")]
    pub end_time: NaiveTime,
    /// Status label copied from the upstream slot; not kept by the CSV mirror
    pub availability: Option<String>,
}

/// Bookings keyed by person, each list in the order the bookings were seen
pub type BookingsByPerson = BTreeMap<String, Vec<Booking>>;

/// Number of bookings across all people
pub fn total_bookings(bookings: &BookingsByPerson) -> usize {
    bookings.values().map(Vec::len).sum()
}
