//! Dashboard snapshot

use super::{BookingsByPerson, DateRange, FloorSummaries};

/// Everything the dashboard views read from.
///
/// A snapshot is never modified in place: fetching or loading produces a new
/// value that replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct DashboardContext {
    /// Range of the last fetch, unknown for data loaded from the CSV mirror
    pub range: Option<DateRange>,
    pub bookings: BookingsByPerson,
    /// Sorted directory of people seen by the last fetch
    pub team_members: Vec<String>,
    pub floor_summaries: FloorSummaries,
}

impl DashboardContext {
    /// Snapshot seeded from the CSV mirror. Only a fetch fills the member
    /// directory and floor summaries.
    pub fn from_cache(bookings: BookingsByPerson) -> Self {
        Self {
            bookings,
            ..Self::default()
        }
    }

    /// Range to use when a request does not name one
    pub fn range_or(&self, fallback: DateRange) -> DateRange {
        self.range.unwrap_or(fallback)
    }
}
