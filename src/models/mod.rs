//! Data models for Desk Insights

pub mod availability;
pub mod booking;
pub mod capacity;
pub mod context;
pub mod date_range;
pub mod neighbourhood;
pub mod time_of_day;
pub mod upstream;

// Re-export commonly used types
pub use availability::{AvailabilityRow, BookingPeriod, PersonDayBooking};
pub use booking::{Booking, BookingsByPerson};
pub use capacity::{FloorDailySummary, FloorSummaries};
pub use context::DashboardContext;
pub use date_range::DateRange;
pub use upstream::DayResponse;
