//! Inclusive calendar date range

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Days shown after today when no range was chosen
pub const DEFAULT_WINDOW_DAYS: i64 = 3;

/// Inclusive range of calendar days. A range whose start is after its end
/// contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `today` through `today + DEFAULT_WINDOW_DAYS`
    pub fn default_window(today: NaiveDate) -> Self {
        Self::new(today, today + Duration::days(DEFAULT_WINDOW_DAYS))
    }

    /// Build a range from optional `YYYY-MM-DD` arguments, taking missing
    /// bounds from `fallback`.
    pub fn from_args(start: Option<&str>, end: Option<&str>, fallback: DateRange) -> AppResult<Self> {
        let start = match start {
            Some(s) => parse_date(s)?,
            None => fallback.start,
        };
        let end = match end {
            Some(s) => parse_date(s)?,
            None => fallback.end,
        };
        Ok(Self::new(start, end))
    }

    /// Every day of the range, oldest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn num_days(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
