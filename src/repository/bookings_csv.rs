//! CSV mirror of the booking list
//!
//! The file holds one row per booking with the columns
//! `name,date,desk,startTime,endTime`. Upstream status labels are not stored.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{time_of_day, Booking, BookingsByPerson},
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRow {
    name: String,
    date: NaiveDate,
    desk: Option<String>,
    #[serde(with = "time_of_day")]
    start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    end_time: NaiveTime,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            name: b.name.clone(),
            date: b.date,
            desk: b.desk.clone(),
            start_time: b.start_time,
            end_time: b.end_time,
        }
    }
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            name: row.name,
            date: row.date,
            desk: row.desk.filter(|d| !d.is_empty()),
            start_time: row.start_time,
            end_time: row.end_time,
            availability: None,
        }
    }
}

#[derive(Clone)]
pub struct BookingsCsvRepository {
    path: PathBuf,
}

impl BookingsCsvRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; a missing file is an empty snapshot
    pub fn load(&self) -> AppResult<BookingsByPerson> {
        if !self.path.exists() {
            tracing::info!("No booking cache at {}", self.path.display());
            return Ok(BookingsByPerson::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut bookings = BookingsByPerson::new();
        for row in reader.deserialize::<BookingRow>() {
            let booking = Booking::from(row?);
            bookings.entry(booking.name.clone()).or_default().push(booking);
        }

        tracing::info!(
            "Loaded {} booking(s) for {} people from {}",
            crate::models::booking::total_bookings(&bookings),
            bookings.len(),
            self.path.display()
        );
        Ok(bookings)
    }

    /// Replace the snapshot with `bookings`
    pub fn save(&self, bookings: &BookingsByPerson) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Cache(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for booking in bookings.values().flatten() {
            writer.serialize(BookingRow::from(booking))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::Cache(format!("Failed to write {}: {}", self.path.display(), e)))?;

        tracing::info!("Saved booking cache to {}", self.path.display());
        Ok(())
    }
}
