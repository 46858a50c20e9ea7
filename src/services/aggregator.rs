//! Booking aggregation over a date range
//!
//! Requests one day at a time, oldest first, and flattens the
//! floor → desk → slot → user nesting into per-person bookings and per-floor
//! occupancy counts. The first failed day aborts the whole range.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::{
    error::FetchError,
    models::{
        upstream::{DeskKey, Floor},
        Booking, BookingsByPerson, DateRange, FloorDailySummary, FloorSummaries,
    },
};

use super::fetcher::{ApiToken, DayFetcher};
use super::period::midday;

/// Result of aggregating a date range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub bookings: BookingsByPerson,
    /// Every person seen, ascending
    pub team_members: Vec<String>,
    pub floor_summaries: FloorSummaries,
}

#[derive(PartialEq, Eq, Hash)]
enum DeskIdentity {
    Key(DeskKey),
    Position(usize),
}

pub async fn aggregate<F>(fetcher: &F, token: &ApiToken, range: DateRange) -> Result<Aggregation, FetchError>
where
    F: DayFetcher + ?Sized,
{
    tracing::info!(
        "Fetching desk bookings from {} to {} ({} day(s))",
        range.start,
        range.end,
        range.num_days()
    );

    let mut bookings = BookingsByPerson::new();
    let mut members = BTreeSet::new();
    let mut floor_summaries = FloorSummaries::new();

    for date in range.days() {
        let day = fetcher.fetch_day(token, date).await.map_err(|e| {
            tracing::warn!("Aborting aggregation: {}", e);
            e
        })?;
        tracing::debug!("{}: {} floor(s)", date, day.floors.len());

        for floor in &day.floors {
            let summary = collect_floor(date, floor, &mut bookings, &mut members);
            floor_summaries
                .entry(date)
                .or_default()
                .insert(floor.floor_name.clone(), summary);
        }
    }

    tracing::info!(
        "Aggregated {} booking(s) for {} people",
        crate::models::booking::total_bookings(&bookings),
        members.len()
    );

    Ok(Aggregation {
        bookings,
        team_members: members.into_iter().collect(),
        floor_summaries,
    })
}

fn collect_floor(
    date: NaiveDate,
    floor: &Floor,
    bookings: &mut BookingsByPerson,
    members: &mut BTreeSet<String>,
) -> FloorDailySummary {
    let midday = midday();
    let mut morning = HashSet::new();
    let mut afternoon = HashSet::new();

    for (position, desk) in floor.desks.iter().enumerate() {
        for slot in &desk.time_slots {
            let Some(name) = slot.booked_by() else {
                continue;
            };
            let (Some(start_time), Some(end_time)) = (slot.start_time, slot.end_time) else {
                tracing::debug!("{}: skipping slot of {} without times", date, name);
                continue;
            };

            members.insert(name.to_string());
            bookings.entry(name.to_string()).or_default().push(Booking {
                name: name.to_string(),
                date,
                desk: desk.name.clone(),
                start_time,
                end_time,
                availability: slot.availability_label(),
            });

            let identity = desk
                .key()
                .map(DeskIdentity::Key)
                .unwrap_or(DeskIdentity::Position(position));
            if start_time < midday {
                morning.insert(identity);
            } else {
                afternoon.insert(identity);
            }
        }
    }

    FloorDailySummary {
        total_desks: floor.desks.len(),
        booked_desks_am: morning.len(),
        booked_desks_pm: afternoon.len(),
    }
}
