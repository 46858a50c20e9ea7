//! Desk × date availability grid

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{
    availability::AVAILABLE, AvailabilityRow, BookingPeriod, BookingsByPerson, DateRange,
};

use super::period::{classify_booking, merge};

/// Label for a booked cell whose bookings carry no upstream status, which is
/// the case for data restored from the CSV mirror
pub const BOOKED: &str = "Booked";

#[derive(Default)]
struct Cell<'a> {
    /// Occupant → first status label seen for them
    occupants: BTreeMap<&'a str, Option<&'a str>>,
    period: Option<BookingPeriod>,
}

/// Build one row for every (date, desk) pair of `range` × `desk_ids`, sorted by
/// date then desk.
///
/// Bookings without a desk, outside the range or on other desks are ignored.
/// A person holding several slots on the same desk and day counts once, with
/// the first status label seen. When several people share a cell their names
/// are joined in ascending order and the first label found in that order is
/// used.
pub fn build_grid(
    desk_ids: &[String],
    bookings: &BookingsByPerson,
    range: DateRange,
) -> Vec<AvailabilityRow> {
    let desks: BTreeSet<&str> = desk_ids.iter().map(String::as_str).collect();
    if desks.is_empty() || range.is_empty() {
        return Vec::new();
    }

    let mut cells: BTreeMap<(NaiveDate, &str), Cell> = BTreeMap::new();
    for (name, person_bookings) in bookings {
        for booking in person_bookings {
            let Some(desk) = booking.desk.as_deref() else {
                continue;
            };
            if !desks.contains(desk) || !range.contains(booking.date) {
                continue;
            }

            let cell = cells.entry((booking.date, desk)).or_default();
            let status = cell.occupants.entry(name.as_str()).or_insert(None);
            if status.is_none() {
                *status = booking.availability.as_deref();
            }
            cell.period = Some(merge(cell.period, classify_booking(booking)));
        }
    }

    let mut rows = Vec::with_capacity(range.num_days() * desks.len());
    for date in range.days() {
        for desk in &desks {
            let row = match cells.get(&(date, *desk)) {
                Some(cell) => booked_row(date, desk, cell),
                None => AvailabilityRow {
                    date,
                    desk: desk.to_string(),
                    name: String::new(),
                    availability: AVAILABLE.to_string(),
                    booking_period: None,
                },
            };
            rows.push(row);
        }
    }
    rows
}

fn booked_row(date: NaiveDate, desk: &str, cell: &Cell) -> AvailabilityRow {
    let name = cell.occupants.keys().copied().collect::<Vec<_>>().join(", ");
    let availability = cell
        .occupants
        .values()
        .find_map(|label| *label)
        .unwrap_or(BOOKED);

    AvailabilityRow {
        date,
        desk: desk.to_string(),
        name,
        availability: availability.to_string(),
        booking_period: cell.period,
    }
}

/// Number of available desks on `date`
pub fn available_count(rows: &[AvailabilityRow], date: NaiveDate) -> usize {
    rows.iter()
        .filter(|r| r.date == date && r.is_available())
        .count()
}

/// Split grid rows into per-date groups, dates ascending
pub fn group_by_date(rows: Vec<AvailabilityRow>) -> Vec<(NaiveDate, Vec<AvailabilityRow>)> {
    let mut groups: Vec<(NaiveDate, Vec<AvailabilityRow>)> = Vec::new();
    for row in rows {
        match groups.last_mut() {
            Some((date, group)) if *date == row.date => group.push(row),
            _ => groups.push((row.date, vec![row])),
        }
    }
    groups
}
