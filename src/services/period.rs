//! Booking period classification
//!
//! A booking is "All Day" when it spans midnight to at least 23:59, "Morning
//! Only" when it ends by 13:00 and "Afternoon Only" when it starts at 13:00 or
//! later. Anything else is `Unclassified`.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Booking, BookingPeriod, DateRange, PersonDayBooking};

/// Boundary between the morning and afternoon halves of a day
pub fn midday() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 0, 0).unwrap_or_default()
}

fn late_evening() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default()
}

pub fn classify(start: NaiveTime, end: NaiveTime) -> BookingPeriod {
    if start <= NaiveTime::default() && end >= late_evening() {
        BookingPeriod::AllDay
    } else if end <= midday() {
        BookingPeriod::MorningOnly
    } else if start >= midday() {
        BookingPeriod::AfternoonOnly
    } else {
        BookingPeriod::Unclassified
    }
}

pub fn classify_booking(booking: &Booking) -> BookingPeriod {
    classify(booking.start_time, booking.end_time)
}

/// Combine a newly seen classification with the one already recorded.
///
/// The first classification is kept unless the new one is `AllDay`.
pub fn merge(recorded: Option<BookingPeriod>, next: BookingPeriod) -> BookingPeriod {
    match recorded {
        Some(_) if next == BookingPeriod::AllDay => BookingPeriod::AllDay,
        Some(existing) => existing,
        None => next,
    }
}

/// Collapse one person's bookings to a single row per day within `range`.
///
/// Bookings are visited in the order given. For each date the first booking
/// wins, except that an All Day booking replaces whatever was recorded
/// (desk included). Rows come out sorted by date.
pub fn merge_daily(name: &str, bookings: &[Booking], range: DateRange) -> Vec<PersonDayBooking> {
    let mut daily: BTreeMap<NaiveDate, PersonDayBooking> = BTreeMap::new();

    for booking in bookings.iter().filter(|b| range.contains(b.date)) {
        let period = classify_booking(booking);
        let replace = match daily.get(&booking.date) {
            None => true,
            Some(_) => period == BookingPeriod::AllDay,
        };
        if replace {
            daily.insert(
                booking.date,
                PersonDayBooking {
                    date: booking.date,
                    name: name.to_string(),
                    desk: booking.desk.clone(),
                    booking_period: period,
                },
            );
        }
    }

    daily.into_values().collect()
}
