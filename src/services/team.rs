//! People and team finders

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{BookingsByPerson, DateRange, PersonDayBooking},
};

use super::period::merge_daily;

/// One person's daily desks
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonBookings {
    pub name: String,
    /// Empty when the person has no booking in range
    pub bookings: Vec<PersonDayBooking>,
}

/// Who from a team is in on one day
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TeamDay {
    pub date: NaiveDate,
    pub bookings: Vec<PersonDayBooking>,
}

/// Read a team list: one name per row, no header, rows may end with a comma.
/// Blank rows and repeated names are skipped.
pub fn parse_team_csv(data: &[u8]) -> AppResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut seen = BTreeSet::new();
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::BadRequest(format!("Unreadable team CSV: {}", e)))?;
        if let Some(name) = record.get(0).filter(|n| !n.is_empty()) {
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Daily bookings of each selected person, in the order selected
pub fn person_bookings(names: &[String], bookings: &BookingsByPerson, range: DateRange) -> Vec<PersonBookings> {
    names
        .iter()
        .map(|name| PersonBookings {
            name: name.clone(),
            bookings: bookings
                .get(name)
                .map(|list| merge_daily(name, list, range))
                .unwrap_or_default(),
        })
        .collect()
}

/// Team members holding bookings, grouped by day.
///
/// Names are matched exactly against people with bookings; unknown names are
/// dropped. Days ascend, people within a day are in name order.
pub fn team_bookings(names: &[String], bookings: &BookingsByPerson, range: DateRange) -> Vec<TeamDay> {
    let booked: BTreeSet<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| bookings.contains_key(*name))
        .collect();

    let mut by_date: BTreeMap<NaiveDate, Vec<PersonDayBooking>> = BTreeMap::new();
    for name in booked {
        for row in merge_daily(name, &bookings[name], range) {
            by_date.entry(row.date).or_default().push(row);
        }
    }

    by_date
        .into_iter()
        .map(|(date, bookings)| TeamDay { date, bookings })
        .collect()
}

/// Requested names that hold at least one booking
pub fn known_members(names: &[String], bookings: &BookingsByPerson) -> usize {
    names.iter().filter(|n| bookings.contains_key(*n)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{time_of_day, Booking, BookingPeriod};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(name: &str, day: &str, start: &str, end: &str) -> Booking {
        Booking {
            name: name.to_string(),
            date: date(day),
            desk: Some("Desk 6.A01.1".to_string()),
            start_time: time_of_day::parse(start).unwrap(),
            end_time: time_of_day::parse(end).unwrap(),
            availability: None,
        }
    }

    fn sample() -> BookingsByPerson {
        let mut map = BookingsByPerson::new();
        map.insert(
            "Bill Gates".to_string(),
            vec![
                booking("Bill Gates", "2024-03-05", "00:00:00", "23:59:00"),
                booking("Bill Gates", "2024-03-04", "09:00:00", "12:00:00"),
            ],
        );
        map.insert(
            "Elon Musk".to_string(),
            vec![booking("Elon Musk", "2024-03-05", "13:00:00", "17:00:00")],
        );
        map
    }

    #[test]
    fn test_parse_team_csv() {
        let names = parse_team_csv(b"Elon Musk,\nJeff Bezos,\n\n Bill Gates ,\nElon Musk,\n").unwrap();
        assert_eq!(names, vec!["Elon Musk", "Jeff Bezos", "Bill Gates"]);
    }

    #[test]
    fn test_parse_team_csv_without_trailing_commas() {
        let names = parse_team_csv(b"Ada Lovelace\r\nGrace Hopper").unwrap();
        assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
        assert!(parse_team_csv(b"").unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_team_csv_is_a_bad_request() {
        let err = parse_team_csv(b"Ada Lovelace\n\xff\xfe,\n").unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.starts_with("Unreadable team CSV"));
                assert!(!msg.contains("Cache"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_team_bookings_groups_by_date() {
        let range = DateRange::new(date("2024-03-04"), date("2024-03-06"));
        let names = vec![
            "Elon Musk".to_string(),
            "Jeff Bezos".to_string(),
            "Bill Gates".to_string(),
        ];
        let days = team_bookings(&names, &sample(), range);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date("2024-03-04"));
        assert_eq!(days[0].bookings.len(), 1);
        assert_eq!(days[1].bookings.len(), 2);
        assert_eq!(days[1].bookings[0].name, "Bill Gates");
        assert_eq!(days[1].bookings[0].booking_period, BookingPeriod::AllDay);
        assert_eq!(days[1].bookings[1].booking_period, BookingPeriod::AfternoonOnly);
        assert_eq!(known_members(&names, &sample()), 2);
    }

    #[test]
    fn test_team_without_bookings() {
        let range = DateRange::new(date("2024-03-04"), date("2024-03-06"));
        let names = vec!["Jeff Bezos".to_string()];
        assert!(team_bookings(&names, &sample(), range).is_empty());
        assert_eq!(known_members(&names, &sample()), 0);
    }

    #[test]
    fn test_person_bookings() {
        let range = DateRange::new(date("2024-03-05"), date("2024-03-05"));
        let names = vec!["Elon Musk".to_string(), "Nobody".to_string()];
        let people = person_bookings(&names, &sample(), range);

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].bookings.len(), 1);
        assert_eq!(people[0].bookings[0].booking_period, BookingPeriod::AfternoonOnly);
        assert_eq!(people[1].name, "Nobody");
        assert!(people[1].bookings.is_empty());
    }
}
