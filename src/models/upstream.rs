//! Response shapes of the upstream GetDesks endpoint

use chrono::NaiveTime;
use serde::Deserialize;
use serde_json::Value;

use super::time_of_day;

/// One day of desk availability
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
    #[serde(default)]
    pub floors: Vec<Floor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    #[serde(default)]
    pub floor_name: String,
    #[serde(default)]
    pub desks: Vec<Desk>,
}

/// Desk identifiers arrive as numbers or strings depending on the building
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum DeskKey {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Desk {
    #[serde(default)]
    pub id: Option<DeskKey>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl Desk {
    /// Identity used when counting distinct booked desks
    pub fn key(&self) -> Option<DeskKey> {
        self.id
            .clone()
            .or_else(|| self.name.clone().map(DeskKey::Text))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub user: Option<SlotUser>,
    /// Unbooked slots may come without boundaries
    #[serde(default, deserialize_with = "time_of_day::optional::deserialize")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "time_of_day::optional::deserialize")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub availability: Option<Value>,
}

impl TimeSlot {
    /// Name of the person holding this slot, if any
    pub fn booked_by(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }

    /// Status label as text; non-string labels keep their JSON rendering
    pub fn availability_label(&self) -> Option<String> {
        match &self.availability {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotUser {
    #[serde(default)]
    pub name: Option<String>,
}
