use crate::dtos::ReminderDTO;
use caresignal_domain::{truncate_to_micros, Reminder};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de::Error, Deserialize, Deserializer, Serialize};

/// Accepts RFC 3339 timestamps. Timestamps without an offset are read as UTC.
/// Precision below a microsecond is dropped.
fn deserialize_reminder_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let time = match DateTime::parse_from_rfc3339(&value) {
        Ok(time) => time.with_timezone(&Utc),
        Err(_) => value
            .parse::<NaiveDateTime>()
            .map(|time| Utc.from_utc_datetime(&time))
            .map_err(|_| D::Error::custom(format!("Malformed reminder time: {}", value)))?,
    };
    Ok(truncate_to_micros(time))
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: i64,
        pub reminder_type: String,
        pub reminder_text: String,
        #[serde(deserialize_with = "deserialize_reminder_time")]
        pub reminder_time: DateTime<Utc>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub reminder: ReminderDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            Self {
                message: "Reminder created".into(),
                reminder: ReminderDTO::new(reminder),
            }
        }
    }
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub skip: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
