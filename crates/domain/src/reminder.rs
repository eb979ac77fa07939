use crate::shared::entity::{Entity, ID};
use crate::validation::ValidationError;
use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A `Reminder` is a text notice of a given `ReminderType` that a `User`
/// wants to receive at `reminder_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub user_id: i64,
    pub reminder_type: ReminderType,
    pub reminder_text: String,
    pub reminder_time: DateTime<Utc>,
}

/// A validated `Reminder` which has not been assigned an id by storage yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub user_id: i64,
    pub reminder_type: ReminderType,
    pub reminder_text: String,
    pub reminder_time: DateTime<Utc>,
}

impl Reminder {
    pub fn new(id: ID, reminder: NewReminder) -> Self {
        Self {
            id,
            user_id: reminder.user_id,
            reminder_type: reminder.reminder_type,
            reminder_text: reminder.reminder_text,
            reminder_time: reminder.reminder_time,
        }
    }

    /// Pushes the `reminder_time` the given number of minutes into the future
    pub fn postpone(&mut self, minutes: i64) {
        self.reminder_time = self.reminder_time + Duration::minutes(minutes);
    }
}

/// Drops anything below a microsecond, the precision a `reminder_time` is stored with
pub fn truncate_to_micros(time: DateTime<Utc>) -> DateTime<Utc> {
    time.with_nanosecond(time.nanosecond() / 1_000 * 1_000)
        .unwrap_or(time)
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderType {
    #[serde(rename = "Medication")]
    Medication,
    #[serde(rename = "Daily Tasks")]
    DailyTasks,
    #[serde(rename = "Doctor Appointments")]
    DoctorAppointments,
}

impl ReminderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "Medication",
            Self::DailyTasks => "Daily Tasks",
            Self::DoctorAppointments => "Doctor Appointments",
        }
    }
}

impl FromStr for ReminderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Medication" => Ok(Self::Medication),
            "Daily Tasks" => Ok(Self::DailyTasks),
            "Doctor Appointments" => Ok(Self::DoctorAppointments),
            _ => Err(ValidationError::InvalidReminderType),
        }
    }
}

impl Display for ReminderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_reminder_types() {
        assert_eq!("Medication".parse::<ReminderType>(), Ok(ReminderType::Medication));
        assert_eq!("Daily Tasks".parse::<ReminderType>(), Ok(ReminderType::DailyTasks));
        assert_eq!(
            "Doctor Appointments".parse::<ReminderType>(),
            Ok(ReminderType::DoctorAppointments)
        );
        assert_eq!(
            "medication".parse::<ReminderType>(),
            Err(ValidationError::InvalidReminderType)
        );
        assert_eq!(
            serde_json::to_string(&ReminderType::DailyTasks).unwrap(),
            "\"Daily Tasks\""
        );
    }

    #[test]
    fn truncates_to_microseconds() {
        let time = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        assert_eq!(
            truncate_to_micros(time + Duration::nanoseconds(123_456_789)),
            time + Duration::microseconds(123_456)
        );
        assert_eq!(truncate_to_micros(time), time);
    }

    #[test]
    fn postpones_reminder() {
        let time = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let mut reminder = Reminder::new(
            ID::from(3),
            NewReminder {
                user_id: 1,
                reminder_type: ReminderType::Medication,
                reminder_text: "Take your blood pressure medication".into(),
                reminder_time: time,
            },
        );

        reminder.postpone(15);
        assert_eq!(
            reminder.reminder_time,
            Utc.with_ymd_and_hms(2024, 6, 10, 9, 15, 0).unwrap()
        );
    }
}
