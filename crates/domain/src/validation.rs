//! Field level validation rules for incoming SOS alerts and reminders.
//!
//! Every rule is a pure function returning a [`ValidationError`] describing
//! the first violated constraint. Callers run them in sequence and surface
//! the first failure to the client.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Maximum number of whitespace separated words in a reminder text
pub const MAX_REMINDER_WORDS: usize = 50;
/// How far ahead of now a reminder must at least be scheduled
pub const MIN_REMINDER_LEAD_SECS: i64 = 60;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("User ID must be a positive integer")]
    InvalidUserId,
    #[error("Invalid reminder type")]
    InvalidReminderType,
    #[error("Reminder text must be within {0} words")]
    ReminderTextTooLong(usize),
    #[error("Reminder time must be in the future")]
    ReminderTimeInPast,
    #[error("Reminder time must be at least 1 minute ahead")]
    ReminderTimeTooSoon,
    #[error("Invalid GPS coordinates format")]
    MalformedGpsLocation,
    #[error("Invalid GPS coordinates")]
    GpsLocationOutOfRange,
    #[error("Emergency contact format should be 'Name:Phone'")]
    MalformedEmergencyContact,
    #[error("Blood pressure should be in the format 'systolic/diastolic'")]
    MalformedBloodPressure,
    #[error("Blood pressure should be positive integers")]
    NonPositiveBloodPressure,
}

pub fn validate_user_id(user_id: i64) -> Result<i64, ValidationError> {
    if user_id <= 0 {
        return Err(ValidationError::InvalidUserId);
    }
    Ok(user_id)
}

pub fn validate_reminder_text(text: &str) -> Result<(), ValidationError> {
    if text.split_whitespace().count() > MAX_REMINDER_WORDS {
        return Err(ValidationError::ReminderTextTooLong(MAX_REMINDER_WORDS));
    }
    Ok(())
}

/// The reminder must be strictly more than [`MIN_REMINDER_LEAD_SECS`] ahead of `now`
pub fn validate_reminder_time(
    reminder_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if reminder_time <= now {
        return Err(ValidationError::ReminderTimeInPast);
    }
    if reminder_time <= now + Duration::seconds(MIN_REMINDER_LEAD_SECS) {
        return Err(ValidationError::ReminderTimeTooSoon);
    }
    Ok(())
}

/// Parses `"lat, lon"` into a coordinate pair within [-90, 90] x [-180, 180]
pub fn parse_gps_location(location: &str) -> Result<(f64, f64), ValidationError> {
    let parts = location.split(',').collect::<Vec<_>>();
    if parts.len() != 2 {
        return Err(ValidationError::MalformedGpsLocation);
    }
    let latitude = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::MalformedGpsLocation)?;
    let longitude = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::MalformedGpsLocation)?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::GpsLocationOutOfRange);
    }
    Ok((latitude, longitude))
}

/// Splits `"name:phone"` into its two parts. Only the phone part is checked, it has
/// to be digits only.
pub fn parse_emergency_contact(contact: &str) -> Result<(&str, &str), ValidationError> {
    let parts = contact.split(':').collect::<Vec<_>>();
    if parts.len() != 2 || !is_digits(parts[1]) {
        return Err(ValidationError::MalformedEmergencyContact);
    }
    Ok((parts[0], parts[1]))
}

/// Parses `"systolic/diastolic"` where both readings are positive integers
pub fn parse_blood_pressure(reading: &str) -> Result<(u32, u32), ValidationError> {
    let parts = reading.split('/').collect::<Vec<_>>();
    if parts.len() != 2 || !is_digits(parts[0]) || !is_digits(parts[1]) {
        return Err(ValidationError::MalformedBloodPressure);
    }
    let systolic = parts[0]
        .parse::<u32>()
        .map_err(|_| ValidationError::MalformedBloodPressure)?;
    let diastolic = parts[1]
        .parse::<u32>()
        .map_err(|_| ValidationError::MalformedBloodPressure)?;
    if systolic == 0 || diastolic == 0 {
        return Err(ValidationError::NonPositiveBloodPressure);
    }
    Ok((systolic, diastolic))
}

fn is_digits(val: &str) -> bool {
    !val.is_empty() && val.bytes().all(|b| b.is_ascii_digit())
}
