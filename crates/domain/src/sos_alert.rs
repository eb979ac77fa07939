use crate::{
    shared::entity::{Entity, ID},
    validation::{parse_emergency_contact, parse_gps_location, ValidationError},
    vitals::VitalInfo,
};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// An emergency raised by a `User`. Once persisted it is sent to every
/// `EmergencyContact` of the alert.
#[derive(Debug, Clone, PartialEq)]
pub struct SosAlert {
    pub id: ID,
    pub user_id: i64,
    pub emergency_button_pressed: bool,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub gps_location: GpsLocation,
    pub vital_info: VitalInfo,
}

/// A validated `SosAlert` which has not been assigned an id by storage yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewSosAlert {
    pub user_id: i64,
    pub emergency_button_pressed: bool,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub gps_location: GpsLocation,
    pub vital_info: VitalInfo,
}

impl SosAlert {
    pub fn new(id: ID, alert: NewSosAlert) -> Self {
        Self {
            id,
            user_id: alert.user_id,
            emergency_button_pressed: alert.emergency_button_pressed,
            emergency_contacts: alert.emergency_contacts,
            gps_location: alert.gps_location,
            vital_info: alert.vital_info,
        }
    }

    /// Replaces the contact list. Nothing changes if any of the contacts are invalid.
    pub fn update_emergency_contacts(&mut self, contacts: &[String]) -> Result<(), ValidationError> {
        self.emergency_contacts = contacts
            .iter()
            .map(|c| c.parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    /// The text that is sent to every emergency contact. SpO2 always shows a
    /// decimal, `97.0` and not `97`.
    pub fn notification_message(&self) -> String {
        let mut message = format!(
            "SOS Alert! User ID: {}\nLocation: {}\nVital Information:\n  - SpO2: {:?}\n  - Blood Pressure: {}\n  - Pulse: {}\n",
            self.user_id,
            self.gps_location,
            self.vital_info.spo2,
            self.vital_info.blood_pressure,
            self.vital_info.pulse
        );
        if !self.vital_info.is_normal() {
            message.push_str("  - Status: vitals outside normal range\n");
        }
        message
    }
}

impl Entity for SosAlert {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A `name:phone` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

impl FromStr for EmergencyContact {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, phone) = parse_emergency_contact(s)?;
        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }
}

impl TryFrom<String> for EmergencyContact {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmergencyContact> for String {
    fn from(contact: EmergencyContact) -> Self {
        contact.to_string()
    }
}

impl Display for EmergencyContact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.phone)
    }
}

/// Coordinates in the `"lat, lon"` form the client submitted them in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GpsLocation {
    location: String,
    latitude: f64,
    longitude: f64,
}

impl GpsLocation {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn as_str(&self) -> &str {
        &self.location
    }
}

impl FromStr for GpsLocation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = parse_gps_location(s)?;
        Ok(Self {
            location: s.to_string(),
            latitude,
            longitude,
        })
    }
}

impl TryFrom<String> for GpsLocation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GpsLocation> for String {
    fn from(location: GpsLocation) -> Self {
        location.location
    }
}

impl Display for GpsLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location)
    }
}
