use crate::validation::{parse_blood_pressure, ValidationError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Vital signs captured at the time an SOS alert was raised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalInfo {
    /// Blood oxygen saturation in percent
    pub spo2: f64,
    pub blood_pressure: BloodPressure,
    /// Beats per minute
    pub pulse: i64,
}

impl VitalInfo {
    /// Only the blood pressure reading is validated, SpO2 and pulse are stored as reported
    pub fn new(spo2: f64, blood_pressure: &str, pulse: i64) -> Result<Self, ValidationError> {
        let blood_pressure = blood_pressure.parse::<BloodPressure>()?;
        Ok(Self {
            spo2,
            blood_pressure,
            pulse,
        })
    }

    /// Whether SpO2 and pulse are within the normal resting ranges
    pub fn is_normal(&self) -> bool {
        self.spo2 > 90.0 && (60..=100).contains(&self.pulse)
    }
}

/// A `systolic/diastolic` reading. Keeps the submitted text so that it
/// is stored exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BloodPressure {
    reading: String,
    systolic: u32,
    diastolic: u32,
}

impl BloodPressure {
    pub fn systolic(&self) -> u32 {
        self.systolic
    }

    pub fn diastolic(&self) -> u32 {
        self.diastolic
    }

    pub fn as_str(&self) -> &str {
        &self.reading
    }
}

impl FromStr for BloodPressure {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (systolic, diastolic) = parse_blood_pressure(s)?;
        Ok(Self {
            reading: s.to_string(),
            systolic,
            diastolic,
        })
    }
}

impl TryFrom<String> for BloodPressure {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BloodPressure> for String {
    fn from(bp: BloodPressure) -> Self {
        bp.reading
    }
}

impl Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reading)
    }
}
