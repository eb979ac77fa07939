mod reminder;
mod shared;
mod sos_alert;
pub mod validation;
mod vitals;

pub use reminder::{truncate_to_micros, NewReminder, Reminder, ReminderType};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use sos_alert::{EmergencyContact, GpsLocation, NewSosAlert, SosAlert};
pub use validation::ValidationError;
pub use vitals::{BloodPressure, VitalInfo};
