mod base;
mod reminder;
mod shared;
mod sos_alert;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use caresignal_api_structs::dtos::*;
pub use caresignal_domain::{ReminderType, ID};
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
pub use shared::PageInput;
use sos_alert::SosAlertClient;
pub use sos_alert::CreateSosAlertInput;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use caresignal_api_structs::dtos::ReminderDTO as Reminder;
pub use caresignal_api_structs::dtos::SosAlertDTO as SosAlert;
pub use caresignal_api_structs::dtos::VitalInfoDTO as VitalInfo;

/// CareSignal Server SDK
///
/// The SDK contains methods for interacting with the CareSignal server
/// API.
#[derive(Clone)]
pub struct CareSignalSDK {
    pub reminder: ReminderClient,
    pub sos_alert: SosAlertClient,
    pub status: StatusClient,
}

impl CareSignalSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let sos_alert = SosAlertClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            reminder,
            sos_alert,
            status,
        }
    }
}
