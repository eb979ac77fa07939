use crate::dtos::{SosAlertDTO, VitalInfoDTO};
use caresignal_domain::SosAlert;
use serde::{Deserialize, Serialize};

pub mod create_sos_alert {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: i64,
        pub emergency_button_pressed: bool,
        pub emergency_contacts: Vec<String>,
        pub gps_location: String,
        pub vital_info: VitalInfoDTO,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub sos_alert: SosAlertDTO,
    }

    impl APIResponse {
        pub fn new(alert: SosAlert) -> Self {
            Self {
                message: "SOS alert created".into(),
                sos_alert: SosAlertDTO::new(alert),
            }
        }
    }
}

pub mod get_sos_alerts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub skip: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub sos_alerts: Vec<SosAlertDTO>,
    }

    impl APIResponse {
        pub fn new(alerts: Vec<SosAlert>) -> Self {
            Self {
                sos_alerts: alerts.into_iter().map(SosAlertDTO::new).collect(),
            }
        }
    }
}
