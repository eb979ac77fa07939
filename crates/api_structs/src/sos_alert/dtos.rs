use caresignal_domain::{SosAlert, VitalInfo, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VitalInfoDTO {
    pub spo2: f64,
    pub blood_pressure: String,
    pub pulse: i64,
}

impl VitalInfoDTO {
    pub fn new(vital_info: &VitalInfo) -> Self {
        Self {
            spo2: vital_info.spo2,
            blood_pressure: vital_info.blood_pressure.to_string(),
            pulse: vital_info.pulse,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SosAlertDTO {
    pub id: ID,
    pub user_id: i64,
    pub emergency_button_pressed: bool,
    pub emergency_contacts: Vec<String>,
    pub gps_location: String,
    pub vital_info: VitalInfoDTO,
}

impl SosAlertDTO {
    pub fn new(alert: SosAlert) -> Self {
        Self {
            id: alert.id,
            user_id: alert.user_id,
            emergency_button_pressed: alert.emergency_button_pressed,
            emergency_contacts: alert
                .emergency_contacts
                .iter()
                .map(|c| c.to_string())
                .collect(),
            gps_location: alert.gps_location.to_string(),
            vital_info: VitalInfoDTO::new(&alert.vital_info),
        }
    }
}
