use crate::{shared::PageInput, APIResponse, BaseClient, VitalInfo};
use caresignal_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SosAlertClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Clone)]
pub struct CreateSosAlertInput {
    pub user_id: i64,
    pub emergency_button_pressed: bool,
    pub emergency_contacts: Vec<String>,
    pub gps_location: String,
    pub vital_info: VitalInfo,
}

impl SosAlertClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateSosAlertInput,
    ) -> APIResponse<create_sos_alert::APIResponse> {
        let body = create_sos_alert::RequestBody {
            user_id: input.user_id,
            emergency_button_pressed: input.emergency_button_pressed,
            emergency_contacts: input.emergency_contacts,
            gps_location: input.gps_location,
            vital_info: input.vital_info,
        };
        self.base
            .post(body, "sos/".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_many(&self, input: PageInput) -> APIResponse<get_sos_alerts::APIResponse> {
        self.base
            .get(format!("sos/?{}", input.to_query_string()), StatusCode::OK)
            .await
    }
}
