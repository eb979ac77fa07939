use crate::{shared::PageInput, APIResponse, BaseClient};
use caresignal_api_structs::*;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Clone)]
pub struct CreateReminderInput {
    pub user_id: i64,
    pub reminder_type: String,
    pub reminder_text: String,
    pub reminder_time: DateTime<Utc>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            user_id: input.user_id,
            reminder_type: input.reminder_type,
            reminder_text: input.reminder_text,
            reminder_time: input.reminder_time,
        };
        self.base
            .post(body, "reminders/".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_many(&self, input: PageInput) -> APIResponse<get_reminders::APIResponse> {
        self.base
            .get(
                format!("reminders/?{}", input.to_query_string()),
                StatusCode::OK,
            )
            .await
    }
}
