use crate::{APIResponse, BaseClient};
use caresignal_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_service_health::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }

    pub async fn say_hello(&self, name: &str) -> APIResponse<say_hello::APIResponse> {
        self.base
            .get(format!("hello/{}", name), StatusCode::OK)
            .await
    }
}
