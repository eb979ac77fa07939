use super::ISosAlertRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::PageQuery};
use caresignal_domain::{NewSosAlert, SosAlert, ID};
use std::sync::Mutex;

pub struct InMemorySosAlertRepo {
    alerts: Mutex<Vec<SosAlert>>,
}

impl InMemorySosAlertRepo {
    pub fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISosAlertRepo for InMemorySosAlertRepo {
    async fn insert(&self, alert: NewSosAlert) -> anyhow::Result<SosAlert> {
        insert(&self.alerts, |id| SosAlert::new(id, alert))
    }

    async fn find(&self, id: &ID) -> Option<SosAlert> {
        find(&self.alerts, id)
    }

    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<SosAlert>> {
        find_page(&self.alerts, query)
    }
}
