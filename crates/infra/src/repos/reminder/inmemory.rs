use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::PageQuery};
use caresignal_domain::{NewReminder, Reminder, ID};
use std::sync::Mutex;

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        insert(&self.reminders, |id| Reminder::new(id, reminder))
    }

    async fn find(&self, id: &ID) -> Option<Reminder> {
        find(&self.reminders, id)
    }

    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<Reminder>> {
        find_page(&self.reminders, query)
    }
}
