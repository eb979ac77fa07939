mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::PageQuery;
use caresignal_domain::{NewReminder, Reminder, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Stores the reminder and returns it with the id assigned by storage
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder>;
    async fn find(&self, id: &ID) -> Option<Reminder>;
    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<Reminder>>;
}
