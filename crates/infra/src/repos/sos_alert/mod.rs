mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::PageQuery;
use caresignal_domain::{NewSosAlert, SosAlert, ID};
pub use inmemory::InMemorySosAlertRepo;
pub use postgres::PostgresSosAlertRepo;

#[async_trait::async_trait]
pub trait ISosAlertRepo: Send + Sync {
    /// Stores the alert and returns it with the id assigned by storage
    async fn insert(&self, alert: NewSosAlert) -> anyhow::Result<SosAlert>;
    async fn find(&self, id: &ID) -> Option<SosAlert>;
    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<SosAlert>>;
}
