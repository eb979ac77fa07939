mod reminder;
mod shared;
mod sos_alert;

pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use shared::query_structs::PageQuery;
pub use sos_alert::ISosAlertRepo;
use sos_alert::{InMemorySosAlertRepo, PostgresSosAlertRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub sos_alerts: Arc<dyn ISosAlertRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            sos_alerts: Arc::new(PostgresSosAlertRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            sos_alerts: Arc::new(InMemorySosAlertRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
