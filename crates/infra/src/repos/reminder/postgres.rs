use super::IReminderRepo;
use crate::repos::shared::query_structs::PageQuery;
use caresignal_domain::{NewReminder, Reminder, ID};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: i64,
    user_id: i64,
    reminder_type: String,
    reminder_text: String,
    reminder_time: DateTime<Utc>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(e: ReminderRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.id.into(),
            user_id: e.user_id,
            reminder_type: e.reminder_type.parse()?,
            reminder_text: e.reminder_text,
            reminder_time: e.reminder_time,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let raw: ReminderRaw = sqlx::query_as(
            r#"
            INSERT INTO reminders
            (user_id, reminder_type, reminder_text, reminder_time)
            VALUES($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(reminder.user_id)
        .bind(reminder.reminder_type.as_str())
        .bind(&reminder.reminder_text)
        .bind(reminder.reminder_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;

        raw.try_into()
    }

    async fn find(&self, id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE id = $1
            "#,
        )
        .bind(*id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                id, e
            );
            e
        })
        .ok()?;
        res.and_then(|raw| raw.try_into().ok())
    }

    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY id
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(query.limit as i64)
        .bind(query.skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders with query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        reminders.into_iter().map(Reminder::try_from).collect()
    }
}
