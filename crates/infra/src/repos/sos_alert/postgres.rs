use super::ISosAlertRepo;
use crate::repos::shared::query_structs::PageQuery;
use caresignal_domain::{EmergencyContact, NewSosAlert, SosAlert, VitalInfo, ID};
use sqlx::{types::Json, FromRow, PgPool};
use tracing::error;

pub struct PostgresSosAlertRepo {
    pool: PgPool,
}

impl PostgresSosAlertRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SosAlertRaw {
    id: i64,
    user_id: i64,
    emergency_button_pressed: bool,
    emergency_contacts: Json<Vec<EmergencyContact>>,
    gps_location: String,
    vital_info: Json<VitalInfo>,
}

impl TryFrom<SosAlertRaw> for SosAlert {
    type Error = anyhow::Error;

    fn try_from(e: SosAlertRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.id.into(),
            user_id: e.user_id,
            emergency_button_pressed: e.emergency_button_pressed,
            emergency_contacts: e.emergency_contacts.0,
            gps_location: e.gps_location.parse()?,
            vital_info: e.vital_info.0,
        })
    }
}

#[async_trait::async_trait]
impl ISosAlertRepo for PostgresSosAlertRepo {
    async fn insert(&self, alert: NewSosAlert) -> anyhow::Result<SosAlert> {
        let raw: SosAlertRaw = sqlx::query_as(
            r#"
            INSERT INTO sos_alerts
            (user_id, emergency_button_pressed, emergency_contacts, gps_location, vital_info)
            VALUES($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(alert.user_id)
        .bind(alert.emergency_button_pressed)
        .bind(Json(&alert.emergency_contacts))
        .bind(alert.gps_location.as_str())
        .bind(Json(&alert.vital_info))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert sos alert: {:?}. DB returned error: {:?}",
                alert, e
            );
            e
        })?;

        raw.try_into()
    }

    async fn find(&self, id: &ID) -> Option<SosAlert> {
        let res: Option<SosAlertRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sos_alerts
            WHERE id = $1
            "#,
        )
        .bind(*id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find sos alert with id: {:?} failed. DB returned error: {:?}",
                id, e
            );
            e
        })
        .ok()?;
        res.and_then(|raw| raw.try_into().ok())
    }

    async fn find_many(&self, query: PageQuery) -> anyhow::Result<Vec<SosAlert>> {
        let alerts: Vec<SosAlertRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sos_alerts
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
                "Find sos alerts with query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        alerts.into_iter().map(SosAlert::try_from).collect()
    }
}
