mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmsConfig};
pub use repos::{IReminderRepo, ISosAlertRepo, PageQuery, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tracing::warn;

#[derive(Clone)]
pub struct CareContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub sms: Arc<dyn ISmsProvider>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl CareContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        let config = Config::new();
        let sms = create_sms_provider(&config)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            sms,
        })
    }

    /// Context backed by inmemory repositories and an inmemory sms provider
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            sms: Arc::new(InMemorySmsProvider::new()),
        }
    }
}

fn create_sms_provider(config: &Config) -> anyhow::Result<Arc<dyn ISmsProvider>> {
    match &config.sms {
        Some(sms_config) => Ok(Arc::new(TwilioSmsProvider::new(sms_config.clone())?)),
        None => {
            warn!("No SMS provider configured. SOS alerts will only be logged.");
            Ok(Arc::new(LogSmsProvider))
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<CareContext> {
    CareContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string()?,
    })
    .await
}

fn get_psql_connection_string() -> anyhow::Result<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .map_err(|_| anyhow::anyhow!("{} env var to be present.", PSQL_CONNECTION_STRING))
}
