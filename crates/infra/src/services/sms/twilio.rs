use super::{ISmsProvider, SmsMessage};
use crate::config::SmsConfig;
use reqwest::Client;

/// Sends messages through the Twilio Messages REST API
pub struct TwilioSmsProvider {
    client: Client,
    config: SmsConfig,
}

impl TwilioSmsProvider {
    pub fn new(config: SmsConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait::async_trait]
impl ISmsProvider for TwilioSmsProvider {
    async fn send(&self, message: &SmsMessage) -> anyhow::Result<()> {
        self.client
            .post(&self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("From", self.config.from_number.as_str()),
                ("To", message.to.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
