use super::create_sos_alert::CreateSosAlertUseCase;
use crate::shared::usecase::Subscriber;
use caresignal_domain::SosAlert;
use caresignal_infra::{CareContext, ISmsProvider, SmsMessage};
use tracing::{error, info};

/// Sends the persisted `SosAlert` to each of its emergency contacts
pub struct SendSosAlertToEmergencyContacts;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateSosAlertUseCase> for SendSosAlertToEmergencyContacts {
    async fn notify(&self, alert: &SosAlert, ctx: &CareContext) {
        let delivered = send_sos_alert(alert, ctx.sms.as_ref()).await;
        info!(
            "SOS alert {} delivered to {} of {} emergency contacts",
            alert.id,
            delivered,
            alert.emergency_contacts.len()
        );
    }
}

/// Contacts are attempted one at a time, in order. A failed delivery is logged
/// and does not stop delivery to the remaining contacts.
/// Returns the number of contacts the message was delivered to.
pub async fn send_sos_alert(alert: &SosAlert, sms: &dyn ISmsProvider) -> usize {
    let body = alert.notification_message();
    let mut delivered = 0;

    for contact in &alert.emergency_contacts {
        let message = SmsMessage {
            to: contact.phone.clone(),
            body: body.clone(),
        };
        match sms.send(&message).await {
            Ok(_) => {
                info!("Message sent to {}", contact);
                delivered += 1;
            }
            Err(e) => {
                error!("Failed to send message to {}: {:?}", contact, e);
            }
        }
    }

    delivered
}
