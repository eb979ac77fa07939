use super::subscribers::SendSosAlertToEmergencyContacts;
use crate::error::CareError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use caresignal_api_structs::create_sos_alert::*;
use caresignal_domain::{
    validation::validate_user_id, EmergencyContact, GpsLocation, NewSosAlert, SosAlert,
    ValidationError, VitalInfo,
};
use caresignal_infra::CareContext;

pub async fn create_sos_alert_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    let usecase = CreateSosAlertUseCase {
        user_id: body.user_id,
        emergency_button_pressed: body.emergency_button_pressed,
        emergency_contacts: body.emergency_contacts,
        gps_location: body.gps_location,
        spo2: body.vital_info.spo2,
        blood_pressure: body.vital_info.blood_pressure,
        pulse: body.vital_info.pulse,
    };

    execute(usecase, &ctx)
        .await
        .map(|alert| HttpResponse::Created().json(APIResponse::new(alert)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct CreateSosAlertUseCase {
    pub user_id: i64,
    pub emergency_button_pressed: bool,
    pub emergency_contacts: Vec<String>,
    pub gps_location: String,
    pub spo2: f64,
    pub blood_pressure: String,
    pub pulse: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidAlert(ValidationError),
    StorageError,
}

impl From<ValidationError> for UseCaseError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidAlert(e)
    }
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidAlert(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl CreateSosAlertUseCase {
    /// Checks the fields in order and stops at the first invalid one
    fn validate(&self) -> Result<NewSosAlert, ValidationError> {
        let user_id = validate_user_id(self.user_id)?;
        let emergency_contacts = self
            .emergency_contacts
            .iter()
            .map(|contact| contact.parse::<EmergencyContact>())
            .collect::<Result<Vec<_>, _>>()?;
        let gps_location = self.gps_location.parse::<GpsLocation>()?;
        let vital_info = VitalInfo::new(self.spo2, &self.blood_pressure, self.pulse)?;

        Ok(NewSosAlert {
            user_id,
            emergency_button_pressed: self.emergency_button_pressed,
            emergency_contacts,
            gps_location,
            vital_info,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSosAlertUseCase {
    type Response = SosAlert;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSosAlert";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let alert = self.validate()?;

        ctx.repos
            .sos_alerts
            .insert(alert)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendSosAlertToEmergencyContacts)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use caresignal_infra::{InMemorySmsProvider, PageQuery};
    use std::sync::Arc;

    struct TestContext {
        ctx: CareContext,
        sms: Arc<InMemorySmsProvider>,
    }

    fn setup() -> TestContext {
        let mut ctx = CareContext::create_inmemory();
        let sms = Arc::new(InMemorySmsProvider::new());
        ctx.sms = sms.clone();
        TestContext { ctx, sms }
    }

    fn valid_usecase() -> CreateSosAlertUseCase {
        CreateSosAlertUseCase {
            user_id: 1,
            emergency_button_pressed: true,
            emergency_contacts: vec!["John:1234567890".into(), "Jane:9876543210".into()],
            gps_location: "40.712776, -74.005974".into(),
            spo2: 95.5,
            blood_pressure: "120/80".into(),
            pulse: 75,
        }
    }

    #[actix_web::test]
    async fn creates_alert_and_notifies_contacts() {
        let TestContext { ctx, sms } = setup();

        let alert = execute(valid_usecase(), &ctx).await.unwrap();
        assert_eq!(alert.user_id, 1);
        assert_eq!(alert.gps_location.as_str(), "40.712776, -74.005974");

        let stored = ctx
            .repos
            .sos_alerts
            .find_many(PageQuery { skip: 0, limit: 10 })
            .await
            .unwrap();
        assert_eq!(stored, vec![alert.clone()]);

        let sent = sms.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "1234567890");
        assert_eq!(sent[1].to, "9876543210");
        assert_eq!(sent[0].body, alert.notification_message());
    }

    #[actix_web::test]
    async fn stores_unnamed_contacts_and_unusual_vitals() {
        let TestContext { ctx, sms } = setup();

        let usecase = CreateSosAlertUseCase {
            emergency_contacts: vec![":5551234".into()],
            spo2: 101.0,
            pulse: 0,
            ..valid_usecase()
        };
        let alert = execute(usecase, &ctx).await.unwrap();
        assert_eq!(alert.emergency_contacts[0].to_string(), ":5551234");
        assert_eq!(alert.vital_info.spo2, 101.0);
        assert_eq!(alert.vital_info.pulse, 0);

        let sent = sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "5551234");
        assert!(sent[0].body.contains("  - Status: vitals outside normal range"));
    }

    #[actix_web::test]
    async fn rejects_invalid_alerts_without_storing_or_notifying() {
        let TestContext { ctx, sms } = setup();

        let invalid = vec![
            (
                CreateSosAlertUseCase {
                    user_id: 0,
                    ..valid_usecase()
                },
                ValidationError::InvalidUserId,
            ),
            (
                CreateSosAlertUseCase {
                    emergency_contacts: vec!["John".into()],
                    ..valid_usecase()
                },
                ValidationError::MalformedEmergencyContact,
            ),
            (
                CreateSosAlertUseCase {
                    gps_location: "95.0, 10.0".into(),
                    ..valid_usecase()
                },
                ValidationError::GpsLocationOutOfRange,
            ),
            (
                CreateSosAlertUseCase {
                    gps_location: "somewhere".into(),
                    ..valid_usecase()
                },
                ValidationError::MalformedGpsLocation,
            ),
            (
                CreateSosAlertUseCase {
                    blood_pressure: "abc/80".into(),
                    ..valid_usecase()
                },
                ValidationError::MalformedBloodPressure,
            ),
        ];

        for (usecase, expected) in invalid {
            let res = execute(usecase, &ctx).await;
            assert_eq!(res.unwrap_err(), UseCaseError::InvalidAlert(expected));
        }

        let stored = ctx
            .repos
            .sos_alerts
            .find_many(PageQuery { skip: 0, limit: 10 })
            .await
            .unwrap();
        assert!(stored.is_empty());
        assert!(sms.sent().is_empty());
    }

    #[actix_web::test]
    async fn reports_first_violated_rule() {
        let TestContext { ctx, .. } = setup();

        let mut usecase = CreateSosAlertUseCase {
            user_id: -1,
            emergency_contacts: vec!["John".into()],
            gps_location: "north".into(),
            ..valid_usecase()
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidAlert(ValidationError::InvalidUserId)
        );
    }
}
