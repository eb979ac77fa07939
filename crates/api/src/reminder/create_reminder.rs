use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use caresignal_api_structs::create_reminder::*;
use caresignal_domain::{
    truncate_to_micros,
    validation::{validate_reminder_text, validate_reminder_time, validate_user_id},
    NewReminder, Reminder, ReminderType, ValidationError,
};
use caresignal_infra::CareContext;
use chrono::{DateTime, Utc};

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id: body.user_id,
        reminder_type: body.reminder_type,
        reminder_text: body.reminder_text,
        reminder_time: body.reminder_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: i64,
    pub reminder_type: String,
    pub reminder_text: String,
    pub reminder_time: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidReminder(ValidationError),
    StorageError,
}

impl From<ValidationError> for UseCaseError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidReminder(e)
    }
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let user_id = validate_user_id(self.user_id)?;
        let reminder_type = self.reminder_type.parse::<ReminderType>()?;
        validate_reminder_text(&self.reminder_text)?;
        let reminder_time = truncate_to_micros(self.reminder_time);
        validate_reminder_time(reminder_time, ctx.sys.now())?;

        let reminder = NewReminder {
            user_id,
            reminder_type,
            reminder_text: self.reminder_text.clone(),
            reminder_time,
        };

        ctx.repos
            .reminders
            .insert(reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
