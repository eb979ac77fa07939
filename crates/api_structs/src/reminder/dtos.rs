use caresignal_domain::{Reminder, ReminderType, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: i64,
    pub reminder_type: ReminderType,
    pub reminder_text: String,
    pub reminder_time: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            reminder_type: reminder.reminder_type,
            reminder_text: reminder.reminder_text,
            reminder_time: reminder.reminder_time,
        }
    }
}
