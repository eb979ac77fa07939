mod helpers;

use caresignal_sdk::{
    APIError, CreateReminderInput, CreateSosAlertInput, PageInput, ReminderType, VitalInfo,
};
use chrono::{Duration, DurationRound, Utc};
use helpers::setup::spawn_app;

fn sos_alert_input() -> CreateSosAlertInput {
    CreateSosAlertInput {
        user_id: 1,
        emergency_button_pressed: true,
        emergency_contacts: vec!["John:1234567890".into(), "Jane:0987654321".into()],
        gps_location: "59.9139, 10.7522".into(),
        vital_info: VitalInfo {
            spo2: 97.5,
            blood_pressure: "120/80".into(),
            pulse: 72,
        },
    }
}

fn reminder_input(text: &str, ahead: Duration) -> CreateReminderInput {
    CreateReminderInput {
        user_id: 1,
        reminder_type: "Medication".into(),
        reminder_text: text.into(),
        reminder_time: Utc::now() + ahead,
    }
}

fn assert_bad_client_data<T: std::fmt::Debug>(res: Result<T, APIError>, reason: &str) {
    match res {
        Err(APIError::BadClientData(message)) => assert!(
            message.ends_with(&format!("`{}`", reason)),
            "Unexpected reason: {}",
            message
        ),
        other => panic!("Expected a bad request, got: {:?}", other),
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .check_health()
        .await
        .expect("Expected service to be healthy");
    assert_eq!(res.message, "Person Engagement App API is running");
}

#[actix_web::test]
async fn test_say_hello() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .say_hello("Alice")
        .await
        .expect("Expected to be greeted");
    assert_eq!(res.message, "Hello, Alice");
}

#[actix_web::test]
async fn test_create_sos_alert_notifies_contacts() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .sos_alert
        .create(sos_alert_input())
        .await
        .expect("Expected to create sos alert");

    assert_eq!(res.message, "SOS alert created");
    let alert = res.sos_alert;
    assert_eq!(alert.user_id, 1);
    assert!(alert.emergency_button_pressed);
    assert_eq!(
        alert.emergency_contacts,
        vec!["John:1234567890".to_string(), "Jane:0987654321".to_string()]
    );
    assert_eq!(alert.gps_location, "59.9139, 10.7522");
    assert_eq!(alert.vital_info.blood_pressure, "120/80");

    let sent = app.sms.sent();
    let recipients = sent.iter().map(|m| m.to.as_str()).collect::<Vec<_>>();
    assert_eq!(recipients, vec!["1234567890", "0987654321"]);
    assert!(sent[0].body.starts_with("SOS Alert! User ID: 1\n"));
    assert!(sent[0].body.contains("Location: 59.9139, 10.7522"));

    let alerts = sdk
        .sos_alert
        .get_many(PageInput::default())
        .await
        .expect("Expected to list sos alerts")
        .sos_alerts;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, alert.id);
}

#[actix_web::test]
async fn test_failing_contact_does_not_fail_sos_alert() {
    let (app, sdk, _) = spawn_app().await;
    app.sms.fail_for("1234567890");

    assert!(sdk.sos_alert.create(sos_alert_input()).await.is_ok());
    let sent = app.sms.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "0987654321");
}

#[actix_web::test]
async fn test_rejects_invalid_sos_alerts() {
    let (app, sdk, _) = spawn_app().await;

    let mut input = sos_alert_input();
    input.gps_location = "91.0, 10.0".into();
    assert_bad_client_data(
        sdk.sos_alert.create(input).await,
        "Invalid GPS coordinates",
    );

    let mut input = sos_alert_input();
    input.gps_location = "north, east".into();
    assert_bad_client_data(
        sdk.sos_alert.create(input).await,
        "Invalid GPS coordinates format",
    );

    let mut input = sos_alert_input();
    input.emergency_contacts = vec!["John".into()];
    assert_bad_client_data(
        sdk.sos_alert.create(input).await,
        "Emergency contact format should be 'Name:Phone'",
    );

    let mut input = sos_alert_input();
    input.vital_info.blood_pressure = "abc/80".into();
    assert_bad_client_data(
        sdk.sos_alert.create(input).await,
        "Blood pressure should be in the format 'systolic/diastolic'",
    );

    let mut input = sos_alert_input();
    input.user_id = 0;
    assert_bad_client_data(
        sdk.sos_alert.create(input).await,
        "User ID must be a positive integer",
    );

    assert!(app.sms.sent().is_empty());
    let alerts = sdk
        .sos_alert
        .get_many(PageInput::default())
        .await
        .expect("Expected to list sos alerts")
        .sos_alerts;
    assert!(alerts.is_empty());
}

#[actix_web::test]
async fn test_create_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let mut input = reminder_input("Take your blood pressure medication", Duration::minutes(2));
    let whole_second = input
        .reminder_time
        .duration_trunc(Duration::seconds(1))
        .unwrap();
    input.reminder_time = whole_second + Duration::nanoseconds(123_456_789);

    let res = sdk
        .reminder
        .create(input)
        .await
        .expect("Expected to create reminder");
    assert_eq!(res.message, "Reminder created");
    assert_eq!(res.reminder.reminder_type, ReminderType::Medication);
    // Stored with microsecond precision
    let reminder_time = whole_second + Duration::microseconds(123_456);
    assert_eq!(res.reminder.reminder_time, reminder_time);

    let reminders = sdk
        .reminder
        .get_many(PageInput::default())
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(reminders[0].reminder_time, reminder_time);
}

#[actix_web::test]
async fn test_rejects_invalid_reminders() {
    let (_, sdk, _) = spawn_app().await;

    assert_bad_client_data(
        sdk.reminder
            .create(reminder_input("Too soon", Duration::seconds(30)))
            .await,
        "Reminder time must be at least 1 minute ahead",
    );
    assert_bad_client_data(
        sdk.reminder
            .create(reminder_input("Too late", -Duration::minutes(5)))
            .await,
        "Reminder time must be in the future",
    );

    let text = vec!["word"; 51].join(" ");
    assert_bad_client_data(
        sdk.reminder
            .create(reminder_input(&text, Duration::minutes(2)))
            .await,
        "Reminder text must be within 50 words",
    );

    let mut input = reminder_input("Walk the dog", Duration::minutes(2));
    input.reminder_type = "Chores".into();
    assert_bad_client_data(sdk.reminder.create(input).await, "Invalid reminder type");
}

#[actix_web::test]
async fn test_paginates_reminders_in_insertion_order() {
    let (_, sdk, _) = spawn_app().await;
    for i in 0..15 {
        sdk.reminder
            .create(reminder_input(
                &format!("Reminder number {}", i),
                Duration::minutes(10),
            ))
            .await
            .expect("Expected to create reminder");
    }

    let reminders = sdk
        .reminder
        .get_many(PageInput {
            skip: Some(0),
            limit: Some(10),
        })
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(reminders.len(), 10);
    for (i, reminder) in reminders.iter().enumerate() {
        assert_eq!(reminder.reminder_text, format!("Reminder number {}", i));
    }

    let reminders = sdk
        .reminder
        .get_many(PageInput {
            skip: Some(10),
            limit: None,
        })
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(reminders.len(), 5);
    assert_eq!(reminders[0].reminder_text, "Reminder number 10");
}

#[actix_web::test]
async fn test_routes_without_trailing_slash() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/reminders", address))
        .send()
        .await
        .expect("Expected request to be sent");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let res = client
        .post(format!("{}/sos", address))
        .header("content-type", "application/json")
        .body("{\"user_id\": 1}")
        .send()
        .await
        .expect("Expected request to be sent");
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}
