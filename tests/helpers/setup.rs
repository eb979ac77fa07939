use caresignal_api::Application;
use caresignal_infra::{CareContext, InMemorySmsProvider};
use caresignal_sdk::CareSignalSDK;
use std::sync::Arc;

pub struct TestApp {
    /// Every SMS the application delivered
    pub sms: Arc<InMemorySmsProvider>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CareSignalSDK, String) {
    let mut ctx = CareContext::create_inmemory();
    ctx.config.port = 0; // Random port
    let sms = Arc::new(InMemorySmsProvider::new());
    ctx.sms = sms.clone();

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { sms };
    let sdk = CareSignalSDK::new(address.clone());
    (app, sdk, address)
}
