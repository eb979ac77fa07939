mod error;
mod reminder;
mod shared;
mod sos_alert;
mod status;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    middleware::{self, TrailingSlash},
    web, App, HttpServer,
};
use caresignal_infra::CareContext;
use error::CareError;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
    sos_alert::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed bodies and query strings are reported the same way as failed validations
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|e, _| CareError::BadClientData(e.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|e, _| CareError::BadClientData(e.to_string()).into()),
    );
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: CareContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: CareContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let ctx = web::Data::new(context);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
                .wrap(TracingLogger::default())
                .app_data(ctx.clone())
                .configure(configure_extractors)
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
