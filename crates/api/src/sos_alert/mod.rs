mod create_sos_alert;
mod get_sos_alerts;
mod subscribers;

use actix_web::web;
use create_sos_alert::create_sos_alert_controller;
use get_sos_alerts::get_sos_alerts_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sos", web::post().to(create_sos_alert_controller));
    cfg.route("/sos", web::get().to(get_sos_alerts_controller));
}
