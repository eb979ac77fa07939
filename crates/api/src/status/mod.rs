use actix_web::{web, HttpResponse};
use caresignal_api_structs::{get_service_health, say_hello};

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(get_service_health::APIResponse {
        message: "Person Engagement App API is running".into(),
    })
}

async fn greet(path_params: web::Path<say_hello::PathParams>) -> HttpResponse {
    HttpResponse::Ok().json(say_hello::APIResponse::new(&path_params.name))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
    cfg.route("/hello/{name}", web::get().to(greet));
}
