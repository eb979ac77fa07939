use crate::{error::CareError, shared::pagination::page_query};
use actix_web::{web, HttpResponse};
use caresignal_api_structs::get_reminders::*;
use caresignal_infra::CareContext;
use tracing::error;

pub async fn get_reminders_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let query = page_query(query_params.skip, query_params.limit, &ctx.config);

    let reminders = ctx.repos.reminders.find_many(query).await.map_err(|e| {
        error!("Unable to list reminders: {:?}", e);
        CareError::InternalError
    })?;
    Ok(HttpResponse::Ok().json(APIResponse::new(reminders)))
}
