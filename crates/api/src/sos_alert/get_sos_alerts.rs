use crate::{error::CareError, shared::pagination::page_query};
use actix_web::{web, HttpResponse};
use caresignal_api_structs::get_sos_alerts::*;
use caresignal_infra::CareContext;
use tracing::error;

pub async fn get_sos_alerts_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let query = page_query(query_params.skip, query_params.limit, &ctx.config);

    let alerts = ctx.repos.sos_alerts.find_many(query).await.map_err(|e| {
        error!("Unable to list sos alerts: {:?}", e);
        CareError::InternalError
    })?;
    Ok(HttpResponse::Ok().json(APIResponse::new(alerts)))
}
