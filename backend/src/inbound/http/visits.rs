//! Visit details fragment endpoint.
//!
//! ```text
//! GET /api/v1/visits/42/details
//! ```

use actix_web::{get, web};
use tracing::{error, warn};

use crate::domain::ports::VisitQueryError;
use crate::domain::{Error, VisitDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, VisitDetailsSchema};
use crate::inbound::http::state::HttpState;

fn map_query_error(err: VisitQueryError) -> Error {
    match err {
        VisitQueryError::Connection { message } => {
            warn!(%message, "visit store unavailable");
            Error::service_unavailable("visit store is unavailable")
        }
        VisitQueryError::Query { message } => {
            error!(%message, "visit query failed");
            Error::internal(format!("visit query failed: {message}"))
        }
    }
}

/// Render the details of one visit with its live encounters, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/visits/{visit_id}/details",
    params(("visit_id" = u32, Path, description = "Visit identifier")),
    responses(
        (status = 200, description = "Visit details", body = VisitDetailsSchema),
        (status = 404, description = "Visit not found", body = ErrorSchema),
        (status = 503, description = "Visit store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["visits"],
    operation_id = "getVisitDetails"
)]
#[get("/visits/{visit_id}/details")]
pub async fn get_visit_details(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<VisitDetails>> {
    let visit_id = path.into_inner();
    let visit = state
        .visits
        .find_visit(visit_id)
        .await
        .map_err(map_query_error)?
        .ok_or_else(|| {
            Error::not_found(format!("visit {visit_id} not found"))
                .with_details(serde_json::json!({ "visitId": visit_id }))
        })?;
    Ok(web::Json(state.visit_details.present(&visit)))
}

#[cfg(test)]
mod tests;
