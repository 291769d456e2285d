//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account validation and visit details endpoints,
//! the health probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::accounts::{AccountRequest, AccountValidationResponse};
use crate::inbound::http::schemas::{
    EncounterProviderSummarySchema, EncounterSummarySchema, ErrorCodeSchema, ErrorSchema,
    FieldErrorSchema, VisitDetailsSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EMR account and visit API",
        description = "Account form validation and visit details for the patient dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::validate_account,
        crate::inbound::http::visits::get_visit_details,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AccountRequest,
        AccountValidationResponse,
        FieldErrorSchema,
        VisitDetailsSchema,
        EncounterSummarySchema,
        EncounterProviderSummarySchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "accounts", description = "Account form validation"),
        (name = "visits", description = "Visit details for the patient dashboard"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
