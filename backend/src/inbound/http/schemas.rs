//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their serialised shape and register under the domain
//! type's name, so generated documents read as if the domain types were
//! annotated directly.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A downstream dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "account is invalid")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details. Account rejections carry
    /// `{"code": "account_invalid", "fieldErrors": [...]}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorSchema {
    /// Form field the error is attached to.
    #[schema(example = "username")]
    field: String,
    /// Stable error code.
    #[schema(example = "duplicate_username")]
    code: String,
    /// Message suitable for display next to the field.
    #[schema(example = "This username is already in use.")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::EncounterProviderSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EncounterProviderSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EncounterProviderSummarySchema {
    #[schema(example = "Dr Jones")]
    provider: String,
    #[schema(example = "Clinician")]
    encounter_role: Option<String>,
}

/// OpenAPI schema for [`crate::domain::EncounterSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EncounterSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EncounterSummarySchema {
    #[schema(example = 7)]
    encounter_id: u32,
    location: Option<String>,
    encounter_type: Option<String>,
    #[schema(example = "01 Mar 2024 14:05")]
    encounter_datetime: String,
    #[schema(example = "01/03/2024")]
    encounter_date: String,
    #[schema(example = "02:05 PM")]
    encounter_time: String,
    encounter_providers: Vec<EncounterProviderSummarySchema>,
}

/// OpenAPI schema for [`crate::domain::VisitDetails`].
///
/// Encounters exclude voided ones and are ordered newest first.
#[derive(ToSchema)]
#[schema(as = crate::domain::VisitDetails, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VisitDetailsSchema {
    #[schema(example = "01 Mar 2024 09:30")]
    start_datetime: String,
    /// Absent while the visit is active.
    stop_datetime: Option<String>,
    location: Option<String>,
    encounters: Vec<EncounterSummarySchema>,
}
