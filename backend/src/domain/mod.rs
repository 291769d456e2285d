//! Domain primitives, aggregates, and services.
//!
//! Purpose: keep account validation and visit presentation free of transport
//! and persistence concerns. External lookups are reached through the traits
//! in [`ports`]; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Error: transport-agnostic error payload.
//! - Account, AccountUser, ProviderLink, Role, Gender: the account aggregate.
//! - FieldErrors, AccountField, AccountErrorCode: the validation sink.
//! - AccountValidator: the cross-field account rule set.
//! - DefaultPasswordPolicy: platform password strength rules.
//! - Visit, VisitDetails, VisitDetailsPresenter: visit view-model assembly.

pub mod account;
pub mod account_validator;
pub mod error;
pub mod field_errors;
pub mod password_policy;
pub mod ports;
pub mod trace_id;
pub mod visit;
pub mod visit_details;

pub use self::account::{
    Account, AccountUser, CAPABILITY_PREFIX, FULL_PRIVILEGE_LEVEL, Gender, GenderParseError,
    PRIVILEGE_LEVEL_PREFIX, ProviderLink, Role, RoleKind, RoleValidationError,
};
pub use self::account_validator::{AccountValidator, USERNAME_MAX, USERNAME_MIN};
pub use self::error::{Error, ErrorCode};
pub use self::field_errors::{AccountErrorCode, AccountField, FieldError, FieldErrors};
pub use self::password_policy::{DefaultPasswordPolicy, PasswordRules};
pub use self::trace_id::TraceId;
pub use self::visit::{Encounter, EncounterProvider, EncounterType, Location, Visit};
pub use self::visit_details::{
    DefaultUiFormatter, EncounterProviderSummary, EncounterSummary, VisitDetails,
    VisitDetailsPresenter,
};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
