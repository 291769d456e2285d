//! Parsing helpers for inbound HTTP payloads.
//!
//! These reject values that cannot even be placed on the account aggregate
//! (an unknown gender, a role of the wrong kind). Everything else is left to
//! the domain validator so it can report per-field errors.

use serde_json::json;

use crate::domain::{Error, Gender, Role, RoleKind};

/// Boundary error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidGender,
    InvalidPrivilegeLevel,
    InvalidCapability,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidGender => "invalid_gender",
            Self::InvalidPrivilegeLevel => "invalid_privilege_level",
            Self::InvalidCapability => "invalid_capability",
        }
    }
}

/// Typed wrapper for payload field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a single-letter gender form value.
pub(crate) fn parse_gender(value: &str, field: FieldName) -> Result<Gender, Error> {
    value.parse().map_err(|_| {
        field_error(
            field,
            ErrorCode::InvalidGender,
            format!("{} must be M or F", field.as_str()),
            value,
        )
    })
}

/// Parse a role name that must carry the privilege level prefix.
pub(crate) fn parse_privilege_level(value: &str, field: FieldName) -> Result<Role, Error> {
    match Role::new(value) {
        Ok(role) if role.kind() == RoleKind::PrivilegeLevel => Ok(role),
        _ => Err(field_error(
            field,
            ErrorCode::InvalidPrivilegeLevel,
            format!("{} must name a privilege level role", field.as_str()),
            value,
        )),
    }
}

/// Parse a list of role names that must all carry the capability prefix.
pub(crate) fn parse_capabilities(values: &[String], field: FieldName) -> Result<Vec<Role>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match Role::new(value.as_str()) {
            Ok(role) if role.kind() == RoleKind::Capability => Ok(role),
            _ => Err(Error::invalid_request(format!(
                "{} must contain capability roles only",
                field.as_str()
            ))
            .with_details(json!({
                "field": field.as_str(),
                "index": index,
                "value": value,
                "code": ErrorCode::InvalidCapability.as_str(),
            }))),
        })
        .collect()
}
