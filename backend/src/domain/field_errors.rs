//! Ordered per-field error sink filled by the account validator.

use std::fmt;

use serde::Serialize;

/// Account form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountField {
    /// `givenName`
    GivenName,
    /// `familyName`
    FamilyName,
    /// `gender`
    Gender,
    /// `username`
    Username,
    /// `password`
    Password,
    /// `confirmPassword`
    ConfirmPassword,
    /// `privilegeLevel`
    PrivilegeLevel,
    /// `capabilities`
    Capabilities,
    /// `provider`
    Provider,
    /// `providerIdentifier`
    ProviderIdentifier,
}

impl AccountField {
    /// Form field name as used in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GivenName => "givenName",
            Self::FamilyName => "familyName",
            Self::Gender => "gender",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::PrivilegeLevel => "privilegeLevel",
            Self::Capabilities => "capabilities",
            Self::Provider => "provider",
            Self::ProviderIdentifier => "providerIdentifier",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable error codes attached to account fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountErrorCode {
    /// Mandatory value missing or blank.
    Required,
    /// Username has the wrong length or characters.
    InvalidUsername,
    /// Username already belongs to another user.
    DuplicateUsername,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Password rejected by the password policy.
    PasswordPolicy,
    /// User without a provider has no capabilities.
    CapabilityRequired,
    /// Account is neither a user nor a provider.
    UserOrProviderRequired,
    /// Provider identifier already belongs to another provider.
    DuplicateProviderIdentifier,
}

impl AccountErrorCode {
    /// Snake-case code as serialised on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidUsername => "invalid_username",
            Self::DuplicateUsername => "duplicate_username",
            Self::PasswordMismatch => "password_mismatch",
            Self::PasswordPolicy => "password_policy",
            Self::CapabilityRequired => "capability_required",
            Self::UserOrProviderRequired => "user_or_provider_required",
            Self::DuplicateProviderIdentifier => "duplicate_provider_identifier",
        }
    }

    /// Default English message shown next to the field.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Required => "This field is required.",
            Self::InvalidUsername => {
                "Username must be 2 to 50 characters of letters, digits, '.', '-' or '_'."
            }
            Self::DuplicateUsername => "This username is already in use.",
            Self::PasswordMismatch => "Passwords do not match.",
            Self::PasswordPolicy => "Password does not meet the password policy.",
            Self::CapabilityRequired => "Select at least one capability.",
            Self::UserOrProviderRequired => {
                "An account must be a user, a provider, or both."
            }
            Self::DuplicateProviderIdentifier => "This provider identifier is already in use.",
        }
    }
}

impl fmt::Display for AccountErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: AccountField,
    code: AccountErrorCode,
    message: String,
}

impl FieldError {
    /// Build an error carrying the code's default message.
    pub fn new(field: AccountField, code: AccountErrorCode) -> Self {
        Self::with_message(field, code, code.default_message())
    }

    /// Build an error with an explicit message.
    pub fn with_message(
        field: AccountField,
        code: AccountErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// Field the error is attached to.
    pub fn field(&self) -> AccountField {
        self.field
    }

    /// Stable error code.
    pub fn code(&self) -> AccountErrorCode {
        self.code
    }

    /// Display message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Field errors in the order they were recorded.
///
/// # Examples
/// ```
/// use emr::domain::{AccountErrorCode, AccountField, FieldErrors};
///
/// let mut errors = FieldErrors::default();
/// errors.reject(AccountField::Username, AccountErrorCode::Required);
/// assert!(errors.has_field_errors(AccountField::Username));
/// assert_eq!(errors.error_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record `code` against `field` with the default message.
    pub fn reject(&mut self, field: AccountField, code: AccountErrorCode) {
        self.push(FieldError::new(field, code));
    }

    /// Record a fully built error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Whether anything was recorded.
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.0.len()
    }

    /// Whether any error was recorded against `field`.
    pub fn has_field_errors(&self, field: AccountField) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// Errors recorded against `field`, in insertion order.
    pub fn field_errors(&self, field: AccountField) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |error| error.field == field)
    }

    /// Codes recorded against `field`, in insertion order.
    pub fn codes_for(&self, field: AccountField) -> Vec<AccountErrorCode> {
        self.field_errors(field).map(FieldError::code).collect()
    }

    /// All errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn empty_sink_reports_no_errors() {
        let errors = FieldErrors::default();
        assert!(!errors.has_errors());
        assert!(!errors.has_field_errors(AccountField::GivenName));
    }

    #[rstest]
    fn preserves_insertion_order_per_field() {
        let mut errors = FieldErrors::default();
        errors.reject(AccountField::Password, AccountErrorCode::Required);
        errors.reject(AccountField::Username, AccountErrorCode::Required);
        errors.reject(AccountField::Password, AccountErrorCode::PasswordMismatch);

        assert_eq!(errors.error_count(), 3);
        assert_eq!(
            errors.codes_for(AccountField::Password),
            vec![AccountErrorCode::Required, AccountErrorCode::PasswordMismatch]
        );
        let fields: Vec<AccountField> = errors.iter().map(FieldError::field).collect();
        assert_eq!(
            fields,
            vec![
                AccountField::Password,
                AccountField::Username,
                AccountField::Password
            ]
        );
    }

    #[rstest]
    fn serialises_as_a_list_of_wire_names() {
        let mut errors = FieldErrors::default();
        errors.push(FieldError::with_message(
            AccountField::ProviderIdentifier,
            AccountErrorCode::DuplicateProviderIdentifier,
            "taken",
        ));
        let value = serde_json::to_value(&errors).expect("serialise errors");
        assert_eq!(
            value,
            json!([{
                "field": "providerIdentifier",
                "code": "duplicate_provider_identifier",
                "message": "taken"
            }])
        );
    }

    #[rstest]
    #[case(AccountField::ConfirmPassword, "confirmPassword")]
    #[case(AccountField::PrivilegeLevel, "privilegeLevel")]
    fn display_matches_serde_name(#[case] field: AccountField, #[case] expected: &str) {
        assert_eq!(field.to_string(), expected);
        assert_eq!(
            serde_json::to_value(field).expect("serialise field"),
            json!(expected)
        );
    }
}
