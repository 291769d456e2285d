//! Account form validation endpoint.
//!
//! ```text
//! POST /api/v1/accounts/validate
//! {"givenName":"Grace","familyName":"Hopper","gender":"F","username":"ghopper",
//!  "password":"Passw0rd!","confirmPassword":"Passw0rd!",
//!  "privilegeLevel":"Privilege Level: Full",
//!  "capabilities":["Application Role: Registration"]}
//! ```
//!
//! Any user field present in the body (even empty) marks the account as
//! becoming a user, mirroring how the form binds onto the aggregate.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{Account, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_capabilities, parse_gender, parse_privilege_level,
};

const GENDER: FieldName = FieldName::new("gender");
const PRIVILEGE_LEVEL: FieldName = FieldName::new("privilegeLevel");
const CAPABILITIES: FieldName = FieldName::new("capabilities");

/// Account form submission.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRequest {
    #[schema(example = "Grace")]
    /// Given name.
    pub given_name: Option<String>,
    #[schema(example = "Hopper")]
    /// Family name.
    pub family_name: Option<String>,
    /// `M` or `F`.
    #[schema(example = "F")]
    pub gender: Option<String>,
    /// Persisted user id when editing an existing user.
    pub user_id: Option<u32>,
    /// Platform-assigned system id of an existing user.
    pub system_id: Option<String>,
    #[schema(example = "ghopper")]
    /// Login name.
    pub username: Option<String>,
    #[schema(format = Password)]
    /// New password.
    pub password: Option<String>,
    #[schema(format = Password)]
    /// Repeat of `password`.
    pub confirm_password: Option<String>,
    #[schema(example = "Privilege Level: Full")]
    /// Privilege level role name.
    pub privilege_level: Option<String>,
    /// Capability role names.
    pub capabilities: Option<Vec<String>>,
    /// Whether the account is also a provider.
    pub provider_enabled: bool,
    /// Persisted provider id when editing an existing provider.
    pub provider_id: Option<u32>,
    /// Provider identifier to check for uniqueness.
    pub provider_identifier: Option<String>,
}

impl TryFrom<AccountRequest> for Account {
    type Error = Error;

    fn try_from(request: AccountRequest) -> Result<Self, Self::Error> {
        let AccountRequest {
            given_name,
            family_name,
            gender,
            user_id,
            system_id,
            username,
            password,
            confirm_password,
            privilege_level,
            capabilities,
            provider_enabled,
            provider_id,
            provider_identifier,
        } = request;

        let mut account = Account::new();
        if let Some(given_name) = given_name {
            account.set_given_name(given_name);
        }
        if let Some(family_name) = family_name {
            account.set_family_name(family_name);
        }
        if let Some(gender) = gender.filter(|raw| !raw.trim().is_empty()) {
            account.set_gender(parse_gender(&gender, GENDER)?);
        }
        if let Some(username) = username {
            account.set_username(username);
        }
        if let Some(user_id) = user_id {
            account.user_mut().set_user_id(user_id);
        }
        if let Some(system_id) = system_id {
            account.user_mut().set_system_id(system_id);
        }
        if let Some(privilege_level) = privilege_level {
            account.user_mut();
            if !privilege_level.trim().is_empty() {
                account.set_privilege_level(parse_privilege_level(
                    &privilege_level,
                    PRIVILEGE_LEVEL,
                )?);
            }
        }
        if let Some(capabilities) = capabilities {
            account.set_capabilities(parse_capabilities(&capabilities, CAPABILITIES)?);
        }
        if let Some(password) = password {
            account.set_password(password);
        }
        if let Some(confirm_password) = confirm_password {
            account.set_confirm_password(confirm_password);
        }
        if provider_enabled {
            account.set_provider_enabled(true);
        }
        if let Some(provider_id) = provider_id {
            account.provider_mut().set_provider_id(provider_id);
        }
        if let Some(identifier) = provider_identifier {
            account.set_provider_identifier(identifier);
        }
        Ok(account)
    }
}

/// Body returned when the account passes validation.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AccountValidationResponse {
    /// Always `true`; invalid accounts get a `400`.
    pub valid: bool,
}

/// Validate an account form without saving it.
///
/// Field failures come back as one `400` whose `details.fieldErrors` lists
/// every rejected field in the order the rules ran.
#[utoipa::path(
    post,
    path = "/api/v1/accounts/validate",
    request_body = AccountRequest,
    responses(
        (status = 200, description = "Account is valid", body = AccountValidationResponse),
        (status = 400, description = "Account is invalid or malformed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "validateAccount"
)]
#[post("/accounts/validate")]
pub async fn validate_account(
    state: web::Data<HttpState>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<web::Json<AccountValidationResponse>> {
    let account = Account::try_from(payload.into_inner())?;
    let errors = state.accounts.check(&account);
    if !errors.has_errors() {
        return Ok(web::Json(AccountValidationResponse { valid: true }));
    }

    info!(rejected = errors.error_count(), "account form rejected");
    Err(Error::invalid_request("account is invalid").with_details(json!({
        "code": "account_invalid",
        "fieldErrors": errors,
    })))
}
