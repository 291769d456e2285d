//! Service configuration loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `EMR_*`
//! environment variables and command-line flags, in that order.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::PasswordRules;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMR")]
pub struct ServerSettings {
    /// Interface to bind. Defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }
}

/// Password strength rules applied by the default password policy.
///
/// Unset switches fall back to the rule being enforced.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMR_PASSWORD")]
pub struct PasswordPolicySettings {
    /// Minimum password length in characters.
    #[ortho_config(default = 8)]
    pub min_length: usize,
    /// Require both upper and lower case letters.
    pub require_upper_and_lower_case: Option<bool>,
    /// Require at least one digit.
    pub require_digit: Option<bool>,
    /// Require at least one non-digit character.
    pub require_non_digit: Option<bool>,
    /// Reject passwords equal to the username or system id.
    pub forbid_username_or_system_id: Option<bool>,
    /// Extra regular expression every password must match.
    pub custom_regex: Option<String>,
}

impl PasswordPolicySettings {
    /// Build the domain rules, compiling the custom pattern if one is set.
    ///
    /// # Errors
    /// Returns [`regex::Error`] when `custom_regex` does not compile.
    pub fn to_rules(&self) -> Result<PasswordRules, regex::Error> {
        let mut rules = PasswordRules::default();
        rules.min_length = self.min_length;
        rules.require_upper_and_lower_case = self.require_upper_and_lower_case.unwrap_or(true);
        rules.require_digit = self.require_digit.unwrap_or(true);
        rules.require_non_digit = self.require_non_digit.unwrap_or(true);
        rules.forbid_username_or_system_id = self.forbid_username_or_system_id.unwrap_or(true);
        match self.custom_regex.as_deref() {
            Some(pattern) => rules.with_pattern(pattern),
            None => Ok(rules),
        }
    }
}
