//! Service entry-point: loads settings, seeds the in-memory stores and serves
//! the REST API.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use emr::config::{PasswordPolicySettings, ServerSettings};
use emr::inbound::http::health::HealthState;
use emr::outbound::memory::InMemoryDirectory;
use server::{ServerConfig, create_server};

/// Platform accounts present on every installation.
const BUILT_IN_USERS: [(u32, &str); 2] = [(1, "admin"), (2, "daemon")];

fn load_config() -> std::io::Result<ServerConfig> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = args.first().cloned().unwrap_or_else(|| OsString::from("emr"));
    let settings = ServerSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("server settings: {err}")))?;
    // Password rules come from the environment and config file only.
    let password = PasswordPolicySettings::load_from_iter([program])
        .map_err(|err| std::io::Error::other(format!("password policy settings: {err}")))?;
    let rules = password
        .to_rules()
        .map_err(|err| std::io::Error::other(format!("invalid password pattern: {err}")))?;

    let directory = Arc::new(InMemoryDirectory::new());
    for (user_id, username) in BUILT_IN_USERS {
        directory.register_user(user_id, username);
    }
    info!(users = BUILT_IN_USERS.len(), "user directory seeded");

    Ok(ServerConfig::new(settings.bind_addr())
        .with_password_rules(rules)
        .with_directory(directory))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = load_config()?;
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
