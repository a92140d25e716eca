//! tp-cli library
//!
//! Command dispatch for the `tp` binary. The binary owns startup (config,
//! logger, tenant registry); everything here borrows what it built.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};

use std::time::Duration;

use log::info;
use serde_json::{Value, json};
use tp_auth::{AuthClient, LoginForm, RememberedEmailStore, SignUpForm};
use tp_config::{Config, ConnectionProfile, TenantRegistry};

/// Run `command` for `hostname` and return the JSON to print.
pub async fn run(
    command: Commands,
    hostname: &str,
    config: &Config,
    registry: &TenantRegistry,
) -> CliResult<Value> {
    match command {
        Commands::Resolve => Ok(output::resolution(
            hostname,
            &registry.resolve_tenant(hostname),
        )),

        Commands::Tenants => Ok(output::tenants(registry)),

        Commands::Check => {
            let client = client_for(hostname, config, registry)?;
            let check = client.check_connection().await?;
            Ok(output::connection(&client.display_name, &check))
        }

        Commands::Login {
            email,
            password,
            remember,
            forget,
        } => {
            let store = RememberedEmailStore::new(config.remember_file_path()?);
            let email = match email {
                Some(email) => email,
                None => match store.load()? {
                    Some(remembered) => {
                        info!("Using remembered email");
                        remembered.email
                    }
                    None => return Err(CliError::MissingEmail),
                },
            };

            let credentials =
                LoginForm::new(email, password).validate(config.auth.min_password_length)?;
            let client = client_for(hostname, config, registry)?;
            let session = client.sign_in_with_password(&credentials).await?;

            if remember {
                store.save(credentials.email())?;
            } else if forget {
                store.clear()?;
            }

            Ok(output::session(&client.display_name, &session, remember))
        }

        Commands::Signup {
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let form = SignUpForm {
                email,
                password,
                confirm_password,
                accept_terms,
            };
            let credentials = form.validate(config.auth.min_password_length)?;
            let client = client_for(hostname, config, registry)?;
            let outcome = client.sign_up(&credentials).await?;
            Ok(output::sign_up(&client.display_name, &outcome))
        }

        Commands::Forget => {
            let store = RememberedEmailStore::new(config.remember_file_path()?);
            let cleared = store.clear()?;
            Ok(json!({ "cleared": cleared }))
        }
    }
}

/// Client for the tenant `hostname` resolves to. Refuses tenants whose
/// profile still holds placeholders.
fn client_for(
    hostname: &str,
    config: &Config,
    registry: &TenantRegistry,
) -> CliResult<AuthClient> {
    let resolution = registry.resolve_tenant(hostname);
    ensure_configured(resolution.tenant_key, resolution.profile)?;

    let timeout = Duration::from_secs(config.auth.request_timeout_secs);
    Ok(AuthClient::new(resolution.profile, timeout)?)
}

pub(crate) fn ensure_configured(tenant: &str, profile: &ConnectionProfile) -> CliResult<()> {
    if TenantRegistry::validate(profile) {
        return Ok(());
    }

    let fields: Vec<&str> = profile
        .invalid_fields()
        .into_iter()
        .map(|field| field.as_str())
        .collect();
    Err(CliError::TenantNotConfigured {
        tenant: tenant.to_string(),
        fields: fields.join(", "),
    })
}
