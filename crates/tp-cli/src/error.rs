use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tp_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] tp_auth::AuthError),

    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Tenant '{tenant}' is not properly configured (unset: {fields})")]
    TenantNotConfigured { tenant: String, fields: String },

    #[error("No email given and none remembered; pass --email")]
    MissingEmail,
}

pub type Result<T> = std::result::Result<T, CliError>;
