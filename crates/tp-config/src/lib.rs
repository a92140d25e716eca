mod auth_config;
mod config;
mod connection_profile;
mod error;
mod log_level;
mod logging_config;
mod override_source;
mod tenant_registry;
mod tenants_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use connection_profile::{ConnectionProfile, ProfileField, ProfileOverride};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use override_source::{OverrideSource, ProcessEnv};
pub use tenant_registry::{OverrideOutcome, Resolution, TenantRegistry};
pub use tenants_config::{TenantDefinition, TenantsConfig};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "TP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;
const DEFAULT_REMEMBER_FILE: &str = "remembered_email.json";

// Suffixes of the `<PREFIX>_<FIELD>` bulk override keys
const ENDPOINT_SUFFIX: &str = "URL";
const ACCESS_KEY_SUFFIX: &str = "ANON_KEY";
const DISPLAY_NAME_SUFFIX: &str = "NAME";

// Template values shipped in the sample configuration
const ENDPOINT_PLACEHOLDER: &str = "your-url";
const ACCESS_KEY_PLACEHOLDER: &str = "your-anon-key";
const DISPLAY_NAME_PLACEHOLDER: &str = "your-name";
const TEMPLATE_PROJECT_HOSTS: [&str; 2] = [
    "your-project-1-id.supabase.co",
    "your-project-2-id.supabase.co",
];

const DEFAULT_TENANT_KEY: &str = "development";
