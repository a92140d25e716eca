use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, TenantsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub tenants: TenantsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TP_CONFIG_DIR env var, else use ./.tp/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    /// Tenant profile overrides (DATABASE_1_URL etc.) are applied to the
    /// registry, not here.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TP_CONFIG_DIR env var > ./.tp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.tenants.validate()?;

        if !is_contained_relative(&self.logging.dir) {
            return Err(ConfigError::logging(
                "logging.dir must be a relative path and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && !is_contained_relative(file)
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the remembered-email file.
    pub fn remember_file_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.auth.remember_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs access keys).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  auth: timeout={}s, min_password_length={}",
            self.auth.request_timeout_secs, self.auth.min_password_length
        );
        info!(
            "  tenants: {} defined, default '{}'",
            self.tenants.tenants.len(),
            self.tenants.default_tenant
        );
        for tenant in &self.tenants.tenants {
            info!(
                "    {} -> {} [{}] hosts={:?}",
                tenant.key, tenant.profile.display_name, tenant.env_prefix, tenant.hostnames
            );
        }
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("TP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TP_LOG_FILE", &mut self.logging.file);

        // Auth
        Self::apply_env_parse(
            "TP_AUTH_REQUEST_TIMEOUT_SECS",
            &mut self.auth.request_timeout_secs,
        );
        Self::apply_env_parse(
            "TP_AUTH_MIN_PASSWORD_LENGTH",
            &mut self.auth.min_password_length,
        );
        Self::apply_env_string("TP_AUTH_REMEMBER_FILE", &mut self.auth.remember_file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

// Non-empty, relative, no `..`: stays under the config dir once joined
fn is_contained_relative(path: &str) -> bool {
    !path.is_empty() && !Path::new(path).is_absolute() && !path.contains("..")
}
