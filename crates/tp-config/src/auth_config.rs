use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_REMEMBER_FILE,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_MIN_PASSWORD_LENGTH, MAX_REQUEST_TIMEOUT_SECS,
    MIN_MIN_PASSWORD_LENGTH, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Settings for talking to the hosted auth backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Timeout applied to every backend request
    pub request_timeout_secs: u64,
    /// Shortest password accepted by the login and signup forms
    pub min_password_length: usize,
    /// Remembered-email file, relative to the config dir
    pub remember_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            remember_file: String::from(DEFAULT_REMEMBER_FILE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        let remember_path = std::path::Path::new(&self.remember_file);
        if self.remember_file.is_empty()
            || remember_path.is_absolute()
            || self.remember_file.contains("..")
        {
            return Err(ConfigError::auth(
                "auth.remember_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
