use crate::EXPIRY_MARGIN_SECS;

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// The user record returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed-in session as handed back by the backend. Not persisted or
/// refreshed here.
#[derive(Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: Option<AuthUser>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    #[serde(default = "default_token_type")]
    pub(crate) token_type: String,
    pub(crate) expires_in: i64,
    #[serde(default)]
    pub(crate) user: Option<AuthUser>,
}

fn default_token_type() -> String {
    String::from("bearer")
}

impl TokenResponse {
    pub(crate) fn into_session(self, now: DateTime<Utc>) -> AuthSession {
        let lifetime = self.expires_in.saturating_sub(EXPIRY_MARGIN_SECS).max(0);
        AuthSession {
            access_token: self.access_token,
            token_type: self.token_type,
            expires_at: now + Duration::seconds(lifetime),
            user: self.user,
        }
    }
}
