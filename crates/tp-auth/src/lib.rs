//! Client side of the hosted auth backend: form input checks, the HTTP
//! client for sign in / sign up / connection probes, and the remembered-email
//! convenience file.

pub mod auth_client;
pub mod auth_session;
pub mod connection_check;
pub mod credential_error;
pub mod credentials;
pub mod error;
pub mod remembered_email_store;
pub mod sign_up_outcome;

pub use auth_client::AuthClient;
pub use auth_session::{AuthSession, AuthUser};
pub use connection_check::ConnectionCheck;
pub use credential_error::{CredentialError, CredentialField};
pub use credentials::{Credentials, LoginForm, SignUpForm, is_valid_email, is_valid_password};
pub use error::{AuthError, Result};
pub use remembered_email_store::{RememberedEmail, RememberedEmailStore};
pub use sign_up_outcome::SignUpOutcome;

#[cfg(test)]
mod tests;

const SIGN_IN_PATH: &str = "/auth/v1/token?grant_type=password";
const SIGN_UP_PATH: &str = "/auth/v1/signup";
const PROBE_PATH: &str = "/rest/v1/users?select=count";

// Subtracted from `expires_in` when computing `AuthSession::expires_at`
const EXPIRY_MARGIN_SECS: i64 = 30;
