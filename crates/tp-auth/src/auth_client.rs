use crate::auth_session::TokenResponse;
use crate::connection_check::parse_content_range_total;
use crate::{
    AuthError, AuthSession, AuthUser, ConnectionCheck, Credentials, PROBE_PATH,
    Result as AuthResult, SIGN_IN_PATH, SIGN_UP_PATH, SignUpOutcome,
};

use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tp_config::ConnectionProfile;

// Fields the backend uses for human-readable error text, in preference order
const ERROR_MESSAGE_FIELDS: [&str; 4] = ["error_description", "msg", "message", "error"];

/// HTTP client for one tenant's hosted auth backend
pub struct AuthClient {
    pub endpoint: String,
    pub display_name: String,
    access_key: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl AuthClient {
    /// Create a client for `profile`.
    ///
    /// `endpoint` and `access_key` are used verbatim; the access key goes out
    /// as both the `apikey` header and the bearer token.
    pub fn new(profile: &ConnectionProfile, timeout: Duration) -> AuthResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: profile.endpoint.trim_end_matches('/').to_string(),
            display_name: profile.display_name.clone(),
            access_key: profile.access_key.clone(),
            client,
        })
    }

    /// Build a request carrying the tenant's access key
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.access_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_key))
    }

    /// Execute request and turn non-2xx answers into `AuthError::Api`
    async fn execute(&self, req: RequestBuilder) -> AuthResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::api(status.as_u16(), error_message(status, &text)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Email/password sign in
    pub async fn sign_in_with_password(&self, credentials: &Credentials) -> AuthResult<AuthSession> {
        debug!(
            "Signing in {} on {} ({})",
            credentials.email(),
            self.display_name,
            self.endpoint
        );

        let body = PasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let req = self.request(Method::POST, SIGN_IN_PATH).json(&body);
        let value = self.execute(req).await?;

        let token: TokenResponse = serde_json::from_value(value)?;
        if !token.token_type.eq_ignore_ascii_case("bearer") {
            warn!("Unexpected token_type: {}", token.token_type);
        }

        info!("Signed in {} on {}", credentials.email(), self.display_name);
        Ok(token.into_session(Utc::now()))
    }

    /// Register a new account
    pub async fn sign_up(&self, credentials: &Credentials) -> AuthResult<SignUpOutcome> {
        debug!(
            "Signing up {} on {} ({})",
            credentials.email(),
            self.display_name,
            self.endpoint
        );

        let body = PasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let req = self.request(Method::POST, SIGN_UP_PATH).json(&body);
        let value = self.execute(req).await?;

        let outcome = sign_up_outcome(value)?;
        match outcome {
            SignUpOutcome::SignedIn(_) => {
                info!("Signed up {} on {}", credentials.email(), self.display_name)
            }
            SignUpOutcome::ConfirmationRequired(_) => info!(
                "Signed up {} on {} (confirmation pending)",
                credentials.email(),
                self.display_name
            ),
        }
        Ok(outcome)
    }

    /// Probe the tenant's table API with a head-only count of `users`.
    ///
    /// Transport failures are errors; an answering backend that refuses the
    /// probe is reported as `ConnectionCheck::Rejected`.
    pub async fn check_connection(&self) -> AuthResult<ConnectionCheck> {
        let req = self
            .request(Method::HEAD, PROBE_PATH)
            .header("Prefer", "count=exact");
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            let row_count = response
                .headers()
                .get(CONTENT_RANGE)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_content_range_total);
            info!("Connection to {} OK", self.display_name);
            Ok(ConnectionCheck::Connected { row_count })
        } else {
            warn!("Connection to {} rejected: {}", self.display_name, status);
            Ok(ConnectionCheck::Rejected {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            })
        }
    }
}

/// Auto-confirmed signups return a token response; otherwise the backend
/// returns the user, either bare or under `user`.
pub(crate) fn sign_up_outcome(value: Value) -> AuthResult<SignUpOutcome> {
    if value.get("access_token").is_some() {
        let token: TokenResponse = serde_json::from_value(value)?;
        return Ok(SignUpOutcome::SignedIn(token.into_session(Utc::now())));
    }

    let user_value = match value {
        Value::Object(mut map) if map.get("user").is_some_and(Value::is_object) => {
            map.remove("user").unwrap_or_default()
        }
        other => other,
    };
    let user: AuthUser = serde_json::from_value(user_value)?;

    Ok(SignUpOutcome::ConfirmationRequired(user))
}

pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ERROR_MESSAGE_FIELDS
            .iter()
            .find_map(|field| value.get(*field).and_then(Value::as_str).map(String::from))
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
