//! JSON shapes printed by the `tp` subcommands. Access keys and tokens never
//! appear in full.

use tp_auth::{AuthSession, ConnectionCheck, SignUpOutcome};
use tp_config::{ConnectionProfile, Resolution, TenantRegistry};

use serde_json::{Value, json};

// Characters of an access key kept when redacting
const KEY_PREFIX_CHARS: usize = 6;

/// `eyJhbG***`, or `***` when the key is too short to show a prefix of.
pub fn redact_key(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }
    if key.chars().count() <= KEY_PREFIX_CHARS * 2 {
        return "***".to_string();
    }
    let prefix: String = key.chars().take(KEY_PREFIX_CHARS).collect();
    format!("{prefix}***")
}

fn invalid_fields(profile: &ConnectionProfile) -> Vec<&'static str> {
    profile
        .invalid_fields()
        .into_iter()
        .map(|field| field.as_str())
        .collect()
}

pub fn resolution(hostname: &str, resolution: &Resolution<'_>) -> Value {
    let profile = resolution.profile;
    json!({
        "hostname": hostname,
        "tenant": resolution.tenant_key,
        "matched": resolution.matched,
        "display_name": profile.display_name,
        "endpoint": profile.endpoint,
        "valid": TenantRegistry::validate(profile),
        "invalid_fields": invalid_fields(profile),
    })
}

pub fn tenants(registry: &TenantRegistry) -> Value {
    let tenants: Vec<Value> = registry
        .list_all()
        .into_iter()
        .map(|(key, profile)| {
            json!({
                "key": key,
                "hostnames": registry.hostnames(&key).unwrap_or_default(),
                "env_prefix": registry.env_prefix(&key).unwrap_or_default(),
                "display_name": profile.display_name,
                "endpoint": profile.endpoint,
                "access_key": redact_key(&profile.access_key),
                "valid": profile.is_valid(),
                "invalid_fields": invalid_fields(&profile),
            })
        })
        .collect();

    json!({
        "default_tenant": registry.default_tenant(),
        "tenants": tenants,
    })
}

pub fn connection(tenant: &str, check: &ConnectionCheck) -> Value {
    match check {
        ConnectionCheck::Connected { row_count } => json!({
            "tenant": tenant,
            "connected": true,
            "row_count": row_count,
        }),
        ConnectionCheck::Rejected { status, reason } => json!({
            "tenant": tenant,
            "connected": false,
            "status": status,
            "reason": reason,
        }),
    }
}

pub fn session(tenant: &str, session: &AuthSession, remembered: bool) -> Value {
    json!({
        "tenant": tenant,
        "status": "signed_in",
        "user_id": session.user.as_ref().map(|u| u.id.as_str()),
        "email": session.user.as_ref().and_then(|u| u.email.as_deref()),
        "token_type": session.token_type,
        "expires_at": session.expires_at.to_rfc3339(),
        "email_remembered": remembered,
    })
}

pub fn sign_up(tenant: &str, outcome: &SignUpOutcome) -> Value {
    let user = outcome.user();
    let mut value = json!({
        "tenant": tenant,
        "user_id": user.map(|u| u.id.as_str()),
        "email": user.and_then(|u| u.email.as_deref()),
    });

    match outcome {
        SignUpOutcome::SignedIn(session) => {
            value["status"] = json!("signed_in");
            value["expires_at"] = json!(session.expires_at.to_rfc3339());
        }
        SignUpOutcome::ConfirmationRequired(_) => {
            value["status"] = json!("confirmation_required");
        }
    }

    value
}
