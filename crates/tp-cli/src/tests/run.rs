use crate::{CliError, Commands, ensure_configured, run};

use tp_config::{Config, ConnectionProfile, TenantRegistry};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[tokio::test]
async fn given_resolve_when_run_then_tenant_for_hostname() {
    let config = Config::default();
    let registry = TenantRegistry::default();

    let value = run(Commands::Resolve, "2.upscalingmedia.live", &config, &registry)
        .await
        .unwrap();

    assert_eq!(value["tenant"], "database2");
    assert_eq!(value["display_name"], "database-2");
}

#[tokio::test]
async fn given_tenants_when_run_then_every_tenant_listed() {
    let config = Config::default();
    let registry = TenantRegistry::default();

    let value = run(Commands::Tenants, "localhost", &config, &registry)
        .await
        .unwrap();

    assert_that!(value["tenants"].as_array().map(Vec::len), eq(Some(3)));
}

#[tokio::test]
async fn given_invalid_signup_when_run_then_rejected_before_any_request() {
    let config = Config::default();
    let registry = TenantRegistry::default();
    let command = Commands::Signup {
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
        accept_terms: false,
    };

    let result = run(command, "localhost", &config, &registry).await;

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Please enter a valid email address"));
    assert!(message.contains("Passwords do not match"));
    assert!(message.contains("Please accept the Terms & Conditions"));
}

#[test]
fn given_valid_profile_when_ensure_configured_then_ok() {
    let profile = ConnectionProfile::new("https://abc.supabase.co", "key", "Acme");

    assert_that!(ensure_configured("acme", &profile), ok(anything()));
}

#[test]
fn given_placeholder_profile_when_ensure_configured_then_fields_named() {
    let profile = ConnectionProfile::new("your-url", "your-anon-key", "Acme");

    let result = ensure_configured("acme", &profile);

    assert_that!(result, err(anything()));
    match result {
        Err(CliError::TenantNotConfigured { tenant, fields }) => {
            assert_that!(tenant.as_str(), eq("acme"));
            assert_that!(fields.as_str(), eq("endpoint, access_key"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
