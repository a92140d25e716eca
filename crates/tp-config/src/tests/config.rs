use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.auth.request_timeout_secs,
        eq(crate::DEFAULT_REQUEST_TIMEOUT_SECS)
    );
    assert_that!(
        config.auth.min_password_length,
        eq(crate::DEFAULT_MIN_PASSWORD_LENGTH)
    );
    assert_that!(config.logging.file, none());
    assert_that!(config.tenants.default_tenant.as_str(), eq("development"));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("tp");
    let _guard = EnvGuard::set("TP_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [logging]
              level = "debug"
              colored = false

              [auth]
              request_timeout_secs = 10
              min_password_length = 8
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.auth.request_timeout_secs, eq(10));
    assert_that!(config.auth.min_password_length, eq(8));
}

#[test]
#[serial]
fn given_toml_with_tenants_when_load_then_tenants_replaced() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [tenants]
              default_tenant = "staging"

              [[tenants.tenant]]
              key = "acme"
              hostnames = ["acme.example.com"]
              env_prefix = "ACME"
              endpoint = "https://acme.supabase.co"
              access_key = "acme-key"
              display_name = "Acme"

              [[tenants.tenant]]
              key = "staging"
              env_prefix = "STAGING"
              endpoint = "https://staging.supabase.co"
              access_key = "staging-key"
              display_name = "Staging"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    let validated = config.validate();
    assert_that!(validated, ok(anything()));
    assert_that!(config.tenants.tenants.len(), eq(2));
    assert_that!(config.tenants.tenants[0].key.as_str(), eq("acme"));
    assert_that!(
        config.tenants.tenants[0].profile.endpoint.as_str(),
        eq("https://acme.supabase.co")
    );
    assert_that!(config.tenants.tenants[1].hostnames.len(), eq(0));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[auth]\nrequest_timeout_secs = 10",
    )
    .unwrap();
    let _timeout = EnvGuard::set("TP_AUTH_REQUEST_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.request_timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("TP_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("TP_LOG_COLORED", "false");
    let _file = EnvGuard::set("TP_LOG_FILE", "tp.log");
    let _min = EnvGuard::set("TP_AUTH_MIN_PASSWORD_LENGTH", "12");
    let _remember = EnvGuard::set("TP_AUTH_REMEMBER_FILE", "email.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("tp.log")));
    assert_that!(config.auth.min_password_length, eq(12));
    assert_that!(config.auth.remember_file.as_str(), eq("email.json"));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_value_untouched() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("TP_AUTH_REQUEST_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.auth.request_timeout_secs,
        eq(crate::DEFAULT_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
#[serial]
fn given_invalid_log_level_when_load_then_defaults_to_info() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("TP_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("TP_LOG_FILE", "tp.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path, some(eq(&temp.path().join("log").join("tp.log"))));
}

#[test]
#[serial]
fn given_defaults_when_remember_file_path_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.remember_file_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("remembered_email.json")));
}

#[test]
#[serial]
fn given_no_config_dir_env_when_config_dir_then_relative_to_cwd() {
    // Given
    let _guard = EnvGuard::remove("TP_CONFIG_DIR");

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir, eq(&std::env::current_dir().unwrap().join(".tp")));
}
