use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, setup_with_secret};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("TN_AUTH_JWT_SECRET");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_eq!(config.database.path, crate::DEFAULT_DATABASE_FILENAME);
    assert_that!(config.quota.free_note_limit, eq(3));
    assert_that!(config.auth.token_ttl_secs, eq(3600));
    assert_that!(config.auth.leeway_secs, eq(0));
    assert!(config.auth.jwt_secret.is_none());
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("dir");
    let _dir = EnvGuard::set("TN_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [auth]
            jwt_secret = "0123456789abcdef0123456789abcdef"
            leeway_secs = 5

            [quota]
            free_note_limit = 10

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.auth.leeway_secs, eq(5));
    assert_that!(config.quota.free_note_limit, eq(10));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[quota]\nfree_note_limit = 10\n",
    )
    .unwrap();
    let _limit = EnvGuard::set("TN_QUOTA_FREE_NOTE_LIMIT", "7");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.quota.free_note_limit, eq(7));
}

#[test]
#[serial]
fn given_unparsable_env_value_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("TN_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("TOML parse error"));
}

// =========================================================================
// Derived paths
// =========================================================================

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _db = EnvGuard::set("TN_DATABASE_PATH", "tenants.db");

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("tenants.db"));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("TN_LOG_FILE", "server.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("server.log")));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
#[serial]
fn given_defaults_and_secret_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_with_secret();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_with_secret();
    let _db = EnvGuard::set("TN_DATABASE_PATH", "/etc/notes.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("database.path"));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_with_secret();
    let _db = EnvGuard::set("TN_DATABASE_PATH", "../escape.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_huge_free_note_limit_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_with_secret();
    let _limit = EnvGuard::set("TN_QUOTA_FREE_NOTE_LIMIT", "1000000");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("free_note_limit"));
}

#[test]
#[serial]
fn given_zero_free_note_limit_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_with_secret();
    let _limit = EnvGuard::set("TN_QUOTA_FREE_NOTE_LIMIT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
