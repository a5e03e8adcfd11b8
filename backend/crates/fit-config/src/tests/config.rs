use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use log::LevelFilter;
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
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_CONNECTIONS)
    );
    assert_that!(config.logging.file, none());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".fit");
    let _guard = EnvGuard::set("FIT_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [database]
              path = "data/fitness.db"
              max_connections = 12

              [logging]
              level = "debug"
              file = "fit.log"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path, eq("data/fitness.db"));
    assert_that!(config.database.max_connections, eq(12));
    assert_that!(config.database.busy_timeout_secs, eq(crate::DEFAULT_BUSY_TIMEOUT_SECS));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.file, some(eq("fit.log")));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[database]\nmax_connections = 3",
    )
    .unwrap();
    let _max = EnvGuard::set("FIT_DATABASE_MAX_CONNECTIONS", "9");
    let _level = EnvGuard::set("FIT_LOG_LEVEL", "warn");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.max_connections, eq(9));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_toml_value_kept() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[database]\nbusy_timeout_secs = 7",
    )
    .unwrap();
    let _busy = EnvGuard::set("FIT_DATABASE_BUSY_TIMEOUT_SECS", "soon");

    let config = Config::load().unwrap();

    assert_that!(config.database.busy_timeout_secs, eq(7));
}

#[test]
#[serial]
fn given_config_dir_when_resolving_paths_then_relative_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("FIT_LOG_FILE", "fit.log");
    let _path = EnvGuard::remove("FIT_DATABASE_PATH");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database_path().unwrap(),
        eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME))
    );
    assert_that!(
        config.log_file_path().unwrap(),
        some(eq(&temp.path().join("log").join("fit.log")))
    );
}

// =========================================================================
// Error Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_empty_log_file_name_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("FIT_LOG_FILE", "  ");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}
