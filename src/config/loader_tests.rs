//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_idxview_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("idxview") && path_str.ends_with("config.toml"),
        "Path should contain 'idxview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_idxview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("idxview.log"),
        "Default log path should end with 'idxview.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("idxview_test_config.toml");

    let toml_content = r#"
server_url = "http://10.0.0.2:9000"
page_size = 50
max_visible_pages = 7
request_timeout_secs = 5
card_width = 40
log_file_path = "/tmp/idxview-test.log"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.server_url.as_deref(), Some("http://10.0.0.2:9000"));
    assert_eq!(config.page_size, Some(50));
    assert_eq!(config.max_visible_pages, Some(7));
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(config.card_width, Some(40));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/idxview-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("idxview_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "monokai""#);
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn partial_config_leaves_other_fields_unset() {
    let config: ConfigFile = toml::from_str("page_size = 20").unwrap();
    assert_eq!(config.page_size, Some(20));
    assert_eq!(config.server_url, None);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.server_url, "http://127.0.0.1:8080");
    assert_eq!(config.page_size, 100);
    assert_eq!(config.max_visible_pages, 5);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.card_width, 36);
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        server_url: Some("http://example:1".to_string()),
        max_visible_pages: Some(9),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.server_url, "http://example:1");
    assert_eq!(resolved.max_visible_pages, 9);
    assert_eq!(resolved.page_size, ResolvedConfig::default().page_size);
}

#[test]
fn merge_config_clamps_zero_counts() {
    let file = ConfigFile {
        page_size: Some(0),
        max_visible_pages: Some(0),
        card_width: Some(0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.page_size, 1);
    assert_eq!(resolved.max_visible_pages, 1);
    assert_eq!(resolved.card_width, 1);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(idxview_server_url)]
fn apply_env_overrides_respects_server_url() {
    let _guard = EnvGuard::new(ENV_SERVER_URL);
    env::set_var(ENV_SERVER_URL, "http://from-env:8080");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.server_url, "http://from-env:8080");
    assert_eq!(result.page_size, ResolvedConfig::default().page_size);
}

#[test]
#[serial(idxview_server_url)]
fn apply_env_overrides_ignores_blank_server_url() {
    let _guard = EnvGuard::new(ENV_SERVER_URL);
    env::set_var(ENV_SERVER_URL, "  ");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(idxview_server_url)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ENV_SERVER_URL);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(idxview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("idxview_explicit.toml");
    fs::write(&explicit_path, "page_size = 11").expect("Failed to write explicit config");
    let env_path = temp_dir.join("idxview_env.toml");
    fs::write(&env_path, "page_size = 22").expect("Failed to write env config");
    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(config.page_size, Some(11), "explicit path beats IDXVIEW_CONFIG");

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(idxview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    let env_path = env::temp_dir().join("idxview_env_only.toml");
    fs::write(&env_path, "page_size = 33").expect("Failed to write env config");
    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.page_size, Some(33));
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(idxview_config)]
fn load_config_with_precedence_env_var_to_missing_file_is_none() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    env::set_var(ENV_CONFIG, "/nonexistent/idxview.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

#[test]
fn apply_cli_overrides_replaces_server_and_page_size() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some("http://cli:1".to_string()),
        Some(25),
    );
    assert_eq!(result.server_url, "http://cli:1");
    assert_eq!(result.page_size, 25);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(idxview_server_url)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ENV_SERVER_URL);
    let file = ConfigFile {
        server_url: Some("http://file:1".to_string()),
        page_size: Some(10),
        ..ConfigFile::default()
    };
    env::set_var(ENV_SERVER_URL, "http://env:2");

    let merged = merge_config(Some(file));
    assert_eq!(merged.server_url, "http://file:1");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.server_url, "http://env:2");
    let final_config = apply_cli_overrides(with_env, Some("http://cli:3".to_string()), None);

    assert_eq!(final_config.server_url, "http://cli:3");
    assert_eq!(final_config.page_size, 10);
}
