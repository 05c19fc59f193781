//! Tests for configuration file loading.

use super::*;
use crate::view_state::DeviceClass;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_folio_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("folio") && path_str.ends_with("config.toml"),
            "Path should contain 'folio' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_folio_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("folio.log"),
        "Default log path should end with 'folio.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/folio/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("folio_test_config.toml");

    let toml_content = r#"
typewriter_interval_ms = 50
submit_latency_ms = 500
success_display_ms = 1000
mobile_breakpoint = 600
tablet_max = 900
reduced_motion = true
content_path = "/tmp/content.json"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.typewriter_interval_ms, Some(50));
    assert_eq!(config.submit_latency_ms, Some(500));
    assert_eq!(config.success_display_ms, Some(1000));
    assert_eq!(config.mobile_breakpoint, Some(600));
    assert_eq!(config.tablet_max, Some(900));
    assert_eq!(config.reduced_motion, Some(true));
    assert_eq!(config.content_path, Some(PathBuf::from("/tmp/content.json")));
    assert_eq!(config.cell_width_px, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("folio_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("folio_test_unknown_key.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write config");

    let result = load_config_file(&config_path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        typewriter_interval_ms: Some(40),
        tablet_max: Some(1200),
        reduced_motion: Some(true),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.typewriter_interval_ms, 40);
    assert_eq!(resolved.tablet_max, 1200);
    assert!(resolved.reduced_motion);
    assert_eq!(resolved.submit_latency_ms, 1_500, "Unset fields keep defaults");
}

#[test]
fn merge_config_never_yields_zero_cell_metrics() {
    let config_file = ConfigFile {
        cell_width_px: Some(0),
        cell_height_px: Some(0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.cell_width_px, 1);
    assert_eq!(resolved.cell_height_px, 1);
}

#[test]
fn merge_config_raises_inverted_tablet_max() {
    let config_file = ConfigFile {
        mobile_breakpoint: Some(1200),
        tablet_max: Some(1000),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.mobile_breakpoint, 1200);
    assert_eq!(resolved.tablet_max, 1200);
    let breakpoints = resolved.breakpoints();
    assert_eq!(DeviceClass::classify(1100.0, breakpoints), DeviceClass::Mobile);
    assert_eq!(DeviceClass::classify(1200.0, breakpoints), DeviceClass::Tablet);
    assert_eq!(DeviceClass::classify(1300.0, breakpoints), DeviceClass::Desktop);
}

#[test]
fn merge_config_keeps_ordered_breakpoints() {
    let config_file = ConfigFile {
        mobile_breakpoint: Some(600),
        tablet_max: Some(900),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.mobile_breakpoint, 600);
    assert_eq!(resolved.tablet_max, 900);
}

#[test]
fn resolved_defaults_match_site_timings() {
    let config = ResolvedConfig::default();
    assert_eq!(config.typewriter_interval(), Duration::from_millis(100));
    assert_eq!(config.submit_latency(), Duration::from_millis(1_500));
    assert_eq!(config.success_display(), Duration::from_millis(3_000));
    assert_eq!(config.breakpoints(), Breakpoints::default());
}

#[test]
#[serial(folio_env)]
fn env_override_enables_reduced_motion() {
    env::set_var("FOLIO_REDUCED_MOTION", "true");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var("FOLIO_REDUCED_MOTION");

    assert!(config.reduced_motion);
}

#[test]
#[serial(folio_env)]
fn env_override_ignores_garbage() {
    env::set_var("FOLIO_REDUCED_MOTION", "maybe");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var("FOLIO_REDUCED_MOTION");

    assert!(!config.reduced_motion);
}

#[test]
#[serial(folio_env)]
fn folio_config_env_var_is_used_when_no_explicit_path() {
    let config_path = env::temp_dir().join("folio_test_env_config.toml");
    fs::write(&config_path, "submit_latency_ms = 42\n").expect("Failed to write config");

    env::set_var("FOLIO_CONFIG", &config_path);
    let result = load_config_with_precedence(None);
    env::remove_var("FOLIO_CONFIG");

    let config = result.expect("should load").expect("should exist");
    assert_eq!(config.submit_latency_ms, Some(42));

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(folio_env)]
fn explicit_path_beats_env_var() {
    env::set_var("FOLIO_CONFIG", "/nonexistent/env/config.toml");
    let explicit = env::temp_dir().join("folio_test_explicit_config.toml");
    fs::write(&explicit, "tablet_max = 1100\n").expect("Failed to write config");

    let result = load_config_with_precedence(Some(explicit.clone()));
    env::remove_var("FOLIO_CONFIG");

    let config = result.expect("should load").expect("should exist");
    assert_eq!(config.tablet_max, Some(1100));

    fs::remove_file(explicit).ok();
}

#[test]
fn cli_overrides_take_precedence() {
    let base = ResolvedConfig {
        reduced_motion: true,
        content_path: Some(PathBuf::from("/from/file.json")),
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(base, Some(PathBuf::from("/from/cli.json")), Some(false));

    assert_eq!(config.content_path, Some(PathBuf::from("/from/cli.json")));
    assert!(!config.reduced_motion);
}

#[test]
fn cli_without_flags_keeps_values() {
    let base = ResolvedConfig {
        reduced_motion: true,
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(base.clone(), None, None);

    assert_eq!(config, base);
}
