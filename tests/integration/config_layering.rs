//! Configuration layering: defaults, file, then environment overrides.

use crate::integration::test_utils::with_env_var;
use restree::config::GatewayConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_override_wins_over_file_layer() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("restree.toml");
    fs::write(&config_path, "[serialization]\nmax_depth = 3\n").unwrap();

    with_env_var("RESTREE_SERIALIZATION__MAX_DEPTH", "5", || {
        let config = GatewayConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.serialization.max_depth, 5);
    });

    // without the override the file layer applies again
    let config = GatewayConfig::load(Some(&config_path)).unwrap();
    assert_eq!(config.serialization.max_depth, 3);
}

#[test]
fn test_env_override_wins_over_defaults_without_file() {
    with_env_var("RESTREE_SERIALIZATION__MAX_DEPTH", "7", || {
        let config = GatewayConfig::load(None).unwrap();
        assert_eq!(config.serialization.max_depth, 7);
    });
}

#[test]
fn test_env_override_reaches_logging_section() {
    with_env_var("RESTREE_LOGGING__LEVEL", "trace", || {
        let config = GatewayConfig::load(None).unwrap();
        assert_eq!(config.logging.level, "trace");
    });
}
