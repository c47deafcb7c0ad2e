// Config loading and validation tests

use clustermon::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"
"#;

const VALID_CONFIG_WITH_LISTING: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[listing]
ignore_early_buckets = false
include_trailing_partial = true
max_items = 500
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn test_config_listing_defaults_when_omitted() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("valid");
    assert!(config.listing.ignore_early_buckets);
    assert!(!config.listing.include_trailing_partial);
    assert_eq!(config.listing.max_items, 10_000);
}

#[test]
fn test_config_loads_with_listing_section() {
    let config = AppConfig::load_from_str(VALID_CONFIG_WITH_LISTING).expect("valid");
    assert!(!config.listing.ignore_early_buckets);
    assert!(config.listing.include_trailing_partial);
    assert_eq!(config.listing.max_items, 500);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_max_items_zero() {
    let bad = VALID_CONFIG_WITH_LISTING.replace("max_items = 500", "max_items = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_items"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
}
