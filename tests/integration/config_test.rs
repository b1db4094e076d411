use check_cmk_services::core::config::{
    Config, ConnectionOverrides, ConnectionSettings, Credentials,
};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "site_url": "https://monitor.example.com/mysite",
            "user": "automation",
            "secret": "s3cret",
            "insecure": true,
            "timeout_secs": 20
        }"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.user.as_deref(), Some("automation"));
    assert_eq!(config.insecure, Some(true));

    let settings = ConnectionSettings::resolve(config, ConnectionOverrides::default()).unwrap();
    assert_eq!(
        settings.site_url.as_str(),
        "https://monitor.example.com/mysite/"
    );
    assert_eq!(
        settings.credentials,
        Credentials::Automation {
            user: "automation".into(),
            secret: "s3cret".into(),
        }
    );
    assert!(settings.insecure);
    assert_eq!(settings.timeout, Duration::from_secs(20));
}

#[test]
fn test_command_line_token_overrides_file_pair() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"site_url": "https://monitor.example.com/mysite", "user": "automation", "secret": "s3cret"}"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    let overrides = ConnectionOverrides {
        token: Some("cli-token".into()),
        ..Default::default()
    };
    let settings = ConnectionSettings::resolve(config, overrides).unwrap();
    assert_eq!(settings.credentials, Credentials::Token("cli-token".into()));
}

#[test]
fn test_empty_config_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(config.site_url.is_none());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ site_url = ").unwrap();
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_site_url_required() {
    let overrides = ConnectionOverrides {
        token: Some("t".into()),
        ..Default::default()
    };
    assert!(ConnectionSettings::resolve(Config::default(), overrides).is_err());
}
