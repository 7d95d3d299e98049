use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_config_writes_sample() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("webhooks.toml");

    init_config(&config_path).expect("init should succeed");

    let loaded = AppConfig::load(&config_path).expect("sample should load");
    assert_eq!(loaded, AppConfig::sample());
}

#[test]
fn test_init_config_refuses_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("webhooks.toml");
    fs::write(&config_path, "webhooks = []").expect("Failed to write file");

    let result = init_config(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("already exists"));
    } else {
        panic!("Expected Config error");
    }
    // The existing file is left alone
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "webhooks = []");
}
