use super::*;

#[test]
fn defaults_live_under_home() {
    let config = Config::for_home("/home/ann");
    assert_eq!(
        config.favorites_path,
        PathBuf::from("/home/ann/lib/trellis/files/favorites")
    );
    assert_eq!(config.log_dir, PathBuf::from("/home/ann/lib/trellis/logs"));
    assert_eq!(config.home_dir(), "/home/ann/");
    assert!(!config.open_command.is_empty());
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config, Config::for_home(dir.path()));
}

#[test]
fn settings_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{ "open_command": "my-open", "favorites_path": "favs.txt" }"#,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.open_command, "my-open");
    assert_eq!(config.favorites_path, dir.path().join("favs.txt"));
    assert_eq!(config.log_dir, Config::for_home(dir.path()).log_dir);
}

#[test]
fn blank_open_command_keeps_default() {
    let config = Config::for_home("/h").with_settings(Settings {
        open_command: Some("  ".to_string()),
        ..Settings::default()
    });
    assert_eq!(config.open_command, Config::for_home("/h").open_command);
}

#[test]
fn malformed_settings_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Settings { .. }));
    assert!(err.to_string().contains("settings.json"));
}
