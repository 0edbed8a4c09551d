mod common;

use common::temp_config;
use memory_match::config::{Config, ConfigError, ConfigStore};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let path = PathBuf::from("/nonexistent/memory-match/config.toml");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.game.grid_size, 4);
    assert_eq!(config.game.min_moves, 10);
    assert_eq!(config.game.theme, "numbers");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(config.ui.bell);
    assert!(!config.ui.dark_mode);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = temp_config(
        r#"
[game]
grid_size = 6
min_moves = 30
theme = "letters"

[ui]
tick_rate_ms = 50
dark_mode = true
bell = false

[logging]
level = "debug"
file = "/tmp/memory-match.log"

[[themes]]
name = "letters"
symbols = ["A", "B", "C"]
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.game.grid_size, 6);
    assert_eq!(config.game.min_moves, 30);
    assert_eq!(config.game.theme, "letters");
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert!(config.ui.dark_mode);
    assert!(!config.ui.bell);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some("/tmp/memory-match.log")
    );

    let registry = config.theme_registry();
    assert_eq!(registry.get("letters").unwrap().len(), 3);
    assert!(registry.get("numbers").is_ok());
    assert_eq!(config.session_config().theme, "letters");
}

#[test]
fn partial_sections_keep_defaults() {
    let (_dir, path) = temp_config("[game]\ngrid_size = 8\n");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.game.grid_size, 8);
    assert_eq!(config.game.min_moves, 10);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn custom_theme_overrides_builtin() {
    let (_dir, path) = temp_config(
        r#"
[game]
theme = "fruits"

[[themes]]
name = "fruits"
symbols = ["apple", "pear"]
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let registry = config.theme_registry();

    assert_eq!(registry.get("fruits").unwrap().len(), 2);
}

#[test]
fn parse_error_names_the_file() {
    let (_dir, path) = temp_config("[game\ngrid_size = ");
    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn grid_size_out_of_range_is_rejected() {
    let (_dir, path) = temp_config("[game]\ngrid_size = 11\n");
    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_move_budget_is_rejected() {
    let (_dir, path) = temp_config("[game]\nmin_moves = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn unknown_theme_is_rejected() {
    let (_dir, path) = temp_config("[game]\ntheme = \"planets\"\n");
    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("planets"));
}

#[test]
fn empty_custom_theme_is_rejected() {
    let (_dir, path) = temp_config("[[themes]]\nname = \"blank\"\nsymbols = []\n");
    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("blank"));
}

#[test]
fn duplicate_custom_theme_is_rejected() {
    let (_dir, path) = temp_config(
        r#"
[[themes]]
name = "twice"
symbols = ["x"]

[[themes]]
name = "twice"
symbols = ["y"]
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn default_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("memory-match/config.toml"));
}

#[test]
fn store_updates_are_shared_between_clones() {
    let (_dir, path) = temp_config("[game]\ngrid_size = 6\n");
    let store = ConfigStore::new(Config::load_from(&path).unwrap());
    let other = store.clone();

    store.update(|config| config.ui.dark_mode = true);

    assert!(other.get().ui.dark_mode);
    assert_eq!(other.get().game.grid_size, 6);
}
