use crossterm::event::{KeyCode, KeyModifiers};
use grcview::config::Config;
use grcview::keymap::{Action, KeyBinding, KeymapPreset};
use grcview::session::User;
use grcview::styles::ThemeType;
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' replaces 'q' for Quit, 'w' replaces 'k' for MoveUp
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let action = |code| loaded.keymap.get_action(code, KeyModifiers::NONE);
    assert_eq!(action(KeyCode::Char('x')), Some(Action::Quit));
    assert_eq!(action(KeyCode::Char('w')), Some(Action::MoveUp));

    // Preset bindings for overridden actions are shadowed
    assert_eq!(action(KeyCode::Char('q')), None);
    assert_eq!(action(KeyCode::Char('k')), None);

    // Untouched vim bindings still work
    assert_eq!(action(KeyCode::Char('j')), Some(Action::MoveDown));
}

#[test]
fn test_config_round_trip_keeps_user_and_api_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        api_base_url: "https://grc.example.com".to_string(),
        request_timeout_secs: 5,
        default_title: Some("ESG".to_string()),
        theme: ThemeType::Light,
        user: Some(User::new("42", "Germany")),
        ..Config::default()
    };
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.api_base_url, "https://grc.example.com");
    assert_eq!(loaded.request_timeout_secs, 5);
    assert_eq!(loaded.default_title.as_deref(), Some("ESG"));
    assert_eq!(loaded.theme, ThemeType::Light);
    assert_eq!(loaded.user, Some(User::new("42", "Germany")));
}

#[test]
fn test_hand_written_config_with_string_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
api_base_url = "http://localhost:9000"

[user]
id = "7"

[user.profile]
country = "Kenya"

[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "ctrl+o"
action = "confirm"
"#,
    )
    .unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.api_base_url, "http://localhost:9000");
    assert_eq!(loaded.request_timeout_secs, 30);
    assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(loaded.user.as_ref().map(|u| u.id.as_str()), Some("7"));
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('o'), KeyModifiers::CONTROL),
        Some(Action::Confirm)
    );
    // Enter is the preset's Confirm key and is shadowed by the override
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
        None
    );
}
