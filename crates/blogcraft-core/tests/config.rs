use blogcraft_core::{ComposerConfig, ConfigError, DEFAULT_WORDS_PER_MINUTE, SlugPolicy};

#[test]
fn test_defaults() {
    let config = ComposerConfig::default();
    assert_eq!(config.words_per_minute, DEFAULT_WORDS_PER_MINUTE);
    assert_eq!(config.slug_policy, SlugPolicy::AlwaysFollowTitle);
    assert!(!config.preview.escape_html);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config = ComposerConfig::from_json_str(
        r#"{ "slug_policy": "follow_until_edited", "preview": { "escape_html": true } }"#,
    )
    .unwrap();
    assert_eq!(config.words_per_minute, DEFAULT_WORDS_PER_MINUTE);
    assert_eq!(config.slug_policy, SlugPolicy::FollowUntilEdited);
    assert!(config.preview.escape_html);

    assert_eq!(ComposerConfig::from_json_str("{}").unwrap(), ComposerConfig::default());
}

#[test]
fn test_bad_json_is_a_parse_error() {
    let err = ComposerConfig::from_json_str(r#"{ "slug_policy": "sometimes" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = ComposerConfig::from_path("/definitely/not/here/blogcraft.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("blogcraft-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "words_per_minute": 250 }"#).unwrap();

    let config = ComposerConfig::from_path(&path).unwrap();
    assert_eq!(config.words_per_minute, 250);

    std::fs::remove_file(&path).unwrap();
}
