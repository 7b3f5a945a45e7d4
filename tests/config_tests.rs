//! Integration tests for configuration management

use survey_hub::config::{Config, ConfigKey, ConfigOverrides};
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
[logging]
level = "info"
file = "/tmp/hub.log"
verbose = true

[paths]
site_dir = "./public"
export_dir = "./exports"
"#;

#[test]
fn test_defaults_name_every_directory() {
    let config = Config::from_defaults();

    for key in ConfigKey::ALL {
        if key != ConfigKey::File && key != ConfigKey::Verbose {
            assert!(!config.value(key).is_empty(), "{key} has no default");
        }
        assert!(!config.value(key).contains("$SURVEY_HUB"), "{key} not expanded");
    }
}

#[test]
fn test_every_key_reads_back_from_toml() {
    let config = Config::from_toml(FULL_CONFIG).unwrap();
    let expected = ["info", "/tmp/hub.log", "true", "./public", "./exports"];

    for (key, want) in ConfigKey::ALL.into_iter().zip(expected) {
        assert_eq!(config.value(key), want, "{key}");
        assert_eq!(config.get(key.name()).as_deref(), Some(want));
    }
}

#[test]
fn test_missing_tables_use_empty_values() {
    let config = Config::from_toml("[logging]\nlevel = \"error\"\n").unwrap();

    assert_eq!(config.logging.level, "error");
    assert!(!config.logging.verbose);
    assert!(config.paths.site_dir.is_empty());
    assert!(config.paths.export_dir.is_empty());
}

#[test]
fn test_hub_dir_variable_expands_in_paths() {
    let config = Config::from_toml(
        "[paths]\nsite_dir = \"$SURVEY_HUB/site\"\nexport_dir = \"$SURVEY_HUB/exports\"\n",
    )
    .unwrap();
    let hub = Config::get_surveyhub_dir();

    assert_eq!(config.paths.site_dir, hub.join("site").to_string_lossy());
    assert_eq!(config.paths.export_dir, hub.join("exports").to_string_lossy());
}

#[test]
fn test_key_names_accept_both_spellings() {
    assert_eq!("site-dir".parse::<ConfigKey>(), Ok(ConfigKey::SiteDir));
    assert_eq!("export_dir".parse::<ConfigKey>(), Ok(ConfigKey::ExportDir));
    assert!("database".parse::<ConfigKey>().is_err());

    let mut config = Config::from_defaults();
    config.set("export-dir", "/srv/exports").unwrap();
    assert_eq!(config.get("export_dir").as_deref(), Some("/srv/exports"));
}

#[test]
fn test_set_validates_values() {
    let mut config = Config::from_defaults();

    config.set("level", "WARN").unwrap();
    assert_eq!(config.logging.level, "warn");
    assert!(config.set("level", "loud").is_err());
    assert_eq!(config.logging.level, "warn");

    config.set("verbose", "true").unwrap();
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "sometimes").is_err());

    let err = config.set("site", "/srv").unwrap_err();
    assert_eq!(err, "Unknown config key: 'site'");
    assert!(config.get("site").is_none());
}

#[test]
fn test_unset_restores_default_site_dir() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("site_dir", "/var/www/hub").unwrap();
    config.unset("site-dir", &defaults).unwrap();

    assert_eq!(config.paths.site_dir, defaults.paths.site_dir);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_saved_toml_parses_back() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("dconfig.toml");

    let mut config = Config::from_toml(FULL_CONFIG).unwrap();
    config.set("site_dir", "/srv/hub").unwrap();
    std::fs::write(&file, toml::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = Config::from_toml(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(loaded.paths.site_dir, "/srv/hub");
    assert_eq!(loaded.paths.export_dir, "./exports");
}

#[test]
fn test_overrides_touch_only_given_values() {
    let mut config = Config::from_toml(FULL_CONFIG).unwrap();

    config.apply_overrides(&ConfigOverrides {
        site_dir: Some("./preview".to_string()),
        verbose: Some(false),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.paths.site_dir, "./preview");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.export_dir, "./exports");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_merge_fills_only_empty_settings() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml("[paths]\nexport_dir = \"./mine\"\n").unwrap();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.export_dir, "./mine");
    assert_eq!(config.paths.site_dir, defaults.paths.site_dir);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_display_groups_keys_by_table() {
    let shown = Config::from_toml(FULL_CONFIG).unwrap().to_string();

    let logging = shown.find("[logging]").unwrap();
    let paths = shown.find("[paths]").unwrap();
    assert!(logging < paths);
    assert!(shown.contains("  verbose = true\n"));
    assert!(shown[paths..].contains("  site_dir = \"./public\""));
}

#[test]
fn test_config_file_lives_in_hub_dir() {
    let path = Config::get_config_file_path();

    assert_eq!(path.parent(), Some(Config::get_surveyhub_dir().as_path()));
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name == "config.toml" || name == "dconfig.toml");
}
