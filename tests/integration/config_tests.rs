use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use finddups::config::Config;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_config_layering_file_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "follow_symlinks = true\n").unwrap();

    let config: Config = Config::figment_from(Some(&path)).extract().unwrap();

    assert!(config.follow_symlinks);
    assert!(config.extensions.is_none());
}

#[test]
fn test_config_env_over_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("config.toml", "follow_symlinks = false")?;
        jail.set_env("FINDDUPS_FOLLOW_SYMLINKS", "true");

        let config: Config = Config::figment_from(Some(Path::new("config.toml"))).extract()?;

        assert!(config.follow_symlinks);
        Ok(())
    });
}

#[test]
fn test_config_unknown_keys_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "theme = \"dark\"\nfollow_symlinks = true\n").unwrap();

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .extract()
        .unwrap();

    assert!(config.follow_symlinks);
}

#[test]
fn test_config_load_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finddups.toml");
    fs::write(&path, "extensions = [\"txt\"]\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(config.extensions, Some(vec!["txt".to_string()]));
}
