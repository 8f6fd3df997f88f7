// End-to-end checks of config loading and icon files on disk

use extractor_icons::config::{Color, Config};
use extractor_icons::generate::generate_icons;
use extractor_icons::icon::create_icon;
use std::fs;
use std::path::PathBuf;

fn config_in(dir: PathBuf) -> Config {
    let mut config = Config::default();
    config.output.dir = dir;
    config
}

#[test]
fn test_generates_one_png_per_size() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("icons");
    let config = config_in(out_dir.clone());

    let written = generate_icons(&config).unwrap();

    assert_eq!(
        written,
        vec![
            out_dir.join("icon16.png"),
            out_dir.join("icon48.png"),
            out_dir.join("icon128.png"),
        ]
    );

    for (path, size) in written.iter().zip([16, 48, 128]) {
        let saved = image::open(path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (size, size));

        // PNG is lossless, so the file matches the in-memory render
        let expected = create_icon(size, &config.icons.palette()).unwrap();
        assert_eq!(saved.as_raw(), expected.as_raw(), "{}", path.display());
    }
}

#[test]
fn test_regenerating_overwrites_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path().to_path_buf());

    let first = generate_icons(&config).unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = generate_icons(&config).unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_custom_file_name_and_sizes() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config_in(tmp.path().to_path_buf());
    config.output.file_name = "{size}/logo.png".to_string();
    config.icons.sizes = vec![32];

    let written = generate_icons(&config).unwrap();
    assert_eq!(written, vec![tmp.path().join("32").join("logo.png")]);
    assert!(written[0].exists());
}

#[test]
fn test_invalid_config_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("icons");
    let mut config = config_in(out_dir.clone());
    config.icons.sizes = vec![48, 0];

    assert!(generate_icons(&config).is_err());
    assert!(!out_dir.exists());
}

#[test]
fn test_config_save_and_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("icons.yaml");

    let mut config = Config::default();
    config.icons.sizes = vec![16, 32];
    config.icons.primary = Color([10, 20, 30, 255]);
    config.save(&path).unwrap();

    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(Config::load(None).unwrap(), Config::default());
}

#[test]
fn test_load_missing_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&tmp.path().join("absent.yaml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
