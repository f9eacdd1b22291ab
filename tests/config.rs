use std::path::{Path, PathBuf};

use flappy::asset::{Asset, AssetError, AssetRoot};
use flappy::audio::Sound;
use flappy::config::LaunchOptions;
use speculoos::prelude::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let options = LaunchOptions::parse(args(&[]), None);
    assert_that(&options).is_equal_to(LaunchOptions::default());
    assert_that(&options.assets.path()).is_equal_to(Path::new("assets"));
    assert_that(&options.muted).is_false();
}

#[test]
fn test_mute_flags() {
    assert_that(&LaunchOptions::parse(args(&["--mute"]), None).muted).is_true();
    assert_that(&LaunchOptions::parse(args(&["-m"]), None).muted).is_true();
}

#[test]
fn test_assets_flag_overrides_env() {
    let options = LaunchOptions::parse(args(&["--assets", "/opt/flappy"]), Some(PathBuf::from("/env/assets")));
    assert_that(&options.assets.path()).is_equal_to(Path::new("/opt/flappy"));
}

#[test]
fn test_env_assets_used_without_flag() {
    let options = LaunchOptions::parse(args(&["-m"]), Some(PathBuf::from("/env/assets")));
    assert_that(&options.assets.path()).is_equal_to(Path::new("/env/assets"));
    assert_that(&options.muted).is_true();
}

#[test]
fn test_unknown_and_dangling_arguments_are_ignored() {
    let options = LaunchOptions::parse(args(&["--fullscreen", "-a"]), None);
    assert_that(&options).is_equal_to(LaunchOptions::default());
}

#[test]
fn test_asset_paths_resolve_under_root() {
    let root = AssetRoot::new("/data");
    assert_that(&root.resolve(Asset::BirdImage)).is_equal_to(PathBuf::from("/data/images/bird.png"));
    assert_that(&root.resolve(Asset::SoundFile(Sound::Point))).is_equal_to(PathBuf::from("/data/sound/point.mp3"));
}

#[test]
fn test_missing_asset_is_not_found() {
    let root = AssetRoot::new("/definitely/not/a/real/asset/dir");
    let result = root.get_bytes(Asset::Font);
    assert_that(&matches!(result, Err(AssetError::NotFound(_)))).is_true();
}

#[test]
fn test_asset_bytes_are_read() {
    let dir = std::env::temp_dir().join(format!("flappy-assets-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("images")).unwrap();
    std::fs::write(dir.join("images/bird.png"), b"not really a png").unwrap();

    let bytes = AssetRoot::new(&dir).get_bytes(Asset::BirdImage).unwrap();
    assert_that(&bytes).is_equal_to(b"not really a png".to_vec());

    std::fs::remove_dir_all(&dir).unwrap();
}
