//! Asset loading from an on-disk asset directory.
//!
//! Assets are looked up relative to a root directory chosen at launch. Nothing here is
//! required for the simulation to run: callers treat a missing asset as "draw nothing" or
//! "play nothing".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::Sound;
pub use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    BirdImage,
    TopPipeImage,
    BottomPipeImage,
    BackgroundImage,
    Font,
    SoundFile(Sound),
    Music,
}

impl Asset {
    /// Path of the asset, relative to the asset root.
    pub fn path(&self) -> &'static str {
        use Asset::*;
        match self {
            BirdImage => "images/bird.png",
            TopPipeImage => "images/toppipe.png",
            BottomPipeImage => "images/bottompipe.png",
            BackgroundImage => "images/background.png",
            Font => "font/PixelifySans.ttf",
            SoundFile(Sound::Flap) => "sound/flap.mp3",
            SoundFile(Sound::Hit) => "sound/hit.mp3",
            SoundFile(Sound::Point) => "sound/point.mp3",
            SoundFile(Sound::Die) => "sound/die.mp3",
            Music => "sound/bgm.mp3",
        }
    }
}

/// The directory all assets are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot(PathBuf);

impl AssetRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Full path of `asset` under this root.
    pub fn resolve(&self, asset: Asset) -> PathBuf {
        self.0.join(asset.path())
    }

    /// Reads the raw bytes of an asset.
    ///
    /// A missing file is reported as [`AssetError::NotFound`] so callers can tell an absent
    /// optional asset apart from a real I/O failure.
    pub fn get_bytes(&self, asset: Asset) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(asset);
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path.display().to_string()),
            _ => AssetError::Io(e),
        })
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self::new("assets")
    }
}
