//! Launch options.
//!
//! Gameplay constants are fixed at compile time (see [`crate::constants`]); only the
//! environment the game runs in is configurable.

use std::env;
use std::path::PathBuf;

use crate::asset::AssetRoot;

/// Environment variable naming the asset directory.
pub const ASSETS_ENV: &str = "FLAPPY_ASSETS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Directory images, sounds and the font are loaded from.
    pub assets: AssetRoot,
    /// Start with all audio muted.
    pub muted: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            assets: AssetRoot::default(),
            muted: false,
        }
    }
}

impl LaunchOptions {
    /// Reads options from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::parse(env::args().skip(1), env::var_os(ASSETS_ENV).map(PathBuf::from))
    }

    /// Parses command line arguments (without the program name).
    ///
    /// `--assets <dir>` takes precedence over `env_assets`. Unknown arguments are logged and ignored.
    pub fn parse<I>(args: I, env_assets: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = LaunchOptions::default();
        if let Some(dir) = env_assets {
            options.assets = AssetRoot::new(dir);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mute" | "-m" => options.muted = true,
                "--assets" | "-a" => match args.next() {
                    Some(dir) => options.assets = AssetRoot::new(dir),
                    None => tracing::warn!("Missing directory after {arg}"),
                },
                other => tracing::warn!(argument = other, "Ignoring unknown argument"),
            }
        }

        options
    }
}
