//! Desktop platform glue: frame pacing, logging setup and randomness.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::error::PlatformError;
use crate::formatter::TickFormatter;

/// Sleeps out the rest of a frame.
///
/// Spin-sleeping is accurate but burns a core, so it is only used while the window has focus.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter, which is `debug` in debug builds and `info` otherwise.
pub fn init_logging() -> Result<(), PlatformError> {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(TickFormatter))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).map_err(|e| PlatformError::LoggingInit(e.to_string()))
}

/// A fast generator for pipe placement, seeded from the OS-backed thread generator.
pub fn rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}
