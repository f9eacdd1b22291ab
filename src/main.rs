#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use flappy::app::App;
use flappy::config::LaunchOptions;
use flappy::constants::LOOP_TIME;
use flappy::platform;
use tracing::info;

/// The main entry point of the application.
///
/// This function initializes logging, SDL, the window and the game state, and then enters
/// the main game loop.
pub fn main() {
    platform::init_logging().expect("Could not initialize logging");

    let options = LaunchOptions::from_env();
    let mut app = App::new(options).expect("Could not create app");

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    while app.run() {}
}
