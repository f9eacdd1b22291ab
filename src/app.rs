use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info, trace};

use crate::config::LaunchOptions;
use crate::constants::{board::CANVAS_SIZE, LOOP_TIME, SCALE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    last_tick: Instant,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or propagates
    /// errors from `Game::new()` during game state setup.
    pub fn new(options: LaunchOptions) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        // Fonts borrow the context, and they live as long as the game.
        let ttf_context = Box::leak(Box::new(sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?));
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let width = (CANVAS_SIZE.x as f32 * SCALE).round() as u32;
        let height = (CANVAS_SIZE.y as f32 * SCALE).round() as u32;
        trace!(width, height, scale = SCALE, "Creating game window");
        let window = video_subsystem
            .window("Flappy Bird", width, height)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Creating hardware-accelerated canvas");
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!(
            logical_width = CANVAS_SIZE.x,
            logical_height = CANVAS_SIZE.y,
            "Setting canvas logical size"
        );
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, ttf_context, texture_creator, event_pump, &options)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop with consistent timing and optional sleep.
    ///
    /// Calculates delta time since the last frame, runs game logic via `game.tick()`,
    /// and sleeps out whatever is left of `LOOP_TIME`. The sleep is cheaper when the
    /// window is not focused.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        formatter::increment_tick();

        if self.game.tick(dt) {
            info!(score = %self.game.score(), "Exit requested");
            return false;
        }

        let time = LOOP_TIME.saturating_sub(start.elapsed());
        if time != Duration::ZERO {
            platform::sleep(time, self.game.focused());
        }

        true
    }
}
