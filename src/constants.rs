//! This module contains all the constants used in the game.
//!
//! Every gameplay value here is expressed in board units (one unit per logical pixel) and,
//! for motion, per simulation tick.

use std::time::Duration;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The scale factor for the window.
pub const SCALE: f32 = 1.0;

/// Dimensions of the playfield.
pub mod board {
    use glam::UVec2;

    pub const WIDTH: f32 = 360.0;
    pub const HEIGHT: f32 = 640.0;

    /// The size of the canvas, in pixels.
    pub const CANVAS_SIZE: UVec2 = UVec2::new(WIDTH as u32, HEIGHT as u32);
}

pub mod bird {
    use glam::Vec2;

    use super::board;

    pub const SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Where the bird is placed at load and on every restart.
    pub const START: Vec2 = Vec2::new(board::WIDTH / 8.0, board::HEIGHT / 2.0);
}

pub mod pipe {
    use std::time::Duration;

    use glam::Vec2;

    use super::board;

    pub const SIZE: Vec2 = Vec2::new(64.0, 512.0);
    /// Pipes enter at the right edge of the board.
    pub const SPAWN_X: f32 = board::WIDTH;
    /// The natural top of a pipe before the random offset is applied.
    pub const BASE_Y: f32 = 0.0;
    /// Vertical opening between the top and bottom pipe of a pair.
    pub const OPENING: f32 = board::HEIGHT / 4.0;
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);
}

pub mod physics {
    /// Downward acceleration, in units per tick squared.
    pub const GRAVITY: f32 = 0.4;
    /// Absolute vertical velocity assigned on a flap.
    pub const FLAP_VELOCITY: f32 = -6.0;
    /// Horizontal pipe velocity, in units per tick.
    pub const PIPE_VELOCITY: f32 = -2.0;
    /// Score awarded per individual pipe passed; a pair is worth one point.
    pub const SCORE_PER_PIPE: f32 = 0.5;
}

pub mod ui {
    use glam::IVec2;
    use sdl2::pixels::Color;

    use super::board;

    pub const FONT_SIZE: u16 = 45;
    /// Left edge and baseline of the score text.
    pub const SCORE_POSITION: IVec2 = IVec2::new(20, 45);
    /// Center of the banner text shown on game over or pause.
    pub const BANNER_POSITION: IVec2 = IVec2::new((board::WIDTH / 2.0) as i32, (board::HEIGHT / 2.0) as i32);

    pub const GAME_OVER_TEXT: &str = "GAME OVER";
    pub const PAUSED_TEXT: &str = "PAUSED";

    pub const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
    pub const BACKGROUND_COLOR: Color = Color::RGB(24, 22, 38);
}
