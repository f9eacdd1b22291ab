//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

use bevy_ecs::event::EventReader;
use tracing::error;

use crate::error::GameError;

pub mod audio;
pub mod collision;
pub mod components;
pub mod control;
pub mod hud;
pub mod input;
pub mod physics;
pub mod render;
pub mod spawner;
pub mod state;

pub use self::audio::*;
pub use self::collision::*;
pub use self::components::*;
pub use self::control::*;
pub use self::hud::*;
pub use self::input::*;
pub use self::physics::*;
pub use self::render::*;
pub use self::spawner::*;
pub use self::state::*;

/// Logs every error reported by systems during the frame.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!("{e}");
    }
}
