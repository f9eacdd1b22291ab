//! Per-tick motion for the bird and the pipes.
//!
//! All motion is in units per tick and deliberately ignores [`DeltaTime`](crate::systems::DeltaTime):
//! the simulation advances one fixed step per frame.

use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, ResMut},
};
use tracing::info;

use crate::constants::{board, physics};
use crate::error::GameError;
use crate::systems::audio::{AudioEvent, AudioState};
use crate::systems::components::{Pipe, PlayerControlled, Position, Velocity};
use crate::systems::state::{DeathCause, GameStage};

/// Advances a vertical position and velocity by one tick.
///
/// Gravity is added before the move, and the result is clamped so the bird can never rise
/// above the top of the board. The velocity is left alone when clamping.
pub fn integrate(y: f32, velocity: f32) -> (f32, f32) {
    let velocity = velocity + physics::GRAVITY;
    ((y + velocity).max(0.0), velocity)
}

/// Whether a bird whose top edge is at `y` has dropped below the board.
pub fn is_out_of_bounds(y: f32) -> bool {
    y > board::HEIGHT
}

/// Applies gravity to the bird and ends the run once it falls off the board.
pub fn bird_physics_system(
    mut birds: Query<(&mut Position, &mut Velocity), With<PlayerControlled>>,
    mut stage: ResMut<GameStage>,
    mut audio_state: ResMut<AudioState>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let (mut position, mut velocity) = match birds.single_mut() {
        Ok(bird) => bird,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("No single bird entity: {e}")));
            return;
        }
    };

    let (y, v) = integrate(position.0.y, velocity.0);
    position.0.y = y;
    velocity.0 = v;

    if is_out_of_bounds(y) && stage.end(DeathCause::FellOutOfBounds) {
        info!(y, "Bird fell out of bounds");
        audio_events.write(AudioEvent::Play(DeathCause::FellOutOfBounds.sound()));
        audio_events.write(AudioEvent::StopMusic);
        audio_state.music_playing = false;
    }
}

/// Moves every pipe left by a fixed amount.
pub fn pipe_scroll_system(mut pipes: Query<&mut Position, With<Pipe>>) {
    for mut position in pipes.iter_mut() {
        position.0.x += physics::PIPE_VELOCITY;
    }
}
