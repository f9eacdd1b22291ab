use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Query, ResMut},
};
use tracing::{debug, info};

use crate::audio::Sound;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::systems::audio::{AudioEvent, AudioState};
use crate::systems::components::{Collider, Pipe, PlayerControlled, Position, ScoreResource};
use crate::systems::state::{DeathCause, GameStage};

/// Scores passed pipes and ends the run when the bird touches one.
///
/// Every pipe is checked in the same pass: a pipe is passed once the bird's left edge is
/// beyond the pipe's right edge, which awards half a point exactly once per pipe. Several
/// pipes passed in one tick produce a single point cue.
#[allow(clippy::too_many_arguments)]
pub fn collision_system(
    birds: Query<(Entity, &Position, &Collider), With<PlayerControlled>>,
    mut pipes: Query<(Entity, &Position, &Collider, &mut Pipe), Without<PlayerControlled>>,
    mut score: ResMut<ScoreResource>,
    mut stage: ResMut<GameStage>,
    mut audio_state: ResMut<AudioState>,
    mut events: EventWriter<GameEvent>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let (bird, bird_pos, bird_collider) = match birds.single() {
        Ok(bird) => bird,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("No single bird entity: {e}")));
            return;
        }
    };

    let mut scored = false;
    for (entity, pipe_pos, pipe_collider, mut pipe) in pipes.iter_mut() {
        if !pipe.passed && bird_pos.0.x > pipe_pos.0.x + pipe_collider.size.x {
            pipe.passed = true;
            score.add_pipe();
            scored = true;
            debug!(?entity, score = %*score, "Pipe passed");
            events.write(GameEvent::PipePassed(entity));
        }

        if bird_collider.overlaps(bird_pos.0, pipe_collider, pipe_pos.0) {
            events.write(GameEvent::Collision(bird, entity));
            if stage.end(DeathCause::Collided) {
                info!(?entity, score = %*score, "Bird hit a pipe");
                audio_events.write(AudioEvent::Play(DeathCause::Collided.sound()));
                audio_events.write(AudioEvent::StopMusic);
                audio_state.music_playing = false;
            }
        }
    }

    if scored {
        audio_events.write(AudioEvent::Play(Sound::Point));
    }
}
