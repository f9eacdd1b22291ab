use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::With,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    audio::Sound,
    constants::{bird, physics},
    error::GameError,
    events::{GameCommand, GameEvent},
    systems::{
        audio::{AudioEvent, AudioState},
        components::{GlobalState, Pipe, PipeQueue, PlayerControlled, Position, ScoreResource, Velocity},
        state::{GameStage, PauseState},
    },
};

/// Applies player commands: flapping, restarting, muting and exiting.
///
/// Activation flaps while playing and restarts after a game over. It is ignored while paused.
#[allow(clippy::too_many_arguments)]
pub fn control_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut stage: ResMut<GameStage>,
    pause: Res<PauseState>,
    mut score: ResMut<ScoreResource>,
    mut queue: ResMut<PipeQueue>,
    mut audio_state: ResMut<AudioState>,
    mut birds: Query<(&mut Position, &mut Velocity), With<PlayerControlled>>,
    pipes: Query<Entity, With<Pipe>>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event else {
            continue;
        };

        match command {
            GameCommand::Activate if pause.active() => {
                debug!("Ignoring activation while paused");
            }
            GameCommand::Activate => {
                let (mut position, mut velocity) = match birds.single_mut() {
                    Ok(bird) => bird,
                    Err(e) => {
                        errors.write(GameError::InvalidState(format!("No single bird entity: {e}")));
                        continue;
                    }
                };

                if stage.is_playing() {
                    velocity.0 = physics::FLAP_VELOCITY;
                    audio_events.write(AudioEvent::Play(Sound::Flap));
                } else {
                    for pipe in pipes.iter() {
                        commands.entity(pipe).despawn();
                    }
                    queue.0.clear();

                    info!(final_score = %*score, "Restarting");
                    score.0 = 0.0;
                    position.0 = bird::START;
                    velocity.0 = 0.0;
                    *stage = GameStage::Playing;
                }

                if !audio_state.music_playing {
                    audio_events.write(AudioEvent::StartMusic);
                    audio_state.music_playing = true;
                }
            }
            GameCommand::MuteAudio => {
                audio_state.muted = !audio_state.muted;
                info!(muted = audio_state.muted, "Toggled audio mute");
            }
            GameCommand::Exit => {
                state.exit = true;
            }
            GameCommand::TogglePause => {}
        }
    }
}
