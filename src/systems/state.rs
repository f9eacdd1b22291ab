use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::debug;

use crate::audio::Sound;
use crate::events::{GameCommand, GameEvent};
use crate::systems::audio::AudioEvent;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Collided,
    FellOutOfBounds,
}

impl DeathCause {
    /// The cue played when a run ends this way.
    pub fn sound(&self) -> Sound {
        match self {
            DeathCause::Collided => Sound::Hit,
            DeathCause::FellOutOfBounds => Sound::Die,
        }
    }
}

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum GameStage {
    /// The bird and pipes move, pipes spawn and score accrues.
    #[default]
    Playing,
    /// The world is frozen until the player activates again.
    GameOver(DeathCause),
}

impl GameStage {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }

    /// Ends the current run.
    ///
    /// Returns `true` only for the transition out of [`GameStage::Playing`]; later calls in
    /// the same run keep the original cause and return `false`.
    pub fn end(&mut self, cause: DeathCause) -> bool {
        if self.is_playing() {
            *self = GameStage::GameOver(cause);
            true
        } else {
            false
        }
    }
}

/// Run condition for systems that only advance the simulation during play.
pub fn in_play(stage: Res<GameStage>) -> bool {
    stage.is_playing()
}

#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PauseState {
    #[default]
    Inactive,
    Active,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }

    /// Flips the pause state, returning whether the game is now paused.
    pub fn toggle(&mut self) -> bool {
        *self = match self {
            PauseState::Inactive => PauseState::Active,
            PauseState::Active => PauseState::Inactive,
        };
        self.active()
    }
}

/// Toggles [`PauseState`] and pauses or resumes audio to match.
///
/// Pausing is only allowed while playing; a pause request on the game over screen is ignored.
pub fn pause_command_system(
    mut events: EventReader<GameEvent>,
    stage: Res<GameStage>,
    mut pause: ResMut<PauseState>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        if !matches!(event, GameEvent::Command(GameCommand::TogglePause)) {
            continue;
        }

        if !stage.is_playing() && !pause.active() {
            debug!("Ignoring pause request outside of play");
            continue;
        }

        if pause.toggle() {
            debug!("Game paused");
            audio_events.write(AudioEvent::Pause);
        } else {
            debug!("Game resumed");
            audio_events.write(AudioEvent::Resume);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_is_idempotent() {
        let mut stage = GameStage::Playing;
        assert!(stage.end(DeathCause::Collided));
        assert!(!stage.end(DeathCause::FellOutOfBounds));
        assert_eq!(stage, GameStage::GameOver(DeathCause::Collided));
    }

    #[test]
    fn test_pause_toggle() {
        let mut pause = PauseState::default();
        assert!(pause.toggle());
        assert!(pause.active());
        assert!(!pause.toggle());
        assert!(!pause.active());
    }

    #[test]
    fn test_death_cues() {
        assert_eq!(DeathCause::Collided.sound(), Sound::Hit);
        assert_eq!(DeathCause::FellOutOfBounds.sound(), Sound::Die);
    }
}
