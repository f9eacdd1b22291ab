//! Audio system bridging gameplay events to SDL2_mixer.
//!
//! Gameplay systems only ever write [`AudioEvent`]s; the [`audio_system`] owning the mixer runs
//! on the main thread through a `NonSendMut` resource, so the simulation can run without it.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, Res},
};
use tracing::{debug, trace};

use crate::audio::{Audio, Sound};

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
    /// Whether the background loop has been started and not stopped since.
    ///
    /// Owned by the gameplay systems, which set it whenever they request a start or stop.
    pub music_playing: bool,
}

/// Events for triggering audio playback
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play a specific sound effect
    Play(Sound),
    /// Start the background loop from the beginning
    StartMusic,
    /// Stop and rewind the background loop
    StopMusic,
    /// Pause all sounds
    Pause,
    /// Resume all sounds
    Resume,
}

/// Non-send resource wrapper for SDL2 audio system
///
/// SDL2 audio components are not Send, so they live in a non-send resource on the main thread.
pub struct AudioResource(pub Audio);

/// System that processes audio events and plays sounds
pub fn audio_system(mut audio: NonSendMut<AudioResource>, state: Res<AudioState>, mut events: EventReader<AudioEvent>) {
    if audio.0.is_muted() != state.muted {
        debug!(muted = state.muted, "Audio mute state changed");
        audio.0.set_mute(state.muted);
    }

    for event in events.read() {
        match event {
            AudioEvent::Play(sound) => {
                if !audio.0.is_disabled() && !state.muted {
                    trace!(?sound, "Playing sound");
                    audio.0.play(*sound);
                }
            }
            AudioEvent::StartMusic => {
                debug!("Starting background music");
                audio.0.start_music();
            }
            AudioEvent::StopMusic => {
                debug!("Stopping background music");
                audio.0.stop_music();
            }
            AudioEvent::Pause => {
                if !audio.0.is_disabled() {
                    debug!("Pausing all audio");
                    audio.0.pause_all();
                }
            }
            AudioEvent::Resume => {
                if !audio.0.is_disabled() {
                    debug!("Resuming all audio");
                    audio.0.resume_all();
                }
            }
        }
    }
}
