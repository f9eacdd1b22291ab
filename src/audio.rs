//! This module handles the audio playback for the game.
use std::collections::HashMap;

use crate::asset::{Asset, AssetRoot};
use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Chunk, InitFlag, LoaderRWops, Music, AUDIO_S16LSB},
    rwops::RWops,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 4;
const CHUNK_SIZE: i32 = 1024;
const DEFAULT_VOLUME: u8 = 64;

/// One-shot sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    Flap,
    Hit,
    Point,
    Die,
}

/// The audio system for the game.
///
/// If audio fails to initialize, it will be disabled and all functions will silently do
/// nothing. Individual sounds that fail to load are skipped. Playback errors are logged and
/// never reported to the caller.
pub struct Audio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    sounds: HashMap<Sound, Chunk>,
    music: Option<Music<'static>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Audio {
    /// Creates a new `Audio` instance, loading every sound from `assets`.
    pub fn new(assets: &AssetRoot) -> Self {
        match Self::try_new(assets) {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self::disabled()
            }
        }
    }

    /// An audio instance that never plays anything.
    pub fn disabled() -> Self {
        Self {
            _mixer_context: None,
            sounds: HashMap::new(),
            music: None,
            state: AudioState::Disabled,
        }
    }

    fn try_new(assets: &AssetRoot) -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 2, CHUNK_SIZE).map_err(|e| anyhow!("Failed to open audio: {}", e))?;
        mixer::allocate_channels(AUDIO_CHANNELS);
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let mixer_context =
            mixer::init(InitFlag::MP3 | InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_sound(assets, sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        let music = match Self::load_music(assets) {
            Ok(music) => Some(music),
            Err(e) => {
                tracing::warn!("Failed to load background music: {}", e);
                None
            }
        };

        if sounds.is_empty() && music.is_none() {
            return Err(anyhow!("No sounds loaded successfully"));
        }

        Music::set_volume(DEFAULT_VOLUME as i32);

        Ok(Audio {
            _mixer_context: Some(mixer_context),
            sounds,
            music,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load_sound(assets: &AssetRoot, sound: Sound) -> Result<Chunk> {
        let data = assets
            .get_bytes(Asset::SoundFile(sound))
            .map_err(|e| anyhow!("Failed to get bytes for {:?}: {}", sound, e))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", sound, e))?;
        rwops.load_wav().map_err(|e| anyhow!("Failed to decode {:?}: {}", sound, e))
    }

    fn load_music(assets: &AssetRoot) -> Result<Music<'static>> {
        // The mixer streams music from the buffer for as long as it plays.
        let data: &'static [u8] = assets.get_bytes(Asset::Music)?.leak();
        Music::from_static_bytes(data).map_err(|e| anyhow!("Failed to decode music: {}", e))
    }

    /// Plays the provided sound effect once.
    pub fn play(&mut self, sound: Sound) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            match mixer::Channel::all().play(chunk, 0) {
                Ok(channel) => tracing::trace!(?sound, ?channel, "Playing sound"),
                Err(e) => tracing::warn!(?sound, "Could not play sound: {}", e),
            }
        }
    }

    /// Starts the background loop from the beginning.
    pub fn start_music(&mut self) {
        if self.state == AudioState::Disabled {
            return;
        }

        if let Some(music) = &self.music {
            Music::halt();
            if let Err(e) = music.play(-1) {
                tracing::warn!("Could not start background music: {}", e);
            }
        }
    }

    /// Stops the background loop; the next start plays it from the beginning.
    pub fn stop_music(&mut self) {
        if self.state != AudioState::Disabled && self.music.is_some() {
            Music::halt();
        }
    }

    /// Pauses all currently playing audio channels and the music.
    pub fn pause_all(&mut self) {
        if self.state != AudioState::Disabled {
            mixer::Channel::all().pause();
            Music::pause();
        }
    }

    /// Resumes all paused audio channels and the music.
    pub fn resume_all(&mut self) {
        if self.state != AudioState::Disabled {
            mixer::Channel::all().resume();
            Music::resume();
        }
    }

    /// Instantly mutes or unmutes every channel and the music by adjusting their volume.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                Music::set_volume(0);
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                Music::set_volume(previous_volume as i32);
            }
            _ => {}
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}
