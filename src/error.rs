//! Centralized error types for the game.
//!
//! Falling out of the board or hitting a pipe are gameplay outcomes, not errors; nothing in
//! this module represents them. These types only cover the I/O collaborators (assets,
//! textures, SDL, logging) and broken invariants inside the ECS world.

use std::io;

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// Doubles as an ECS event so systems can report non-fatal failures without aborting the frame.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors related to texture and font operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Invalid texture format: {0}")]
    InvalidFormat(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
