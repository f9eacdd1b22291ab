use std::io;

use bevy_ecs::event::Events;
use bevy_ecs::query::With;
use flappy::error::{AssetError, GameError, PlatformError, TextureError};
use flappy::events::GameCommand;
use flappy::systems::PlayerControlled;

mod common;
use common::*;

#[test]
fn test_game_error_from_asset_error() {
    let asset_error = AssetError::NotFound("images/bird.png".to_string());
    let game_error: GameError = asset_error.into();
    assert!(matches!(game_error, GameError::Asset(_)));
}

#[test]
fn test_game_error_from_texture_error() {
    let texture_error = TextureError::LoadFailed("Failed to load".to_string());
    let game_error: GameError = texture_error.into();
    assert!(matches!(game_error, GameError::Texture(_)));
}

#[test]
fn test_game_error_from_platform_error() {
    let platform_error = PlatformError::LoggingInit("already set".to_string());
    let game_error: GameError = platform_error.into();
    assert!(matches!(game_error, GameError::Platform(_)));
}

#[test]
fn test_game_error_from_io_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let game_error: GameError = io_error.into();
    assert!(matches!(game_error, GameError::Io(_)));
}

#[test]
fn test_asset_error_from_io_error() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
    let asset_error: AssetError = io_error.into();
    assert!(matches!(asset_error, AssetError::Io(_)));
}

#[test]
fn test_error_display() {
    let error = GameError::from(AssetError::NotFound("sound/bgm.mp3".to_string()));
    assert_eq!(error.to_string(), "Asset error: Asset not found: sound/bgm.mp3");

    let error = GameError::Sdl("no video device".to_string());
    assert_eq!(error.to_string(), "SDL error: no video device");

    let error = TextureError::RenderFailed("bad target".to_string());
    assert_eq!(error.to_string(), "Rendering failed: bad target");
}

#[test]
fn test_missing_bird_is_reported_not_fatal() {
    let mut game = create_test_game();
    let bird = game
        .world
        .query_filtered::<bevy_ecs::entity::Entity, With<PlayerControlled>>()
        .single(&game.world)
        .unwrap();
    game.world.despawn(bird);

    assert!(!game.tick(0.0));

    let events = game.world.resource::<Events<GameError>>();
    let errors: Vec<&GameError> = events.iter_current_update_events().collect();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|e| matches!(e, GameError::InvalidState(_))));
}

#[test]
fn test_missing_bird_does_not_drop_later_commands() {
    let mut game = create_test_game();
    let bird = game
        .world
        .query_filtered::<bevy_ecs::entity::Entity, With<PlayerControlled>>()
        .single(&game.world)
        .unwrap();
    game.world.despawn(bird);

    send_command(&mut game, GameCommand::Activate);
    send_command(&mut game, GameCommand::Exit);

    assert!(game.tick(0.0));
}
