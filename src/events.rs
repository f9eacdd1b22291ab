use bevy_ecs::prelude::*;

/// A normalized player intent, produced by the input layer from raw key, pointer and touch events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Flap while playing, restart after a game over.
    Activate,
    Exit,
    MuteAudio,
    TogglePause,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The bird (first) overlapped a pipe (second).
    Collision(Entity, Entity),
    /// The bird cleared the trailing edge of a pipe for the first time.
    PipePassed(Entity),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
