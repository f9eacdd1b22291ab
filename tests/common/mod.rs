#![allow(dead_code)]

use bevy_ecs::{
    entity::Entity,
    event::{Event, Events},
    query::With,
};
use flappy::{
    events::{GameCommand, GameEvent},
    game::Game,
    systems::{AudioEvent, Pipe, PipeBundle, PipeQueue, PipeRole, PlayerControlled, Position, Velocity},
};
use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};

pub const SEED: u64 = 0x5eed;

/// A headless game with a fixed pipe seed.
pub fn create_test_game() -> Game {
    Game::headless(SmallRng::seed_from_u64(SEED))
}

/// Queues a command as if the player had just pressed a key.
pub fn send_command(game: &mut Game, command: GameCommand) {
    game.world.send_event(GameEvent::from(command));
}

/// Events written during the most recent tick.
pub fn current_events<E: Event + Clone>(game: &Game) -> Vec<E> {
    game.world
        .resource::<Events<E>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

pub fn audio_events(game: &Game) -> Vec<AudioEvent> {
    current_events::<AudioEvent>(game)
}

pub fn game_events(game: &Game) -> Vec<GameEvent> {
    current_events::<GameEvent>(game)
}

pub fn bird(game: &mut Game) -> (Vec2, f32) {
    let mut query = game.world.query_filtered::<(&Position, &Velocity), With<PlayerControlled>>();
    let (position, velocity) = query.single(&game.world).expect("exactly one bird");
    (position.0, velocity.0)
}

pub fn set_bird(game: &mut Game, position: Vec2, velocity: f32) {
    let mut query = game
        .world
        .query_filtered::<(&mut Position, &mut Velocity), With<PlayerControlled>>();
    let (mut pos, mut vel) = query.single_mut(&mut game.world).expect("exactly one bird");
    pos.0 = position;
    vel.0 = velocity;
}

/// Spawns a pipe and registers it the way the spawner does.
pub fn spawn_pipe(game: &mut Game, role: PipeRole, position: Vec2) -> Entity {
    let entity = game.world.spawn(PipeBundle::new(role, position)).id();
    game.world.resource_mut::<PipeQueue>().0.push_back(entity);
    entity
}

/// All live pipes, as (role, position, passed).
pub fn pipes(game: &mut Game) -> Vec<(PipeRole, Vec2, bool)> {
    let mut query = game.world.query::<(&Pipe, &Position)>();
    query
        .iter(&game.world)
        .map(|(pipe, position)| (pipe.role, position.0, pipe.passed))
        .collect()
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
