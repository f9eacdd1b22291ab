//! Timed spawning and cleanup of pipe pairs.

use std::time::Duration;

use bevy_ecs::{
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::pipe;
use crate::systems::components::{DeltaTime, PipeBundle, PipeQueue, PipeRng, PipeRole, Position};
use crate::systems::state::GameStage;

/// Wall-clock timer that fires once per spawn interval.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    elapsed: Duration,
    interval: Duration,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(pipe::SPAWN_INTERVAL)
    }
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            interval,
        }
    }

    /// Advances the timer, returning `true` if an interval elapsed.
    ///
    /// Fires at most once per call; if a long frame covered several intervals, the extra
    /// intervals are dropped rather than spawning a burst of pipes.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed = Duration::from_nanos((self.elapsed.as_nanos() % self.interval.as_nanos()) as u64);
        true
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Positions of the top and bottom pipe of a new pair, given a random sample in `[0, 1)`.
///
/// The top pipe hangs between a quarter and three quarters of its height above the board;
/// the bottom pipe starts one opening below the top pipe's bottom edge.
pub fn pipe_pair_positions(sample: f32) -> (Vec2, Vec2) {
    let height = pipe::SIZE.y;
    let top_y = pipe::BASE_Y - height / 4.0 - sample * (height / 2.0);
    let top = Vec2::new(pipe::SPAWN_X, top_y);
    let bottom = Vec2::new(pipe::SPAWN_X, top_y + height + pipe::OPENING);
    (top, bottom)
}

/// Spawns a pipe pair every interval while playing.
///
/// The timer keeps running on the game over screen, but any firing there is discarded.
pub fn spawn_system(
    mut commands: Commands,
    delta: Res<DeltaTime>,
    stage: Res<GameStage>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<PipeRng>,
    mut queue: ResMut<PipeQueue>,
) {
    let fired = timer.tick(Duration::from_secs_f32(delta.0.max(0.0)));
    if !fired {
        return;
    }
    if !stage.is_playing() {
        trace!("Spawn timer fired outside of play; skipping");
        return;
    }

    let (top, bottom) = pipe_pair_positions(rng.0.random::<f32>());
    let top_entity = commands.spawn(PipeBundle::new(PipeRole::Top, top)).id();
    let bottom_entity = commands.spawn(PipeBundle::new(PipeRole::Bottom, bottom)).id();
    queue.0.push_back(top_entity);
    queue.0.push_back(bottom_entity);

    debug!(top_y = top.y, bottom_y = bottom.y, active = queue.0.len(), "Spawned pipe pair");
}

/// Despawns pipes that have scrolled fully past the left edge.
pub fn pipe_cleanup_system(mut commands: Commands, mut queue: ResMut<PipeQueue>, positions: Query<&Position>) {
    while let Some(&front) = queue.0.front() {
        let gone = match positions.get(front) {
            Ok(position) => position.0.x < -pipe::SIZE.x,
            Err(_) => true,
        };
        if !gone {
            break;
        }

        queue.0.pop_front();
        if let Ok(mut entity) = commands.get_entity(front) {
            entity.despawn();
        }
        trace!(?front, "Removed off-screen pipe");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_at_interval() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert!(!timer.tick(Duration::from_millis(1000)));
        assert!(timer.tick(Duration::from_millis(500)));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_timer_drops_backlog() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert!(timer.tick(Duration::from_millis(4000)));
        assert_eq!(timer.elapsed(), Duration::from_millis(1000));
        assert!(!timer.tick(Duration::ZERO));
    }

    #[test]
    fn test_pair_positions_bounds() {
        let (top, bottom) = pipe_pair_positions(0.0);
        assert_eq!(top, Vec2::new(360.0, -128.0));
        assert_eq!(bottom, Vec2::new(360.0, 544.0));

        let (top, bottom) = pipe_pair_positions(0.5);
        assert_eq!(top.y, -256.0);
        assert_eq!(bottom.y, 416.0);
    }
}
