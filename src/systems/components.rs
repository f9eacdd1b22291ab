use std::collections::VecDeque;
use std::fmt;

use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;

use crate::constants::{self, physics};
use crate::texture::sprite::Sprite;

/// A tag component for the entity controlled by the player: the bird.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct PlayerControlled;

/// Top-left corner of an entity, in board units.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Vertical velocity in units per tick. Positive values move down.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub f32);

/// Axis-aligned bounding box size, anchored at the entity's [`Position`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub size: Vec2,
}

impl Collider {
    /// Whether two boxes overlap.
    ///
    /// Each box must start strictly before the other ends on both axes, so boxes that only
    /// share an edge do not collide.
    pub fn overlaps(&self, position: Vec2, other: &Collider, other_position: Vec2) -> bool {
        position.x < other_position.x + other.size.x
            && position.x + self.size.x > other_position.x
            && position.y < other_position.y + other.size.y
            && position.y + self.size.y > other_position.y
    }
}

/// Which half of a pipe pair an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeRole {
    Top,
    Bottom,
}

impl PipeRole {
    pub fn sprite(&self) -> Sprite {
        match self {
            PipeRole::Top => Sprite::TopPipe,
            PipeRole::Bottom => Sprite::BottomPipe,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    pub role: PipeRole,
    /// Set the first time the bird clears this pipe; never cleared.
    pub passed: bool,
}

/// A component for entities that have a sprite, with a layer for ordering.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    pub sprite: Sprite,
    pub layer: u8,
}

pub mod layer {
    pub const PIPES: u8 = 1;
    pub const BIRD: u8 = 2;
}

#[derive(Bundle)]
pub struct BirdBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub sprite: Renderable,
}

impl Default for BirdBundle {
    fn default() -> Self {
        Self {
            player: PlayerControlled,
            position: Position(constants::bird::START),
            velocity: Velocity(0.0),
            collider: Collider {
                size: constants::bird::SIZE,
            },
            sprite: Renderable {
                sprite: Sprite::Bird,
                layer: layer::BIRD,
            },
        }
    }
}

#[derive(Bundle)]
pub struct PipeBundle {
    pub pipe: Pipe,
    pub position: Position,
    pub collider: Collider,
    pub sprite: Renderable,
}

impl PipeBundle {
    pub fn new(role: PipeRole, position: Vec2) -> Self {
        Self {
            pipe: Pipe { role, passed: false },
            position: Position(position),
            collider: Collider {
                size: constants::pipe::SIZE,
            },
            sprite: Renderable {
                sprite: role.sprite(),
                layer: layer::PIPES,
            },
        }
    }
}

/// The active pipes, oldest first.
///
/// Pipes are pushed in spawn order and all move at the same speed, so the front is always
/// the leftmost pipe and cleanup only ever needs to look there.
#[derive(Resource, Debug, Default, Clone)]
pub struct PipeQueue(pub VecDeque<Entity>);

/// Source of the random vertical offset for each pipe pair.
#[derive(Resource, Debug, Clone)]
pub struct PipeRng(pub SmallRng);

#[derive(Resource, Debug)]
pub struct GlobalState {
    pub exit: bool,
    /// Whether the window has input focus; used to pick a cheaper frame sleep.
    pub focused: bool,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            exit: false,
            focused: true,
        }
    }
}

/// Points scored in the current run; grows by half a point per pipe.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreResource(pub f32);

impl ScoreResource {
    pub fn add_pipe(&mut self) {
        self.0 += physics::SCORE_PER_PIPE;
    }
}

impl fmt::Display for ScoreResource {
    /// Whole scores print without a fractional part, half points as `N.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as u64)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// Wall-clock time elapsed since the previous frame, in seconds.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaTime(pub f32);
