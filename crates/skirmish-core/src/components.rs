//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior of their own.
//! Game logic lives in systems, not components. `Position` and
//! `Velocity` from `types` are used as components directly.

use serde::{Deserialize, Serialize};

use crate::enums::ShapeKind;
use crate::types::Color;

/// Marks the player-controlled avatar. Exactly one per world; the world
/// guarantees it outlives every pursuer for the run's duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a pursuit-AI opponent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuer;

/// Marks a short-lived projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks a static wall obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Logical liveness flag. `false` means destroyed and pending removal:
/// the entity is skipped by collision and snapshots but stays in storage
/// until the cleanup sweep despawns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Scalar movement speed. Steering sets `velocity = direction * speed`
/// from a unit-or-zero direction; integration never changes speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    pub speed: f32,
}

/// Avatar hit points. Mutated only by damage and never clamped at the
/// lower bound; a defeat transition is not part of the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
}

/// Cooldown-gated firing state for the avatar's weapon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Whether a shot may be fired this frame.
    pub ready: bool,
    /// Seconds accumulated since the last shot; resets to 0 on re-arm.
    pub cooldown_timer: f32,
}

/// Pursuit behavior state. The target is a non-owning handle into the
/// world's avatar slot, resolved at use time; `None` means no target and
/// the pursuer holds position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pursuit {
    pub target: Option<hecs::Entity>,
}

/// Projectile age accumulator. The projectile deactivates once age
/// reaches the fixed lifetime constant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifetime {
    pub age_secs: f32,
}

/// Destructible obstacle state. `base_color` is the undamaged fill;
/// the displayed color fades linearly with `health / max_health`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Breakable {
    pub health: f32,
    pub max_health: f32,
    pub base_color: Color,
}

/// Shape descriptor handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub color: Color,
    pub shape: ShapeKind,
}
