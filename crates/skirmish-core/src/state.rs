//! Arena snapshot — the complete visible state sent to the frontend
//! each tick.
//!
//! Views describe active entities only, each as a shape descriptor the
//! rendering collaborator can draw without touching the ECS world.
//! Every list is sorted by entity id so enumeration order is stable
//! across frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::ShapeKind;
use crate::events::GameEvent;
use crate::types::{Color, Extent, SimTime};

/// Complete arena state produced by one simulation tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    pub pursuers: Vec<EntityView>,
    pub projectiles: Vec<EntityView>,
    pub walls: Vec<EntityView>,
    pub breakables: Vec<BreakableView>,
    /// Events that occurred during this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// The avatar's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub extent: Extent,
    pub color: Color,
    pub shape: ShapeKind,
    pub health: f32,
    pub can_shoot: bool,
}

/// Shape descriptor for a pursuer, projectile, or wall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub position: Vec2,
    pub extent: Extent,
    pub color: Color,
    pub shape: ShapeKind,
}

/// Shape descriptor for a breakable obstacle, with remaining health for
/// damage indicators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakableView {
    pub id: u64,
    pub position: Vec2,
    pub extent: Extent,
    pub color: Color,
    pub shape: ShapeKind,
    pub health: f32,
    pub max_health: f32,
}
