//! Events emitted by the simulation for frontend audio and FX feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Noteworthy simulation moments, drained into each tick's snapshot.
/// Entity ids match the ids reported in the snapshot views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the avatar's weapon.
    ShotFired { origin: Vec2 },
    /// A pursuer was eliminated by a projectile.
    PursuerDown { id: u64 },
    /// A breakable obstacle absorbed a hit.
    ObstacleDamaged { id: u64, health: f32 },
    /// A breakable obstacle was destroyed.
    ObstacleDestroyed { id: u64 },
}
