//! Simulation constants and tuning parameters.

use crate::types::Color;

// --- Frame timing ---

/// Upper bound on a single frame's delta time (seconds). Frame stalls
/// are clamped so one tick can never integrate a runaway step.
pub const MAX_FRAME_DT: f32 = 0.05;

// --- Arena ---

/// Default arena width in world units.
pub const ARENA_WIDTH: f32 = 800.0;

/// Default arena height in world units.
pub const ARENA_HEIGHT: f32 = 600.0;

/// Thickness of the default perimeter walls.
pub const WALL_THICKNESS: f32 = 20.0;

// --- Player ---

/// Player footprint side length.
pub const PLAYER_SIZE: f32 = 30.0;

/// Player movement speed (units/second).
pub const PLAYER_SPEED: f32 = 200.0;

/// Player starting hit points.
pub const PLAYER_HEALTH: f32 = 100.0;

/// Minimum interval between two shots (seconds).
pub const PLAYER_FIRE_COOLDOWN_SECS: f32 = 0.2;

// --- Pursuers ---

/// Pursuer footprint side length.
pub const PURSUER_SIZE: f32 = 25.0;

/// Pursuer movement speed (units/second).
pub const PURSUER_SPEED: f32 = 100.0;

/// Range within which a pursuer chases its target. At or beyond this
/// distance the pursuer stops.
pub const PURSUER_DETECTION_RANGE: f32 = 300.0;

// --- Projectiles ---

/// Projectile footprint side length.
pub const PROJECTILE_SIZE: f32 = 8.0;

/// Projectile travel speed (units/second).
pub const PROJECTILE_SPEED: f32 = 400.0;

/// Projectile lifetime before expiry (seconds).
pub const PROJECTILE_LIFETIME_SECS: f32 = 3.0;

/// Damage a projectile deals to a breakable obstacle.
pub const PROJECTILE_DAMAGE: f32 = 25.0;

// --- Colors ---

pub const PLAYER_COLOR: Color = Color::new(0, 255, 0);
pub const PURSUER_COLOR: Color = Color::new(255, 0, 0);
pub const PROJECTILE_COLOR: Color = Color::new(255, 255, 0);
pub const WALL_COLOR: Color = Color::new(100, 100, 100);
pub const BREAKABLE_COLOR: Color = Color::new(139, 69, 19);

/// Default hit points of a breakable obstacle.
pub const BREAKABLE_HEALTH: f32 = 100.0;
