//! Entity spawn factories and the arena configuration.
//!
//! All walls, breakables, and initial pursuers are created once at
//! world setup; only projectiles are spawned mid-run (on fire events).

use glam::Vec2;
use hecs::World;
use serde::{Deserialize, Serialize};

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::ShapeKind;
use skirmish_core::types::{Extent, Position, Rect, Velocity};

/// Initial arena layout, supplied once at engine construction.
/// There is no dynamic reconfiguration mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width and height in world units.
    pub bounds: Vec2,
    pub player_spawn: Vec2,
    pub pursuer_spawns: Vec<Vec2>,
    pub walls: Vec<Rect>,
    pub breakables: Vec<BreakableSpec>,
}

/// Placement and hit points for one breakable obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakableSpec {
    pub position: Vec2,
    pub extent: Extent,
    pub health: f32,
}

impl Default for ArenaConfig {
    /// The standard arena: an 800x600 field ringed by perimeter walls,
    /// two interior walls, two breakable crates, and two pursuers.
    fn default() -> Self {
        let w = ARENA_WIDTH;
        let h = ARENA_HEIGHT;
        let t = WALL_THICKNESS;

        Self {
            bounds: Vec2::new(w, h),
            player_spawn: Vec2::new(400.0, 300.0),
            pursuer_spawns: vec![Vec2::new(200.0, 100.0), Vec2::new(600.0, 500.0)],
            walls: vec![
                // Perimeter
                Rect::new(Vec2::new(0.0, 0.0), Vec2::new(w, t)),
                Rect::new(Vec2::new(0.0, h - t), Vec2::new(w, t)),
                Rect::new(Vec2::new(0.0, 0.0), Vec2::new(t, h)),
                Rect::new(Vec2::new(w - t, 0.0), Vec2::new(t, h)),
                // Interior cover
                Rect::new(Vec2::new(200.0, 200.0), Vec2::new(100.0, 20.0)),
                Rect::new(Vec2::new(500.0, 400.0), Vec2::new(20.0, 150.0)),
            ],
            breakables: vec![
                BreakableSpec {
                    position: Vec2::new(300.0, 300.0),
                    extent: Extent::square(40.0),
                    health: BREAKABLE_HEALTH,
                },
                BreakableSpec {
                    position: Vec2::new(600.0, 200.0),
                    extent: Extent::square(40.0),
                    health: BREAKABLE_HEALTH,
                },
            ],
        }
    }
}

/// Populate the world from the config: one player, then obstacles, then
/// pursuers targeting the player.
pub fn setup_arena(world: &mut World, config: &ArenaConfig) {
    let player = spawn_player(world, config.player_spawn);

    for wall in &config.walls {
        spawn_wall(world, *wall);
    }
    for spec in &config.breakables {
        spawn_breakable(world, spec);
    }
    for &spawn in &config.pursuer_spawns {
        spawn_pursuer(world, spawn, Some(player));
    }

    log::debug!(
        "arena initialized: {} walls, {} breakables, {} pursuers",
        config.walls.len(),
        config.breakables.len(),
        config.pursuer_spawns.len()
    );
}

/// Spawn the player-controlled avatar.
pub fn spawn_player(world: &mut World, position: Vec2) -> hecs::Entity {
    world.spawn((
        Player,
        Position(position),
        Velocity(Vec2::ZERO),
        Extent::square(PLAYER_SIZE),
        Mobility {
            speed: PLAYER_SPEED,
        },
        Active(true),
        Health {
            current: PLAYER_HEALTH,
        },
        Weapon {
            ready: true,
            cooldown_timer: 0.0,
        },
        Sprite {
            color: PLAYER_COLOR,
            shape: ShapeKind::Rectangle,
        },
    ))
}

/// Spawn a pursuer holding a non-owning handle to its target.
pub fn spawn_pursuer(
    world: &mut World,
    position: Vec2,
    target: Option<hecs::Entity>,
) -> hecs::Entity {
    world.spawn((
        Pursuer,
        Position(position),
        Velocity(Vec2::ZERO),
        Extent::square(PURSUER_SIZE),
        Mobility {
            speed: PURSUER_SPEED,
        },
        Active(true),
        Pursuit { target },
        Sprite {
            color: PURSUER_COLOR,
            shape: ShapeKind::Rectangle,
        },
    ))
}

/// Spawn a static wall obstacle.
pub fn spawn_wall(world: &mut World, bounds: Rect) -> hecs::Entity {
    world.spawn((
        Obstacle,
        Position(bounds.position),
        Extent::new(bounds.size.x, bounds.size.y),
        Active(true),
        Sprite {
            color: WALL_COLOR,
            shape: ShapeKind::Rectangle,
        },
    ))
}

/// Spawn a breakable obstacle.
pub fn spawn_breakable(world: &mut World, spec: &BreakableSpec) -> hecs::Entity {
    world.spawn((
        Breakable {
            health: spec.health,
            max_health: spec.health,
            base_color: BREAKABLE_COLOR,
        },
        Position(spec.position),
        spec.extent,
        Active(true),
        Sprite {
            color: BREAKABLE_COLOR,
            shape: ShapeKind::Rectangle,
        },
    ))
}

/// Spawn a projectile with a raw aim heading. The heading is normalized
/// here; a zero-length heading is a defined degenerate case — the
/// projectile keeps zero velocity and sits at its spawn point until its
/// lifetime expires.
pub fn spawn_projectile(world: &mut World, origin: Vec2, heading: Vec2) -> hecs::Entity {
    let velocity = heading.normalize_or_zero() * PROJECTILE_SPEED;

    world.spawn((
        Projectile,
        Position(origin),
        Velocity(velocity),
        Extent::square(PROJECTILE_SIZE),
        Active(true),
        Lifetime::default(),
        Sprite {
            color: PROJECTILE_COLOR,
            shape: ShapeKind::Circle,
        },
    ))
}
