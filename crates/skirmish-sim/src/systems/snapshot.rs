//! Snapshot system: queries the ECS world and builds a complete
//! `ArenaSnapshot`.
//!
//! This system is read-only — it never modifies the world. Inactive
//! entities are excluded, and every list is sorted by entity id so the
//! rendering collaborator sees a stable enumeration order.

use hecs::World;

use skirmish_core::components::{
    Active, Breakable, Health, Obstacle, Player, Projectile, Pursuer, Sprite, Weapon,
};
use skirmish_core::events::GameEvent;
use skirmish_core::state::{ArenaSnapshot, BreakableView, EntityView, PlayerView};
use skirmish_core::types::{Extent, Position, SimTime};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<GameEvent>) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        player: build_player(world),
        pursuers: build_kind::<Pursuer>(world),
        projectiles: build_kind::<Projectile>(world),
        walls: build_kind::<Obstacle>(world),
        breakables: build_breakables(world),
        events,
    }
}

/// Build the avatar view. The avatar always exists for the run's
/// duration; a default view is only possible on an empty world.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Extent, &Sprite, &Health, &Weapon)>()
        .iter()
        .next()
        .map(|(_, (_, pos, extent, sprite, health, weapon))| PlayerView {
            position: pos.0,
            extent: *extent,
            color: sprite.color,
            shape: sprite.shape,
            health: health.current,
            can_shoot: weapon.ready,
        })
        .unwrap_or_default()
}

/// Build the view list for one entity kind, active entities only.
fn build_kind<Marker: hecs::Component>(world: &World) -> Vec<EntityView> {
    let mut views: Vec<EntityView> = world
        .query::<(&Marker, &Position, &Extent, &Sprite, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, _, active))| active.0)
        .map(|(entity, (_, pos, extent, sprite, _))| EntityView {
            id: entity.to_bits().get(),
            position: pos.0,
            extent: *extent,
            color: sprite.color,
            shape: sprite.shape,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

/// Build breakable views, including remaining health for damage FX.
fn build_breakables(world: &World) -> Vec<BreakableView> {
    let mut views: Vec<BreakableView> = world
        .query::<(&Breakable, &Position, &Extent, &Sprite, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, _, active))| active.0)
        .map(|(entity, (breakable, pos, extent, sprite, _))| BreakableView {
            id: entity.to_bits().get(),
            position: pos.0,
            extent: *extent,
            color: sprite.color,
            shape: sprite.shape,
            health: breakable.health,
            max_health: breakable.max_health,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}
