//! Collision detection and resolution.
//!
//! Two independent passes run after every entity has integrated:
//! avatar-vs-wall push-back, then projectile-vs-target hits. All tests
//! are plain AABB intersections on the frame's updated positions; there
//! is no sub-stepping, so very fast movers can tunnel through thin
//! targets (accepted limitation).

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Active, Breakable, Obstacle, Player, Projectile, Pursuer, Sprite};
use skirmish_core::constants::PROJECTILE_DAMAGE;
use skirmish_core::events::GameEvent;
use skirmish_core::types::{Extent, Position, Rect};

/// Run both collision passes for one frame.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    resolve_player_walls(world);
    resolve_projectile_hits(world, events);
}

/// Push the avatar out of every active wall it overlaps.
///
/// Corrections are applied wall-by-wall in storage order, each against
/// the avatar's current (possibly already corrected) bounds. Overlaps
/// with several walls in one frame are not jointly solved; a later
/// correction may reintroduce an earlier overlap.
fn resolve_player_walls(world: &mut World) {
    let walls: Vec<Rect> = world
        .query::<(&Obstacle, &Position, &Extent, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(_, (_, pos, extent, _))| Rect::from_entity(pos.0, *extent))
        .collect();

    for (_entity, (_player, pos, extent)) in
        world.query_mut::<(&Player, &mut Position, &Extent)>()
    {
        for wall in &walls {
            let bounds = Rect::from_entity(pos.0, *extent);
            if let Some(overlap) = bounds.intersection(wall) {
                pos.0 += resolve_push(&bounds, wall, &overlap);
            }
        }
    }
}

/// Minimum-penetration correction: push the mover out along the axis
/// with the smaller overlap extent, toward the side it entered from
/// (decided by comparing anchor positions on that axis).
pub fn resolve_push(mover: &Rect, fixed: &Rect, overlap: &Rect) -> Vec2 {
    if overlap.size.x < overlap.size.y {
        if mover.position.x < fixed.position.x {
            Vec2::new(-overlap.size.x, 0.0)
        } else {
            Vec2::new(overlap.size.x, 0.0)
        }
    } else if mover.position.y < fixed.position.y {
        Vec2::new(0.0, -overlap.size.y)
    } else {
        Vec2::new(0.0, overlap.size.y)
    }
}

/// Test every active projectile against pursuers, then breakables.
///
/// Pursuers are checked first and a hit consumes the projectile, so one
/// projectile never downs a pursuer and damages an obstacle in the same
/// frame. Both passes stop at the first hit in storage order.
fn resolve_projectile_hits(world: &mut World, events: &mut Vec<GameEvent>) {
    let projectiles: Vec<hecs::Entity> = world
        .query::<(&Projectile, &Active)>()
        .iter()
        .filter(|(_, (_, active))| active.0)
        .map(|(entity, _)| entity)
        .collect();

    let pursuers: Vec<(hecs::Entity, Rect)> = collect_targets::<Pursuer>(world);
    let breakables: Vec<(hecs::Entity, Rect)> = collect_targets::<Breakable>(world);

    for projectile in projectiles {
        let bounds = match bounds_of(world, projectile) {
            Some(bounds) => bounds,
            None => continue,
        };

        // Pursuer pass — first match wins. Active flags are re-checked
        // live so two projectiles cannot both claim one pursuer.
        let hit = pursuers
            .iter()
            .find(|(pursuer, rect)| is_active(world, *pursuer) && bounds.intersects(rect));
        if let Some(&(pursuer, _)) = hit {
            deactivate(world, projectile);
            deactivate(world, pursuer);
            events.push(GameEvent::PursuerDown {
                id: pursuer.to_bits().get(),
            });
            continue;
        }

        // Breakable pass — only a projectile that survived the pursuer
        // pass can damage an obstacle.
        let hit = breakables
            .iter()
            .find(|(breakable, rect)| is_active(world, *breakable) && bounds.intersects(rect));
        if let Some(&(breakable, _)) = hit {
            deactivate(world, projectile);
            damage_breakable(world, breakable, PROJECTILE_DAMAGE, events);
        }
    }
}

/// Damage a breakable obstacle. Health is clamped to exactly zero on
/// destruction (clearing the active flag), and the fill color is
/// recomputed from the remaining health ratio after every hit — a
/// destroyed obstacle fades fully to black.
pub fn damage_breakable(
    world: &mut World,
    entity: hecs::Entity,
    amount: f32,
    events: &mut Vec<GameEvent>,
) {
    let Ok(mut breakable) = world.get::<&mut Breakable>(entity) else {
        return;
    };

    breakable.health -= amount;
    let destroyed = breakable.health <= 0.0;
    if destroyed {
        breakable.health = 0.0;
    }

    let health = breakable.health;
    let faded = breakable.base_color.scaled(health / breakable.max_health);
    drop(breakable);

    if let Ok(mut sprite) = world.get::<&mut Sprite>(entity) {
        sprite.color = faded;
    }

    let id = entity.to_bits().get();
    events.push(GameEvent::ObstacleDamaged { id, health });
    if destroyed {
        deactivate(world, entity);
        events.push(GameEvent::ObstacleDestroyed { id });
    }
}

/// Gather (entity, bounds) for every active entity of the target kind.
fn collect_targets<Marker: hecs::Component>(world: &World) -> Vec<(hecs::Entity, Rect)> {
    world
        .query::<(&Marker, &Position, &Extent, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, extent, _))| (entity, Rect::from_entity(pos.0, *extent)))
        .collect()
}

fn bounds_of(world: &World, entity: hecs::Entity) -> Option<Rect> {
    let pos = world.get::<&Position>(entity).ok()?;
    let extent = world.get::<&Extent>(entity).ok()?;
    Some(Rect::from_entity(pos.0, *extent))
}

fn is_active(world: &World, entity: hecs::Entity) -> bool {
    world.get::<&Active>(entity).map(|a| a.0).unwrap_or(false)
}

fn deactivate(world: &mut World, entity: hecs::Entity) {
    if let Ok(mut active) = world.get::<&mut Active>(entity) {
        active.0 = false;
    }
}
