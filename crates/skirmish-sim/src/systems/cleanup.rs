//! Cleanup sweep: despawns entities whose active flag was cleared this
//! frame. Runs once per frame after all other mutation is complete, so
//! removal never interleaves with iteration.

use hecs::{Entity, World};

use skirmish_core::components::{Active, Breakable, Projectile, Pursuer};

/// Remove every inactive projectile, pursuer, and breakable obstacle
/// from the world. The avatar is never swept. Uses a pre-allocated
/// buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (active, _projectile)) in world.query_mut::<(&Active, &Projectile)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (active, _pursuer)) in world.query_mut::<(&Active, &Pursuer)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (active, _breakable)) in world.query_mut::<(&Active, &Breakable)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    if !despawn_buffer.is_empty() {
        log::trace!("sweeping {} inactive entities", despawn_buffer.len());
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
