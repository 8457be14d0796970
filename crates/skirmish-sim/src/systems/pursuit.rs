//! Pursuit AI system — chases the avatar while it is active and within
//! detection range.
//!
//! Each pursuer holds a non-owning target handle resolved here at use
//! time. A missing, despawned, or inactive target means "no target":
//! the pursuer stops rather than coasting on its last velocity.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Active, Mobility, Player, Pursuer, Pursuit};
use skirmish_core::constants::PURSUER_DETECTION_RANGE;
use skirmish_core::types::{Position, Velocity};

use super::movement;

/// Run the pursuit system: pick each pursuer's direction, then integrate.
pub fn run(world: &mut World, dt: f32) {
    // Resolve every possible target once; pursuers share the avatar slot.
    let targets: Vec<(hecs::Entity, Vec2, bool)> = world
        .query::<(&Player, &Position, &Active)>()
        .iter()
        .map(|(entity, (_player, pos, active))| (entity, pos.0, active.0))
        .collect();

    for (_entity, (_pursuer, pos, vel, mobility, pursuit)) in
        world.query_mut::<(&Pursuer, &Position, &mut Velocity, &Mobility, &Pursuit)>()
    {
        let dir = pursuit
            .target
            .and_then(|target| targets.iter().find(|(entity, _, _)| *entity == target))
            .filter(|(_, _, active)| *active)
            .map(|(_, target_pos, _)| chase_direction(pos.0, *target_pos))
            .unwrap_or(Vec2::ZERO);

        vel.0 = dir * mobility.speed;
    }

    movement::run::<Pursuer>(world, dt);
}

/// Unit direction from `from` toward `to`, or zero when the target is
/// out of detection range or exactly coincident (degenerate case).
pub fn chase_direction(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 && distance < PURSUER_DETECTION_RANGE {
        delta / distance
    } else {
        Vec2::ZERO
    }
}
