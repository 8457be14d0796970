//! Projectile flight system — integration and lifetime expiry.

use hecs::World;

use skirmish_core::components::{Active, Lifetime, Projectile};
use skirmish_core::constants::PROJECTILE_LIFETIME_SECS;

use super::movement;

/// Integrate projectile positions, then age each projectile and clear
/// its active flag once the lifetime elapses. The cleanup sweep removes
/// it at the end of the frame.
pub fn run(world: &mut World, dt: f32) {
    movement::run::<Projectile>(world, dt);

    for (_entity, (_projectile, lifetime, active)) in
        world.query_mut::<(&Projectile, &mut Lifetime, &mut Active)>()
    {
        lifetime.age_secs += dt;
        if lifetime.age_secs >= PROJECTILE_LIFETIME_SECS {
            active.0 = false;
        }
    }
}
