//! Kinematic integration system.
//!
//! Updates Position from Velocity: position += velocity * dt. The same
//! integration path serves every movable kind; callers pick the kind via
//! the marker parameter so the frame pipeline controls update order.

use hecs::{Component, World};

use skirmish_core::types::{Position, Velocity};

/// Integrate position from velocity for every entity carrying `Marker`.
pub fn run<Marker: Component>(world: &mut World, dt: f32) {
    for (_entity, (pos, vel, _marker)) in
        world.query_mut::<(&mut Position, &Velocity, &Marker)>()
    {
        pos.0 += vel.0 * dt;
    }
}
