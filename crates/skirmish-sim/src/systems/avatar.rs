//! Avatar system — applies the frame's input snapshot to the player.
//!
//! Runs in a fixed order each frame: fire, steer, integrate, advance the
//! weapon cooldown. Firing happens before movement so the projectile
//! originates from the position the player aimed from.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Health, Mobility, Player, Weapon};
use skirmish_core::constants::PLAYER_FIRE_COOLDOWN_SECS;
use skirmish_core::events::GameEvent;
use skirmish_core::input::InputSnapshot;
use skirmish_core::types::{Extent, Position, Velocity};

use super::movement;
use crate::world_setup;

/// Run the avatar system for one frame.
pub fn run(world: &mut World, input: &InputSnapshot, dt: f32, events: &mut Vec<GameEvent>) {
    fire(world, input, events);
    steer(world, input);
    movement::run::<Player>(world, dt);
    advance_cooldown(world, dt);
}

/// Compose the four axis signals into a unit-or-zero direction.
/// Both axes active scales each component by 1/sqrt(2) so diagonal
/// speed equals axis-aligned speed.
pub fn compose_direction(input: &InputSnapshot) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }

    if dir.x != 0.0 && dir.y != 0.0 {
        dir *= std::f32::consts::FRAC_1_SQRT_2;
    }
    dir
}

/// Consume the weapon's ready state. Returns true and starts the
/// cooldown only if a shot may be fired; otherwise false with no state
/// change. This is the sole gate on fire rate.
pub fn try_shoot(weapon: &mut Weapon) -> bool {
    if weapon.ready {
        weapon.ready = false;
        true
    } else {
        false
    }
}

/// Apply damage to the avatar. Health is not clamped at zero.
pub fn take_damage(world: &mut World, amount: f32) {
    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        health.current -= amount;
    }
}

/// Spawn a projectile toward the aim point if the weapon is ready.
fn fire(world: &mut World, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
    let Some(aim) = input.fire else {
        return;
    };

    // Resolve the shot origin inside the query, spawn after it ends.
    let mut shot: Option<(Vec2, Vec2)> = None;
    for (_entity, (_player, pos, extent, weapon)) in
        world.query_mut::<(&Player, &Position, &Extent, &mut Weapon)>()
    {
        if !try_shoot(weapon) {
            continue;
        }
        let center = pos.0 + extent.size() * 0.5;
        shot = Some((center, aim - center));
    }

    if let Some((origin, heading)) = shot {
        world_setup::spawn_projectile(world, origin, heading);
        events.push(GameEvent::ShotFired { origin });
        log::trace!("shot fired from {origin} toward {aim}");
    }
}

/// Set the player's velocity from the composed input direction.
fn steer(world: &mut World, input: &InputSnapshot) {
    let dir = compose_direction(input);
    for (_entity, (_player, vel, mobility)) in
        world.query_mut::<(&Player, &mut Velocity, &Mobility)>()
    {
        vel.0 = dir * mobility.speed;
    }
}

/// Advance the weapon cooldown; re-arm once the full interval elapses.
fn advance_cooldown(world: &mut World, dt: f32) {
    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut Weapon)>() {
        if weapon.ready {
            continue;
        }
        weapon.cooldown_timer += dt;
        if weapon.cooldown_timer >= PLAYER_FIRE_COOLDOWN_SECS {
            weapon.ready = true;
            weapon.cooldown_timer = 0.0;
        }
    }
}
