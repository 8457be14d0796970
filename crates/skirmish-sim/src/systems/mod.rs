//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components.

pub mod avatar;
pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod projectile;
pub mod pursuit;
pub mod snapshot;
