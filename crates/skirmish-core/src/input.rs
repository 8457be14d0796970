//! Per-frame input snapshot sampled by the frontend.
//!
//! The simulation never polls input devices. The embedding application
//! samples its event source once per frame and passes the result here;
//! the snapshot is immutable for the duration of the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Control state for a single frame. Axes follow the screen convention:
/// `up` is negative y.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Discrete fire request carrying a world-space aim point.
    pub fire: Option<Vec2>,
}
