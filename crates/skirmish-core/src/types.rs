//! Fundamental geometric and simulation types.
//!
//! Coordinates use the screen convention: x grows right, y grows down,
//! with rectangles anchored at their top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World position in arena units (pixels at native scale).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in arena units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Axis-aligned size of an entity's footprint. Both dimensions must be
/// positive; the caller is responsible for supplying valid values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square footprint with the given side length.
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Axis-aligned bounding box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Bounding box for an entity at `position` with the given footprint.
    pub fn from_entity(position: Vec2, extent: Extent) -> Self {
        Self {
            position,
            size: extent.size(),
        }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Overlap rectangle between two boxes. Returns `None` unless both
    /// overlap extents are strictly positive, so edge-touching boxes do
    /// not count as intersecting.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.position.x.max(other.position.x);
        let top = self.position.y.max(other.position.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > left && bottom > top {
            Some(Rect {
                position: Vec2::new(left, top),
                size: Vec2::new(right - left, bottom - top),
            })
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

/// RGB fill color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel multiplied by `ratio` with a truncating cast.
    /// Used for the damage fade on breakable obstacles.
    pub fn scaled(&self, ratio: f32) -> Color {
        Color {
            r: (self.r as f32 * ratio) as u8,
            g: (self.g as f32 * ratio) as u8,
            b: (self.b as f32 * ratio) as u8,
        }
    }
}

/// Simulation time tracking. Frames advance by a variable, clamped
/// delta supplied by the caller each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Completed frame count.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
