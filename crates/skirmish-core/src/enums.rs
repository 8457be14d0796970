//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Shape kind for the rendering collaborator. The core issues no drawing
/// calls; it only describes what each entity looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle (avatar, pursuers, obstacles).
    #[default]
    Rectangle,
    /// Circle inscribed in the entity's footprint (projectiles).
    Circle,
}
