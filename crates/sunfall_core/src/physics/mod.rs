//! Physics-facing types
//!
//! Collision detection and integration belong to the host engine; this
//! module holds what the gameplay layer needs to talk to it: a kinematic
//! body, collision-layer filtering, and the raycast perception capability.

pub mod body;
pub mod layers;
pub mod perception;

pub use body::{KinematicBody, SurfaceMaterial};
pub use layers::LayerMask;
pub use perception::{PerceptionPort, RayHit};
