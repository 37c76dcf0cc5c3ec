//! Abstract raycast interface for entity perception
//!
//! Behavior units never walk scene geometry themselves; they ask the host
//! physics subsystem whether a filtered line segment hits anything. This
//! abstraction keeps the gameplay layer independent of the broad-phase
//! scheme the host uses.

use crate::foundation::math::Vec2;
use crate::physics::layers::LayerMask;

/// Result of a successful raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Point where the ray intersected the collidable
    pub point: Vec2,

    /// Distance from the ray origin to the hit point
    pub distance: f32,

    /// Layers the hit collidable belongs to
    pub layers: LayerMask,
}

/// Raycast capability implemented by the host physics subsystem
///
/// `direction` is expected to be normalized; only collidables whose layers
/// intersect `mask` are considered.
pub trait PerceptionPort {
    /// Cast a ray and report the nearest filtered hit within `max_distance`
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

/// Perception stub that never reports a hit
///
/// Useful for menus and for tests that exercise paths where perception
/// does not matter.
pub struct NullPerception;

impl PerceptionPort for NullPerception {
    fn raycast(
        &self,
        _origin: Vec2,
        _direction: Vec2,
        _max_distance: f32,
        _mask: LayerMask,
    ) -> Option<RayHit> {
        None
    }
}
