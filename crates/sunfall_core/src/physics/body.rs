//! Kinematic body state for gameplay entities
//!
//! The body carries the velocity and position the behavior units mutate;
//! the host physics subsystem owns collision response and calls
//! [`KinematicBody::integrate`] (or its own equivalent) once per fixed
//! step.

use crate::foundation::math::Vec2;

/// Friction profile applied by the host physics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceMaterial {
    /// High-friction material used while standing on ground
    #[default]
    Grounded,

    /// Frictionless material used while airborne (prevents wall-sticking)
    Airborne,
}

/// Kinematic body for a gameplay entity
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// World position
    pub position: Vec2,

    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Active friction profile
    pub surface: SurfaceMaterial,

    motion_locked: bool,
}

impl KinematicBody {
    /// Create a body at rest at `position`
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            surface: SurfaceMaterial::default(),
            motion_locked: false,
        }
    }

    /// Add an instantaneous impulse to the velocity
    ///
    /// Ignored while motion is locked.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if !self.motion_locked {
            self.velocity += impulse;
        }
    }

    /// Zero the velocity on both axes
    pub fn zero_velocity(&mut self) {
        self.velocity = Vec2::zeros();
    }

    /// Move the body to `position`, dropping any accumulated velocity
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::zeros();
    }

    /// Permanently stop the body and reject further impulses
    ///
    /// One-way: used by the level-completion freeze.
    pub fn lock_motion(&mut self) {
        self.velocity = Vec2::zeros();
        self.motion_locked = true;
    }

    /// Release a motion lock (reactivation path)
    pub fn unlock_motion(&mut self) {
        self.motion_locked = false;
    }

    /// Whether the body is frozen in place
    pub fn is_motion_locked(&self) -> bool {
        self.motion_locked
    }

    /// Apply one integration step
    pub fn integrate(&mut self, delta_time: f32) {
        if self.motion_locked {
            return;
        }
        self.position += self.velocity * delta_time;
    }
}
