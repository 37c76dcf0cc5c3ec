//! Gameplay entities
//!
//! Exactly two concrete entity kinds exist — the player and the enemy.
//! They share no runtime polymorphism, only [`EntityCore`], the common
//! data every entity carries. Variant-specific behavior lives in the
//! per-kind modules and is advanced by explicit tick methods.

pub mod enemy;
pub mod player;

use crate::animation::Animator;
use crate::foundation::math::Vec2;
use crate::physics::body::KinematicBody;

/// Data shared by every gameplay entity
///
/// Entities are pooled: deactivation restores health and leaves the
/// instance ready for reactivation, it never destroys anything.
#[derive(Debug, Clone)]
pub struct EntityCore {
    /// Kinematic body (position, velocity, friction profile)
    pub body: KinematicBody,

    /// Sprite faces right when true
    pub facing_right: bool,

    /// Current health
    pub health: i32,

    /// Health the entity spawned with (restored on every death)
    pub start_health: i32,

    /// Participates in simulation and rendering while true
    pub active: bool,

    /// Published animation parameters
    pub anim: Animator,
}

impl EntityCore {
    /// Create an active, right-facing entity at `position`
    pub fn new(position: Vec2, health: i32) -> Self {
        Self {
            body: KinematicBody::new(position),
            facing_right: true,
            health,
            start_health: health,
            active: true,
            anim: Animator::new(),
        }
    }

    /// Reverse the facing direction and mirror the sprite
    pub fn flip(&mut self) {
        self.facing_right = !self.facing_right;
        self.anim.toggle_flip();
    }

    /// Reduce health by `amount`
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Remove the entity from simulation and restore its spawn health
    pub fn deactivate(&mut self) {
        self.active = false;
        self.health = self.start_health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_mirrors_sprite() {
        let mut core = EntityCore::new(Vec2::zeros(), 1);
        assert!(core.facing_right);
        assert!(!core.anim.flip_x);

        core.flip();

        assert!(!core.facing_right);
        assert!(core.anim.flip_x);
    }

    #[test]
    fn test_deactivate_restores_health() {
        let mut core = EntityCore::new(Vec2::zeros(), 3);
        core.take_damage(3);
        assert_eq!(core.health, 0);

        core.deactivate();

        assert!(!core.active);
        assert_eq!(core.health, 3);
    }
}
