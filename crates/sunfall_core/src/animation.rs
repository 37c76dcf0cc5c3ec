//! Animation parameter boundary
//!
//! Behavior units publish discrete animation parameters here; the host
//! render/animation layer reads them each frame. Parameters are pure
//! outputs — nothing feeds back into gameplay decisions.

/// One-shot animation triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimTrigger {
    /// Enemy strike on the player
    Attack,

    /// Player recoil from an enemy strike
    Knockback,
}

/// Animation parameter set for a single entity
#[derive(Debug, Clone, Default)]
pub struct Animator {
    /// Running flag (drives the run cycle)
    pub running: bool,

    /// Jumping flag (set on takeoff, cleared on settled landing)
    pub jumping: bool,

    /// Falling flag (set past a downward velocity threshold)
    pub falling: bool,

    /// Absolute horizontal input speed (drives walk/run blending)
    pub horizontal_speed: f32,

    /// Sprite mirrored on the x axis
    pub flip_x: bool,

    pending: Vec<AnimTrigger>,
}

impl Animator {
    /// Create an animator with all parameters cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot trigger for the render layer
    pub fn trigger(&mut self, trigger: AnimTrigger) {
        self.pending.push(trigger);
    }

    /// Drain queued triggers (called by the render layer once per frame)
    pub fn take_triggers(&mut self) -> Vec<AnimTrigger> {
        std::mem::take(&mut self.pending)
    }

    /// Mirror the sprite
    pub fn toggle_flip(&mut self) {
        self.flip_x = !self.flip_x;
    }

    /// Clear every parameter and queued trigger
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_drain_once() {
        let mut anim = Animator::new();
        anim.trigger(AnimTrigger::Attack);
        anim.trigger(AnimTrigger::Knockback);

        assert_eq!(
            anim.take_triggers(),
            vec![AnimTrigger::Attack, AnimTrigger::Knockback]
        );
        assert!(anim.take_triggers().is_empty());
    }

    #[test]
    fn test_flip_toggles() {
        let mut anim = Animator::new();
        assert!(!anim.flip_x);
        anim.toggle_flip();
        assert!(anim.flip_x);
    }
}
