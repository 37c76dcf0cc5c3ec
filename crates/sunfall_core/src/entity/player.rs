//! Player behavior unit
//!
//! Two derived state dimensions: grounded/airborne (from a downward
//! perception check every physics tick) and alive/dead (from health).
//! While controls are disabled — the knockback window after an enemy
//! strike, or the level-completion freeze — the unit skips its ticks
//! entirely.

use crate::audio::{cue, AudioDispatch};
use crate::config::PlayerTuning;
use crate::entity::EntityCore;
use crate::foundation::math::Vec2;
use crate::input::InputSample;
use crate::physics::body::SurfaceMaterial;
use crate::physics::layers::LayerMask;
use crate::physics::perception::PerceptionPort;

/// Player behavior unit
#[derive(Debug, Clone)]
pub struct Player {
    /// Shared entity data
    pub core: EntityCore,

    tuning: PlayerTuning,
    grounded: bool,
    been_airborne: bool,
    controls_enabled: bool,
}

impl Player {
    /// Vertical-velocity band treated as settled while grounded
    const SETTLED_BAND: (f32, f32) = (-1.0, 0.1);

    /// Downward velocity past which the falling animation engages
    const FALLING_THRESHOLD: f32 = -1.0;

    /// Seconds after level load during which the landing cue stays quiet
    /// (spawn settling would otherwise trigger it)
    const LANDING_CUE_QUIET_SECS: f32 = 1.0;

    /// Spawn the player at `position`, facing right, with full health
    pub fn spawn(position: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            core: EntityCore::new(position, tuning.health),
            tuning,
            grounded: false,
            been_airborne: false,
            controls_enabled: true,
        }
    }

    /// Whether the downward perception check hit ground last physics tick
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Whether the behavior unit is accepting input
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Enable or disable the behavior unit (knockback lockout)
    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    /// Whether the player is moving downward (jump-attack precondition)
    pub fn is_falling(&self) -> bool {
        self.core.body.velocity.y < 0.0
    }

    /// Damage dealt by a jump-attack
    pub fn attack_power(&self) -> i32 {
        self.tuning.attack_power
    }

    /// Frame tick: animation state, jump input, death check
    ///
    /// Returns `true` when health was depleted this tick; the caller is
    /// expected to reset the level. Health is restored here as part of
    /// the death transition.
    pub fn frame_tick(&mut self, input: InputSample, audio: &mut dyn AudioDispatch) -> bool {
        if !self.controls_enabled {
            return false;
        }
        self.animation_state_toggle();
        self.jump(input, audio);
        self.check_death()
    }

    /// Physics tick: grounding, horizontal movement, landing cue
    pub fn physics_tick(
        &mut self,
        input: InputSample,
        perception: &dyn PerceptionPort,
        audio: &mut dyn AudioDispatch,
        since_level_load: f32,
    ) {
        if !self.controls_enabled {
            return;
        }
        self.refresh_grounding(perception);
        self.apply_movement(input);
        self.landing_cue(audio, since_level_load);
    }

    /// Zero velocity and bounce upward after a successful jump-attack
    pub fn rebound(&mut self) {
        self.core.body.zero_velocity();
        self.core
            .body
            .apply_impulse(Vec2::new(0.0, self.tuning.bounce_rebound));
    }

    /// Permanently stop the player (level-completion freeze)
    pub fn freeze(&mut self) {
        self.core.body.lock_motion();
        self.controls_enabled = false;
    }

    fn jump(&mut self, input: InputSample, audio: &mut dyn AudioDispatch) {
        if input.jump_pressed && self.grounded {
            audio.play_cue(cue::JUMP);
            // Drop any accumulated velocity first so impulses never stack.
            self.core.body.zero_velocity();
            self.core
                .body
                .apply_impulse(Vec2::new(0.0, self.tuning.jump_power));
            self.core.anim.jumping = true;
        }
    }

    fn refresh_grounding(&mut self, perception: &dyn PerceptionPort) {
        let hit = perception.raycast(
            self.core.body.position,
            Vec2::new(0.0, -1.0),
            self.tuning.ground_ray_length,
            LayerMask::GROUND,
        );
        if hit.is_some() {
            self.grounded = true;
            self.core.body.surface = SurfaceMaterial::Grounded;
        } else {
            self.grounded = false;
            self.core.body.surface = SurfaceMaterial::Airborne;
        }
    }

    fn apply_movement(&mut self, input: InputSample) {
        self.core.body.velocity.x = input.horizontal * self.tuning.movement_speed;
        self.core.anim.horizontal_speed = input.horizontal.abs();
        if input.horizontal > 0.0 && !self.core.facing_right {
            self.core.flip();
        } else if input.horizontal < 0.0 && self.core.facing_right {
            self.core.flip();
        }
    }

    fn landing_cue(&mut self, audio: &mut dyn AudioDispatch, since_level_load: f32) {
        if !self.grounded {
            self.been_airborne = true;
        }
        if self.grounded && self.been_airborne {
            self.been_airborne = false;
            if since_level_load >= Self::LANDING_CUE_QUIET_SECS {
                audio.play_cue(cue::LAND);
            }
        }
    }

    fn animation_state_toggle(&mut self) {
        let vertical = self.core.body.velocity.y;
        if self.grounded && vertical <= Self::SETTLED_BAND.1 && vertical > Self::SETTLED_BAND.0 {
            self.core.anim.jumping = false;
            self.core.anim.falling = false;
        }
        if !self.grounded && vertical < Self::FALLING_THRESHOLD {
            self.core.anim.falling = true;
        }
    }

    fn check_death(&mut self) -> bool {
        if self.core.health <= 0 {
            self.core.health = self.core.start_health;
            true
        } else {
            false
        }
    }
}
