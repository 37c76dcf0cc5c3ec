//! Enemy behavior unit
//!
//! A four-state machine: `Patrolling`, `Stationary`, `Aggroed`, `Dead`.
//! Perception runs every frame tick (forward player-detection ray),
//! patrol motion every physics tick. Aggro is debounced: once triggered
//! it cannot re-trigger for at least one simulated second.

use rand::Rng;

use crate::audio::{cue, AudioDispatch};
use crate::config::EnemyTuning;
use crate::entity::EntityCore;
use crate::foundation::math::Vec2;
use crate::physics::layers::LayerMask;
use crate::physics::perception::PerceptionPort;

/// Behavioral state of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    /// Walking between patrol points
    Patrolling,

    /// Standing in place (ambush enemies, or a patroller standing down)
    Stationary,

    /// Pursuing the player
    Aggroed,

    /// Deactivated, waiting in the pool for reactivation
    Dead,
}

/// Enemy behavior unit
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Shared entity data
    pub core: EntityCore,

    tuning: EnemyTuning,
    state: EnemyState,
    patrol_left: bool,
    aggro_elapsed: f32,
    look_timer: f32,
    spawn_position: Vec2,
    patrols_from_spawn: bool,
    combat_enabled: bool,
}

impl Enemy {
    /// Minimum seconds between aggro triggers
    pub const AGGRO_DEBOUNCE_SECS: f32 = 1.0;

    /// Dead-band (both axes) for steering toward the player while aggroed;
    /// outside the vertical band the last direction is kept so vertically
    /// separated enemies don't jitter
    pub const STEER_BAND: f32 = 0.5;

    /// Seconds between idle look-direction rolls
    pub const IDLE_LOOK_PERIOD_SECS: f32 = 4.0;

    /// Spawn an enemy at `position`
    ///
    /// `patrols` selects the initial state; the initial patrol direction
    /// is chosen uniformly at random.
    pub fn spawn<R: Rng>(position: Vec2, patrols: bool, tuning: EnemyTuning, rng: &mut R) -> Self {
        Self {
            core: EntityCore::new(position, tuning.health),
            tuning,
            state: if patrols {
                EnemyState::Patrolling
            } else {
                EnemyState::Stationary
            },
            patrol_left: rng.gen_range(0..2) == 1,
            aggro_elapsed: 0.0,
            look_timer: 0.0,
            spawn_position: position,
            patrols_from_spawn: patrols,
            combat_enabled: true,
        }
    }

    /// Current behavioral state
    pub fn state(&self) -> EnemyState {
        self.state
    }

    /// Whether patrol motion applies this tick (aggro forces patrolling)
    pub fn is_patrolling(&self) -> bool {
        matches!(self.state, EnemyState::Patrolling | EnemyState::Aggroed)
    }

    /// Whether contact with the player resolves combat
    pub fn combat_enabled(&self) -> bool {
        self.combat_enabled
    }

    /// Damage dealt to the player on contact
    pub fn attack_power(&self) -> i32 {
        self.tuning.attack_power
    }

    /// Impulse applied to the player on contact
    pub fn knockback_power(&self) -> f32 {
        self.tuning.knockback_power
    }

    /// Frame tick: perception, death check, steering, idle look
    pub fn frame_tick<R: Rng>(
        &mut self,
        delta_time: f32,
        player_position: Vec2,
        perception: &dyn PerceptionPort,
        audio: &mut dyn AudioDispatch,
        level_complete: bool,
        rng: &mut R,
    ) {
        if !self.core.active {
            return;
        }
        // Terminal override: once the level completes, enemies halt and
        // stop threatening the player. One-way.
        if level_complete {
            self.freeze_for_completion();
            return;
        }

        self.check_aggro(perception, audio);
        if self.check_death() {
            return;
        }
        self.steer_toward_player(player_position);
        self.idle_look(delta_time, rng);

        if self.state != EnemyState::Aggroed {
            self.aggro_elapsed += delta_time;
        }
    }

    /// Physics tick: patrol motion and the ambush stand-down rule
    pub fn physics_tick(&mut self) {
        if !self.core.active {
            return;
        }
        if self.is_patrolling() {
            self.core.anim.running = true;
            let speed = self.tuning.movement_speed;
            self.core.body.velocity.x = if self.patrol_left { -speed } else { speed };
            if self.patrol_left && self.core.facing_right {
                self.core.flip();
            } else if !self.patrol_left && !self.core.facing_right {
                self.core.flip();
            }
        }
        // Ambush enemies stand down once displaced from their spawn point
        // while the player is lost.
        if self.state == EnemyState::Patrolling
            && !self.patrols_from_spawn
            && (self.core.body.position.x - self.spawn_position.x).abs() > 0.0
        {
            self.core.anim.running = false;
            self.core.body.velocity.x = 0.0;
            self.state = EnemyState::Stationary;
        }
    }

    /// Patrol-boundary trigger: reverse direction and lose the player
    pub fn on_patrol_point(&mut self) {
        self.patrol_left = !self.patrol_left;
        if self.state == EnemyState::Aggroed {
            self.state = EnemyState::Patrolling;
        }
    }

    /// Hazard trigger: return to the spawn point and deactivate
    pub fn on_hazard(&mut self) {
        self.core.body.teleport(self.spawn_position);
        self.deactivate();
    }

    /// Reduce health (player jump-attack); death resolves next frame tick
    pub fn take_damage(&mut self, amount: i32) {
        self.core.take_damage(amount);
    }

    /// Return the pooled enemy to its initial behavioral state
    pub fn reactivate(&mut self) {
        self.core.active = true;
        self.core.body.unlock_motion();
        self.core.body.zero_velocity();
        self.core.anim.reset();
        self.state = if self.patrols_from_spawn {
            EnemyState::Patrolling
        } else {
            EnemyState::Stationary
        };
        self.aggro_elapsed = 0.0;
        self.look_timer = 0.0;
        self.combat_enabled = true;
    }

    fn check_aggro(&mut self, perception: &dyn PerceptionPort, audio: &mut dyn AudioDispatch) {
        let direction = if self.core.facing_right {
            Vec2::new(1.0, 0.0)
        } else {
            Vec2::new(-1.0, 0.0)
        };
        let hit = perception.raycast(
            self.core.body.position,
            direction,
            self.tuning.aggro_ray_length,
            LayerMask::PLAYER,
        );
        if hit.is_some() && self.aggro_elapsed > Self::AGGRO_DEBOUNCE_SECS {
            self.state = EnemyState::Aggroed;
            audio.play_cue(cue::ENEMY_AGGRO);
            self.aggro_elapsed = 0.0;
        }
    }

    fn steer_toward_player(&mut self, player_position: Vec2) {
        if self.state != EnemyState::Aggroed {
            return;
        }
        let position = self.core.body.position;
        let vertically_close = (player_position.y - position.y).abs() < Self::STEER_BAND;
        if player_position.x > position.x + Self::STEER_BAND && vertically_close {
            self.patrol_left = false;
        } else if player_position.x < position.x - Self::STEER_BAND && vertically_close {
            self.patrol_left = true;
        }
    }

    fn idle_look<R: Rng>(&mut self, delta_time: f32, rng: &mut R) {
        if self.is_patrolling() {
            return;
        }
        self.look_timer += delta_time;
        if self.look_timer > Self::IDLE_LOOK_PERIOD_SECS {
            if rng.gen_range(0..2) == 1 {
                self.core.flip();
            }
            self.look_timer = 0.0;
        }
    }

    fn freeze_for_completion(&mut self) {
        self.core.body.lock_motion();
        self.core.anim.running = false;
        self.state = EnemyState::Stationary;
        self.combat_enabled = false;
    }

    fn check_death(&mut self) -> bool {
        if self.core.health <= 0 {
            self.deactivate();
            true
        } else {
            false
        }
    }

    fn deactivate(&mut self) {
        self.core.deactivate();
        self.state = EnemyState::Dead;
    }
}
