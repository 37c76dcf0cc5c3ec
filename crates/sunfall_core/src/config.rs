//! Gameplay tuning
//!
//! Tuning values are plain data so designers can override them from RON
//! files; the defaults are the shipped values.

use serde::{Deserialize, Serialize};

/// Top-level tuning bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTuning {
    /// Player tuning
    pub player: PlayerTuning,

    /// Enemy tuning (per-spawn overrides live in the level definition)
    pub enemy: EnemyTuning,

    /// Level-progress tuning
    pub progress: ProgressTuning,
}

/// Player movement and combat tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Horizontal movement speed in units per second
    pub movement_speed: f32,

    /// Upward impulse applied on jump
    pub jump_power: f32,

    /// Length of the downward ground-check ray
    pub ground_ray_length: f32,

    /// Global gravity applied to airborne bodies (negative = down)
    pub gravity: f32,

    /// Starting (and maximum) health
    pub health: i32,

    /// Damage dealt by a jump-attack
    pub attack_power: i32,

    /// Upward rebound impulse after a successful jump-attack
    pub bounce_rebound: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            movement_speed: 10.0,
            jump_power: 10.0,
            ground_ray_length: 1.1,
            gravity: -30.0,
            health: 1,
            attack_power: 1,
            bounce_rebound: 15.0,
        }
    }
}

/// Enemy movement and combat tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTuning {
    /// Starting (and maximum) health
    pub health: i32,

    /// Damage dealt to the player on contact
    pub attack_power: i32,

    /// Patrol speed in units per second
    pub movement_speed: f32,

    /// Length of the forward player-detection ray
    pub aggro_ray_length: f32,

    /// Impulse applied to the player on contact
    pub knockback_power: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            health: 1,
            attack_power: 1,
            movement_speed: 1.0,
            aggro_ray_length: 2.0,
            knockback_power: 5.0,
        }
    }
}

/// Level-progress and completion tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTuning {
    /// Seconds the ambient light takes to reach its new value after a
    /// sun piece is collected
    pub light_fade_duration: f32,

    /// Seconds between level completion and the logo reveal
    pub logo_delay: f32,

    /// Seconds between level completion and the menu-button reveal
    pub menu_button_delay: f32,
}

impl Default for ProgressTuning {
    fn default() -> Self {
        Self {
            light_fade_duration: 3.0,
            logo_delay: 1.0,
            menu_button_delay: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_values() {
        let tuning = GameTuning::default();

        assert_eq!(tuning.player.movement_speed, 10.0);
        assert_eq!(tuning.player.health, 1);
        assert_eq!(tuning.enemy.aggro_ray_length, 2.0);
        assert_eq!(tuning.progress.light_fade_duration, 3.0);
    }

    #[test]
    fn test_tuning_round_trips_through_ron() {
        let tuning = GameTuning::default();
        let text = ron::to_string(&tuning).expect("serialize");
        let back: GameTuning = ron::from_str(&text).expect("deserialize");

        assert_eq!(back.player.jump_power, tuning.player.jump_power);
        assert_eq!(back.enemy.knockback_power, tuning.enemy.knockback_power);
    }
}
