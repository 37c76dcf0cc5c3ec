//! Level-progress coordination
//!
//! The coordinator owns the shared collection/completion state every
//! behavior unit feeds: sun-piece counting, the ambient-light fade,
//! level-completion detection, and the reset protocol. One instance per
//! process, owned by the [`Session`](crate::session::Session), surviving
//! level reloads; it is re-armed by `on_level_loaded` for each gameplay
//! scene.

use slotmap::SlotMap;

use crate::audio::MusicDirector;
use crate::config::ProgressTuning;
use crate::entity::enemy::Enemy;
use crate::entity::player::Player;
use crate::foundation::math::{lerp, Vec2};
use crate::level::schedule::{DeferredAction, Schedule};
use crate::level::{Collectible, CollectibleKey, EnemyKey, LevelScene};
use crate::ui::ProgressHud;

/// Owner of the shared level-progress state
pub struct ProgressCoordinator {
    tuning: ProgressTuning,
    collected: u32,
    total: u32,
    base_intensity: f32,
    current_intensity: f32,
    lerp_from: f32,
    lerp_t: f32,
    interpolating: bool,
    level_complete: bool,
    level_active: bool,
    respawn_point: Vec2,
    schedule: Schedule,
}

impl ProgressCoordinator {
    /// Seconds player input stays disabled after an enemy strike
    pub const CONTROL_LOCKOUT_SECS: f32 = 0.5;

    /// Create an idle coordinator (no level armed)
    pub fn new(tuning: ProgressTuning) -> Self {
        Self {
            tuning,
            collected: 0,
            total: 0,
            base_intensity: 0.0,
            current_intensity: 0.0,
            lerp_from: 0.0,
            lerp_t: 0.0,
            interpolating: false,
            level_complete: false,
            level_active: false,
            respawn_point: Vec2::zeros(),
            schedule: Schedule::new(),
        }
    }

    /// Arm the coordinator for a freshly loaded gameplay level
    pub fn on_level_loaded(&mut self, scene: &LevelScene, hud: &mut dyn ProgressHud) {
        self.collected = 0;
        self.total = scene.collectibles.len() as u32;
        self.base_intensity = scene.ambient_light;
        self.current_intensity = scene.ambient_light;
        self.lerp_from = scene.ambient_light;
        self.lerp_t = 0.0;
        self.interpolating = false;
        self.level_complete = false;
        self.level_active = true;
        self.respawn_point = scene.respawn_point;
        self.schedule.clear();
        hud.set_progress_index(0);
        hud.set_menu_button_visible(false);
        log::info!(
            "level {:?} armed: {} sun pieces, base light {:.2}",
            scene.scene,
            self.total,
            self.base_intensity
        );
    }

    /// Disarm the coordinator (non-gameplay scene loaded)
    pub fn deactivate(&mut self) {
        self.level_active = false;
        self.schedule.clear();
    }

    /// Record a sun-piece pickup
    ///
    /// Restarts the light fade from the intensity at the moment of
    /// collection and moves the progress display to the new count.
    pub fn register_collection(&mut self, hud: &mut dyn ProgressHud) {
        self.collected = (self.collected + 1).min(self.total);
        self.lerp_from = self.current_intensity;
        self.lerp_t = 0.0;
        self.interpolating = true;
        hud.set_progress_index(self.collected as usize);
        log::debug!("sun piece collected ({}/{})", self.collected, self.total);
    }

    /// Queue the post-knockback input restore
    pub fn schedule_control_restore(&mut self) {
        self.schedule
            .after(Self::CONTROL_LOCKOUT_SECS, DeferredAction::RestorePlayerControl);
    }

    /// Frame tick: light fade, completion check, deferred effects
    pub fn frame_tick(
        &mut self,
        delta_time: f32,
        player: &mut Player,
        hud: &mut dyn ProgressHud,
        music: &mut MusicDirector,
    ) {
        self.advance_light(delta_time);
        self.check_completion(player, music);
        for action in self.schedule.tick(delta_time) {
            // Entries cannot be cancelled; each fire re-validates its
            // preconditions and no-ops when stale.
            match action {
                DeferredAction::RestorePlayerControl => {
                    if !self.level_complete {
                        player.set_controls_enabled(true);
                    }
                }
                DeferredAction::RevealCompletionLogo => {
                    if self.level_active && self.level_complete {
                        hud.show_completion_logo();
                    }
                }
                DeferredAction::RevealMenuButton => {
                    if self.level_active && self.level_complete {
                        hud.set_menu_button_visible(true);
                    }
                }
            }
        }
    }

    /// Reset the level to its just-loaded gameplay state
    ///
    /// Teleports the player to the respawn point, reactivates every pooled
    /// entity deactivated since the load, and restores the ambient light.
    /// Idempotent: calling it again changes nothing further.
    pub fn reset_level(
        &mut self,
        player: &mut Player,
        enemies: &mut SlotMap<EnemyKey, Enemy>,
        collectibles: &mut SlotMap<CollectibleKey, Collectible>,
        hud: &mut dyn ProgressHud,
    ) {
        player.core.body.teleport(self.respawn_point);
        self.collected = 0;
        hud.set_progress_index(0);
        for piece in collectibles.values_mut() {
            piece.active = true;
        }
        for enemy in enemies.values_mut() {
            if !enemy.core.active {
                enemy.reactivate();
            }
        }
        self.current_intensity = self.base_intensity;
        self.interpolating = false;
        self.lerp_t = 0.0;
        log::debug!("level reset");
    }

    /// Whether the level has been completed this load (monotonic)
    pub fn level_complete(&self) -> bool {
        self.level_complete
    }

    /// Whether a gameplay level is armed
    pub fn level_active(&self) -> bool {
        self.level_active
    }

    /// Sun pieces collected so far
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Sun pieces in the level
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Ambient light intensity for the render layer to apply this frame
    pub fn light_intensity(&self) -> f32 {
        self.current_intensity
    }

    /// Whether the light fade is still running
    pub fn is_interpolating(&self) -> bool {
        self.interpolating
    }

    /// Intensity the current collection ratio resolves to
    ///
    /// `base + ratio − ratio·base` keeps the result normalized for any
    /// non-zero base; a level with no collectibles keeps its base light.
    pub fn target_intensity(&self) -> f32 {
        if self.total == 0 {
            return self.base_intensity;
        }
        let ratio = self.collected as f32 / self.total as f32;
        if self.base_intensity != 0.0 {
            self.base_intensity + ratio - ratio * self.base_intensity
        } else {
            ratio
        }
    }

    fn advance_light(&mut self, delta_time: f32) {
        if !self.interpolating {
            return;
        }
        self.lerp_t += delta_time / self.tuning.light_fade_duration;
        let target = self.target_intensity();
        if self.lerp_t < 1.0 {
            self.current_intensity = lerp(self.lerp_from, target, self.lerp_t);
        } else {
            self.current_intensity = target;
            self.lerp_t = 0.0;
            self.interpolating = false;
        }
    }

    fn check_completion(&mut self, player: &mut Player, music: &mut MusicDirector) {
        if self.level_active
            && !self.level_complete
            && self.total > 0
            && self.collected == self.total
            && player.grounded()
        {
            self.level_complete = true;
            player.freeze();
            music.on_level_complete();
            self.schedule
                .after(self.tuning.logo_delay, DeferredAction::RevealCompletionLogo);
            self.schedule
                .after(self.tuning.menu_button_delay, DeferredAction::RevealMenuButton);
            log::info!("level complete");
        }
    }
}
