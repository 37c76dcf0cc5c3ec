//! Per-level simulation runtime
//!
//! Owns the entities spawned for the loaded level and routes the engine's
//! ticks, triggers, and contacts to the behavior units and the progress
//! coordinator. Collision *detection* stays in the host engine; it reports
//! what was touched through the closed category enums below, which are
//! matched exhaustively — unhandled categories fail the build, not the
//! player.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::SlotMap;

use crate::animation::AnimTrigger;
use crate::audio::{cue, AudioDispatch};
use crate::config::GameTuning;
use crate::entity::enemy::Enemy;
use crate::entity::player::Player;
use crate::foundation::math::Vec2;
use crate::foundation::time::LevelClock;
use crate::input::InputSample;
use crate::level::{Collectible, CollectibleKey, EnemyKey, LevelScene};
use crate::physics::perception::PerceptionPort;
use crate::session::Session;
use crate::ui::ProgressHud;

/// Trigger volumes the player can overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTrigger {
    /// A sun piece
    Collectible(CollectibleKey),

    /// An enemy's overlap volume (jump-attack resolution)
    EnemyOverlap(EnemyKey),

    /// A hazard (death-wall) volume
    Hazard,
}

/// Trigger volumes an enemy can overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyTrigger {
    /// A patrol-boundary volume
    PatrolPoint,

    /// A hazard (death-wall) volume
    Hazard,
}

/// Boundary services the runtime needs each tick
pub struct Services<'a> {
    /// Raycast capability (host physics)
    pub perception: &'a dyn PerceptionPort,

    /// One-shot cue sink (host audio)
    pub audio: &'a mut dyn AudioDispatch,

    /// Progress display and completion visuals (host UI)
    pub hud: &'a mut dyn ProgressHud,
}

/// Entities and per-level state for the loaded gameplay scene
pub struct LevelRuntime {
    /// Validated scene content the level was built from
    pub scene: LevelScene,

    /// The player behavior unit
    pub player: Player,

    /// Pooled enemy behavior units
    pub enemies: SlotMap<EnemyKey, Enemy>,

    /// Pooled sun pieces
    pub collectibles: SlotMap<CollectibleKey, Collectible>,

    /// Seconds since this level was loaded
    pub clock: LevelClock,

    rng: StdRng,
}

impl LevelRuntime {
    /// Spawn the level's entities from validated scene content
    pub fn new(scene: LevelScene, tuning: &GameTuning, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let player = Player::spawn(scene.player_spawn, tuning.player.clone());
        let mut enemies = SlotMap::with_key();
        for spawn in &scene.enemies {
            enemies.insert(Enemy::spawn(
                spawn.position,
                spawn.patrols,
                tuning.enemy.clone(),
                &mut rng,
            ));
        }
        let mut collectibles = SlotMap::with_key();
        for &position in &scene.collectibles {
            collectibles.insert(Collectible {
                position,
                active: true,
            });
        }
        Self {
            scene,
            player,
            enemies,
            collectibles,
            clock: LevelClock::new(),
            rng,
        }
    }

    /// Variable-rate frame tick: input-driven state, timers, coordination
    pub fn frame_tick(
        &mut self,
        delta_time: f32,
        input: InputSample,
        session: &mut Session,
        services: &mut Services<'_>,
    ) {
        self.clock.advance(delta_time);

        let died = self.player.frame_tick(input, services.audio);
        if died {
            session.progress.reset_level(
                &mut self.player,
                &mut self.enemies,
                &mut self.collectibles,
                services.hud,
            );
        }

        let player_position = self.player.core.body.position;
        let level_complete = session.progress.level_complete();
        for enemy in self.enemies.values_mut() {
            enemy.frame_tick(
                delta_time,
                player_position,
                services.perception,
                services.audio,
                level_complete,
                &mut self.rng,
            );
        }

        let Session {
            progress, music, ..
        } = session;
        progress.frame_tick(delta_time, &mut self.player, services.hud, music);
    }

    /// Fixed-rate physics tick: perception checks and velocity application
    pub fn physics_tick(&mut self, input: InputSample, services: &mut Services<'_>) {
        self.player.physics_tick(
            input,
            services.perception,
            services.audio,
            self.clock.since_load(),
        );
        for enemy in self.enemies.values_mut() {
            enemy.physics_tick();
        }
    }

    /// The player overlapped a trigger volume
    pub fn on_player_trigger(
        &mut self,
        trigger: PlayerTrigger,
        session: &mut Session,
        services: &mut Services<'_>,
    ) {
        match trigger {
            PlayerTrigger::Collectible(key) => {
                let Some(piece) = self.collectibles.get_mut(key) else {
                    return;
                };
                if !piece.active {
                    return;
                }
                services.audio.play_cue(cue::COLLECT_ITEM);
                piece.active = false;
                session.progress.register_collection(services.hud);
            }
            PlayerTrigger::EnemyOverlap(key) => {
                let Some(enemy) = self.enemies.get_mut(key) else {
                    return;
                };
                // A jump-attack only connects falling onto a live enemy.
                if !enemy.core.active || !self.player.is_falling() {
                    return;
                }
                services.audio.play_cue(cue::JUMP_ATTACK);
                enemy.take_damage(self.player.attack_power());
                self.player.rebound();
            }
            PlayerTrigger::Hazard => {
                session.progress.reset_level(
                    &mut self.player,
                    &mut self.enemies,
                    &mut self.collectibles,
                    services.hud,
                );
            }
        }
    }

    /// An enemy overlapped a trigger volume
    pub fn on_enemy_trigger(&mut self, key: EnemyKey, trigger: EnemyTrigger) {
        let Some(enemy) = self.enemies.get_mut(key) else {
            return;
        };
        match trigger {
            EnemyTrigger::PatrolPoint => enemy.on_patrol_point(),
            EnemyTrigger::Hazard => enemy.on_hazard(),
        }
    }

    /// Solid contact between an enemy and the player (enemy strike)
    pub fn on_enemy_player_contact(
        &mut self,
        key: EnemyKey,
        session: &mut Session,
        services: &mut Services<'_>,
    ) {
        let Some(enemy) = self.enemies.get_mut(key) else {
            return;
        };
        if !enemy.core.active || !enemy.combat_enabled() || enemy.core.health <= 0 {
            return;
        }
        enemy.core.anim.trigger(AnimTrigger::Attack);
        self.player.core.anim.trigger(AnimTrigger::Knockback);
        // Disable the controller so the knockback impulse reads; the
        // schedule restores input after the lockout window.
        self.player.set_controls_enabled(false);
        self.player
            .core
            .body
            .apply_impulse(Vec2::new(-enemy.knockback_power(), 0.0));
        services.audio.play_cue(cue::ENEMY_ATTACK);
        session.progress.schedule_control_restore();
        self.player.core.take_damage(enemy.attack_power());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{MusicDirector, NullMusic};
    use crate::config::EnemyTuning;
    use crate::level::{EnemySpawn, SceneId};
    use crate::physics::layers::LayerMask;
    use crate::physics::perception::RayHit;
    use crate::ui::NullHud;

    struct FlatGround;

    impl PerceptionPort for FlatGround {
        fn raycast(
            &self,
            origin: Vec2,
            direction: Vec2,
            max_distance: f32,
            mask: LayerMask,
        ) -> Option<RayHit> {
            (mask.contains(LayerMask::GROUND) && direction.y < 0.0).then_some(RayHit {
                point: Vec2::new(origin.x, 0.0),
                distance: max_distance,
                layers: LayerMask::GROUND,
            })
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        cues: Vec<String>,
    }

    impl AudioDispatch for RecordingAudio {
        fn play_cue(&mut self, name: &str) {
            self.cues.push(name.to_owned());
        }
    }

    fn scene() -> LevelScene {
        LevelScene {
            scene: SceneId::Level(1),
            ambient_light: 0.0,
            player_spawn: Vec2::new(0.0, 1.0),
            respawn_point: Vec2::new(-3.0, 1.0),
            collectibles: vec![Vec2::new(4.0, 1.0)],
            enemies: vec![EnemySpawn {
                position: Vec2::new(8.0, 1.0),
                patrols: true,
            }],
        }
    }

    fn harness() -> (LevelRuntime, Session) {
        let mut tuning = GameTuning::default();
        tuning.enemy = EnemyTuning {
            health: 2,
            ..EnemyTuning::default()
        };
        let session = Session::new(
            tuning.clone(),
            MusicDirector::new(Box::new(NullMusic), Vec::new(), "level_complete"),
        );
        let runtime = LevelRuntime::new(scene(), &tuning, 7);
        (runtime, session)
    }

    #[test]
    fn test_two_jump_attacks_deactivate_enemy_in_place() {
        let (mut runtime, mut session) = harness();
        let mut audio = RecordingAudio::default();
        let key = runtime.enemies.keys().next().unwrap();
        let enemy_position = runtime.enemies[key].core.body.position;

        for _ in 0..2 {
            let mut services = Services {
                perception: &FlatGround,
                audio: &mut audio,
                hud: &mut NullHud,
            };
            runtime.player.core.body.velocity.y = -5.0;
            runtime.on_player_trigger(
                PlayerTrigger::EnemyOverlap(key),
                &mut session,
                &mut services,
            );
            runtime.frame_tick(0.05, InputSample::idle(), &mut session, &mut services);
        }

        let enemy = &runtime.enemies[key];
        assert!(!enemy.core.active);
        assert_eq!(enemy.core.health, 2);
        assert_eq!(enemy.core.body.position, enemy_position);
        assert_eq!(
            audio.cues.iter().filter(|c| *c == cue::JUMP_ATTACK).count(),
            2
        );
    }

    #[test]
    fn test_jump_attack_requires_falling() {
        let (mut runtime, mut session) = harness();
        let mut audio = RecordingAudio::default();
        let mut services = Services {
            perception: &FlatGround,
            audio: &mut audio,
            hud: &mut NullHud,
        };
        let key = runtime.enemies.keys().next().unwrap();

        runtime.player.core.body.velocity.y = 2.0;
        runtime.on_player_trigger(
            PlayerTrigger::EnemyOverlap(key),
            &mut session,
            &mut services,
        );

        assert_eq!(runtime.enemies[key].core.health, 2);
        assert!(audio.cues.is_empty());
    }

    #[test]
    fn test_hazard_resets_player_to_respawn_point() {
        let (mut runtime, mut session) = harness();
        let mut audio = RecordingAudio::default();
        let mut hud = NullHud;
        let mut services = Services {
            perception: &FlatGround,
            audio: &mut audio,
            hud: &mut hud,
        };
        session.progress.on_level_loaded(&runtime.scene, services.hud);
        runtime.player.core.body.position = Vec2::new(20.0, -8.0);

        runtime.on_player_trigger(PlayerTrigger::Hazard, &mut session, &mut services);

        assert_eq!(runtime.player.core.body.position, Vec2::new(-3.0, 1.0));
        assert_eq!(session.progress.collected(), 0);
    }

    #[test]
    fn test_enemy_strike_locks_out_player_and_restores_after_window() {
        let (mut runtime, mut session) = harness();
        let mut audio = RecordingAudio::default();
        let mut hud = NullHud;
        let key = runtime.enemies.keys().next().unwrap();
        {
            let mut services = Services {
                perception: &FlatGround,
                audio: &mut audio,
                hud: &mut hud,
            };
            session.progress.on_level_loaded(&runtime.scene, services.hud);
            runtime.on_enemy_player_contact(key, &mut session, &mut services);
        }

        assert!(!runtime.player.controls_enabled());
        assert!(runtime.player.core.body.velocity.x < 0.0);
        assert_eq!(audio.cues, vec![cue::ENEMY_ATTACK]);
        assert_eq!(runtime.player.core.health, 0);

        // The lockout window elapses; the schedule restores input and the
        // now-detected death resets the level.
        for _ in 0..12 {
            let mut services = Services {
                perception: &FlatGround,
                audio: &mut audio,
                hud: &mut hud,
            };
            runtime.frame_tick(0.05, InputSample::idle(), &mut session, &mut services);
        }

        assert!(runtime.player.controls_enabled());
        assert_eq!(runtime.player.core.health, 1);
        assert_eq!(runtime.player.core.body.position, Vec2::new(-3.0, 1.0));
    }

    #[test]
    fn test_inactive_collectible_cannot_be_collected_twice() {
        let (mut runtime, mut session) = harness();
        let mut audio = RecordingAudio::default();
        let mut hud = NullHud;
        let key = runtime.collectibles.keys().next().unwrap();
        {
            let mut services = Services {
                perception: &FlatGround,
                audio: &mut audio,
                hud: &mut hud,
            };
            session.progress.on_level_loaded(&runtime.scene, services.hud);
            runtime.on_player_trigger(
                PlayerTrigger::Collectible(key),
                &mut session,
                &mut services,
            );
            runtime.on_player_trigger(
                PlayerTrigger::Collectible(key),
                &mut session,
                &mut services,
            );
        }

        assert_eq!(session.progress.collected(), 1);
        assert_eq!(
            audio
                .cues
                .iter()
                .filter(|c| *c == cue::COLLECT_ITEM)
                .count(),
            1
        );
    }

    #[test]
    fn test_patrol_point_trigger_reverses_enemy() {
        let (mut runtime, _session) = harness();
        let key = runtime.enemies.keys().next().unwrap();
        runtime.enemies[key].physics_tick();
        let before = runtime.enemies[key].core.body.velocity.x;

        runtime.on_enemy_trigger(key, EnemyTrigger::PatrolPoint);
        runtime.enemies[key].physics_tick();

        assert_eq!(runtime.enemies[key].core.body.velocity.x, -before);
    }
}
