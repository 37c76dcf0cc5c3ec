//! Headless demo drive of the Sunfall gameplay core
//!
//! Loads a level from RON, stands in for the host engine (flat-ground
//! perception, toy overlap detection, console-logging boundaries), and
//! scripts a playthrough: walk right across the meadow, gather the sun
//! pieces, and watch the level complete.

use sunfall_core::audio::{AudioDispatch, MusicChannel, MusicDirector};
use sunfall_core::config::GameTuning;
use sunfall_core::foundation::math::Vec2;
use sunfall_core::input::InputSample;
use sunfall_core::level::runtime::{EnemyTrigger, LevelRuntime, PlayerTrigger, Services};
use sunfall_core::level::LevelDefinition;
use sunfall_core::physics::layers::LayerMask;
use sunfall_core::physics::perception::{PerceptionPort, RayHit};
use sunfall_core::session::Session;
use sunfall_core::ui::ProgressHud;

const DT: f32 = 1.0 / 60.0;
const GROUND_HEIGHT: f32 = 0.0;
const STAND_HEIGHT: f32 = 1.0;
const PATROL_RANGE: f32 = 4.0;
const OVERLAP_RADIUS: f32 = 0.8;

/// Stand-in for the host physics raycaster: one flat ground plane plus
/// the player's box for enemy sight lines.
struct DemoWorld {
    player_center: Vec2,
    player_half_height: f32,
}

impl PerceptionPort for DemoWorld {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        if mask.contains(LayerMask::GROUND) && direction.y < 0.0 {
            let drop = origin.y - GROUND_HEIGHT;
            if (0.0..=max_distance).contains(&drop) {
                return Some(RayHit {
                    point: Vec2::new(origin.x, GROUND_HEIGHT),
                    distance: drop,
                    layers: LayerMask::GROUND,
                });
            }
        }
        if mask.contains(LayerMask::PLAYER) && direction.x != 0.0 {
            let reach = (self.player_center.x - origin.x) / direction.x;
            let level = (self.player_center.y - origin.y).abs() <= self.player_half_height;
            if reach > 0.0 && reach <= max_distance && level {
                return Some(RayHit {
                    point: Vec2::new(self.player_center.x, origin.y),
                    distance: reach,
                    layers: LayerMask::PLAYER,
                });
            }
        }
        None
    }
}

struct ConsoleAudio;

impl AudioDispatch for ConsoleAudio {
    fn play_cue(&mut self, name: &str) {
        log::info!("cue: {name}");
    }
}

struct ConsoleMusic;

impl MusicChannel for ConsoleMusic {
    fn play(&mut self, track: &str) {
        log::info!("music: {track}");
    }
}

struct ConsoleHud;

impl ProgressHud for ConsoleHud {
    fn set_progress_index(&mut self, index: usize) {
        log::info!("hud: progress sprite {index}");
    }

    fn show_completion_logo(&mut self) {
        log::info!("hud: completion logo");
    }

    fn set_menu_button_visible(&mut self, visible: bool) {
        log::info!("hud: menu button visible = {visible}");
    }
}

fn nearest_spawn_distance(spawn_xs: &[f32], x: f32) -> f32 {
    spawn_xs
        .iter()
        .map(|spawn| (spawn - x).abs())
        .fold(f32::INFINITY, f32::min)
}

/// Toy overlap detection standing in for the host collision system.
fn detect_triggers(
    runtime: &mut LevelRuntime,
    session: &mut Session,
    services: &mut Services<'_>,
) {
    let player = runtime.player.core.body.position;

    let piece_hits: Vec<_> = runtime
        .collectibles
        .iter()
        .filter(|(_, piece)| piece.active && (piece.position - player).norm() < OVERLAP_RADIUS)
        .map(|(key, _)| key)
        .collect();
    for key in piece_hits {
        runtime.on_player_trigger(PlayerTrigger::Collectible(key), session, services);
    }

    let enemy_hits: Vec<_> = runtime
        .enemies
        .iter()
        .filter(|(_, enemy)| {
            enemy.core.active && (enemy.core.body.position - player).norm() < OVERLAP_RADIUS
        })
        .map(|(key, _)| key)
        .collect();
    for key in enemy_hits {
        if runtime.player.is_falling() {
            runtime.on_player_trigger(PlayerTrigger::EnemyOverlap(key), session, services);
        } else {
            runtime.on_enemy_player_contact(key, session, services);
        }
    }

    let spawn_xs: Vec<f32> = runtime
        .scene
        .enemies
        .iter()
        .map(|spawn| spawn.position.x)
        .collect();
    let boundary_hits: Vec<_> = runtime
        .enemies
        .iter()
        .filter(|(_, enemy)| {
            enemy.core.active
                && nearest_spawn_distance(&spawn_xs, enemy.core.body.position.x) > PATROL_RANGE
        })
        .map(|(key, _)| key)
        .collect();
    for key in boundary_hits {
        runtime.on_enemy_trigger(key, EnemyTrigger::PatrolPoint);
    }
}

fn scripted_input(player_x: f32) -> InputSample {
    InputSample {
        // Walk right until past the last sun piece, then hold position.
        horizontal: if player_x < 13.0 { 1.0 } else { 0.0 },
        jump_pressed: false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let definition: LevelDefinition = ron::from_str(include_str!("../assets/level1.ron"))?;
    let music = MusicDirector::new(
        Box::new(ConsoleMusic),
        vec!["menu_theme".to_owned(), "meadow_theme".to_owned()],
        "level_complete",
    );
    let mut session = Session::new(GameTuning::default(), music);
    let mut hud = ConsoleHud;
    let mut runtime = session
        .on_scene_loaded(&definition, 0xC0FFEE, &mut hud)?
        .expect("level1.ron is a gameplay scene");

    let gravity = session.tuning.player.gravity;
    let mut audio = ConsoleAudio;

    for _ in 0..(30.0 / DT) as u32 {
        let input = scripted_input(runtime.player.core.body.position.x);
        let world = DemoWorld {
            player_center: runtime.player.core.body.position,
            player_half_height: 0.5,
        };
        let mut services = Services {
            perception: &world,
            audio: &mut audio,
            hud: &mut hud,
        };

        runtime.physics_tick(input, &mut services);
        runtime.frame_tick(DT, input, &mut session, &mut services);
        detect_triggers(&mut runtime, &mut session, &mut services);

        // Host-physics stand-in: gravity, integration, ground clamp.
        if !runtime.player.grounded() {
            runtime.player.core.body.velocity.y += gravity * DT;
        }
        runtime.player.core.body.integrate(DT);
        let body = &mut runtime.player.core.body;
        if body.position.y < GROUND_HEIGHT + STAND_HEIGHT && body.velocity.y <= 0.0 {
            body.position.y = GROUND_HEIGHT + STAND_HEIGHT;
            body.velocity.y = 0.0;
        }
        for enemy in runtime.enemies.values_mut() {
            enemy.core.body.integrate(DT);
        }

        // Keep running long enough after completion to show the staggered
        // logo and menu reveals, then stop.
        if session.progress.level_complete() && runtime.clock.since_load() > 6.0 {
            break;
        }
    }

    log::info!(
        "run finished: {}/{} sun pieces, light {:.2}, complete = {}",
        session.progress.collected(),
        session.progress.total(),
        session.progress.light_intensity(),
        session.progress.level_complete()
    );
    let request = session.return_to_main_menu();
    log::info!("scene request: {request:?}");
    Ok(())
}
