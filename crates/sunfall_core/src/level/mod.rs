//! Level content and progress coordination
//!
//! A level is authored as a [`LevelDefinition`] (plain data, RON-friendly),
//! validated into a [`LevelScene`] on load, and simulated by
//! [`runtime::LevelRuntime`]. The [`progress::ProgressCoordinator`] owns
//! the shared collection/completion state and outlives individual levels.

pub mod progress;
pub mod runtime;
pub mod schedule;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::Vec2;

slotmap::new_key_type! {
    /// Stable key into a level's enemy pool
    pub struct EnemyKey;

    /// Stable key into a level's collectible pool
    pub struct CollectibleKey;
}

/// Identity of a loaded scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneId {
    /// The main menu (no gameplay content)
    MainMenu,

    /// Gameplay level `n` (1-based)
    Level(u32),
}

impl SceneId {
    /// Whether this scene carries gameplay content
    pub fn is_level(self) -> bool {
        matches!(self, Self::Level(_))
    }

    /// Index into the music track table (0 = main menu)
    pub fn track_index(self) -> usize {
        match self {
            Self::MainMenu => 0,
            Self::Level(n) => n as usize,
        }
    }
}

/// Missing-reference conditions detected during level setup
///
/// Downstream operations (reset, HUD updates) assume these objects exist
/// unconditionally, so their absence aborts the level load.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The scene has no respawn point for the reset protocol
    #[error("no respawn point found in the loaded scene")]
    MissingRespawnPoint,

    /// The scene has no collection-progress display
    #[error("no collection-progress display found in the loaded scene")]
    MissingProgressHud,

    /// The scene has no return-to-menu control
    #[error("no menu control found in the loaded scene")]
    MissingMenuControl,
}

/// Enemy placement as authored in a level definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Spawn position
    pub position: Vec2,

    /// Whether the enemy patrols from spawn (false = ambush enemy)
    #[serde(default = "default_true")]
    pub patrols: bool,
}

/// Raw level content as authored in data files (unvalidated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Scene identity
    pub scene: SceneId,

    /// Ambient light intensity before any sun piece is collected
    pub ambient_light: f32,

    /// Where the player enters the level
    pub player_spawn: Vec2,

    /// Where the reset protocol returns the player (required for levels)
    pub respawn_point: Option<Vec2>,

    /// Sun-piece positions
    #[serde(default)]
    pub collectibles: Vec<Vec2>,

    /// Enemy placements
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,

    /// Whether the scene's canvas carries the progress display
    #[serde(default = "default_true")]
    pub progress_hud_present: bool,

    /// Whether the scene's canvas carries the menu control
    #[serde(default = "default_true")]
    pub menu_control_present: bool,
}

fn default_true() -> bool {
    true
}

/// Validated scene content for a gameplay level
#[derive(Debug, Clone)]
pub struct LevelScene {
    /// Scene identity
    pub scene: SceneId,

    /// Base ambient light intensity
    pub ambient_light: f32,

    /// Player entry position
    pub player_spawn: Vec2,

    /// Reset-protocol respawn position
    pub respawn_point: Vec2,

    /// Sun-piece positions
    pub collectibles: Vec<Vec2>,

    /// Enemy placements
    pub enemies: Vec<EnemySpawn>,
}

impl LevelScene {
    /// Validate a freshly loaded level's content
    ///
    /// Surfaces missing-reference conditions loudly: the error is logged
    /// and level setup must be aborted, since the reset and HUD paths
    /// assume these objects unconditionally.
    pub fn discover(definition: &LevelDefinition) -> Result<Self, SetupError> {
        let Some(respawn_point) = definition.respawn_point else {
            let err = SetupError::MissingRespawnPoint;
            log::error!("level setup failed: {err}");
            return Err(err);
        };
        if !definition.progress_hud_present {
            let err = SetupError::MissingProgressHud;
            log::error!("level setup failed: {err}");
            return Err(err);
        }
        if !definition.menu_control_present {
            let err = SetupError::MissingMenuControl;
            log::error!("level setup failed: {err}");
            return Err(err);
        }
        Ok(Self {
            scene: definition.scene,
            ambient_light: definition.ambient_light,
            player_spawn: definition.player_spawn,
            respawn_point,
            collectibles: definition.collectibles.clone(),
            enemies: definition.enemies.clone(),
        })
    }
}

/// A single-use sun piece
#[derive(Debug, Clone)]
pub struct Collectible {
    /// World position
    pub position: Vec2,

    /// Still available for pickup
    pub active: bool,
}
