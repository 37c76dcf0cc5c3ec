//! # Sunfall Core
//!
//! Gameplay simulation core for Sunfall, a 2D side-scrolling platformer
//! about gathering sun pieces to bring light back to a darkened world.
//!
//! This crate owns the per-tick gameplay logic and nothing else:
//!
//! - **Entity behavior units**: the player (locomotion, jumping, combat,
//!   death) and enemies (patrol, aggro, combat, death), driven by a
//!   variable-rate frame tick and a fixed-rate physics tick.
//! - **Level-progress coordination**: collection counting, the ambient
//!   light fade, level-completion detection, and the level reset protocol.
//! - **Session services**: the progress coordinator and music director,
//!   constructed once by the application root and passed by reference.
//!
//! Rendering, audio playback, scene loading, and collision detection live
//! outside this crate and are consumed through the boundary traits in
//! [`physics::perception`], [`audio`], and [`ui`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sunfall_core::prelude::*;
//!
//! fn main() -> Result<(), SetupError> {
//!     let music = MusicDirector::new(Box::new(NullMusic), Vec::new(), "level_complete");
//!     let mut session = Session::new(GameTuning::default(), music);
//!
//!     let definition = LevelDefinition {
//!         scene: SceneId::Level(1),
//!         ambient_light: 0.0,
//!         player_spawn: Vec2::new(0.0, 1.0),
//!         respawn_point: Some(Vec2::new(0.0, 1.0)),
//!         collectibles: vec![Vec2::new(4.0, 1.0)],
//!         enemies: Vec::new(),
//!         progress_hud_present: true,
//!         menu_control_present: true,
//!     };
//!     let mut hud = NullHud;
//!     let runtime = session.on_scene_loaded(&definition, 7, &mut hud)?;
//!     assert!(runtime.is_some());
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod config;
pub mod physics;
pub mod audio;
pub mod animation;
pub mod input;
pub mod entity;
pub mod level;
pub mod session;
pub mod ui;

/// Common imports for gameplay code
pub mod prelude {
    pub use crate::{
        audio::{AudioDispatch, MusicChannel, MusicDirector, NullAudio, NullMusic},
        config::{EnemyTuning, GameTuning, PlayerTuning, ProgressTuning},
        entity::{enemy::Enemy, player::Player},
        foundation::math::Vec2,
        input::InputSample,
        level::{
            runtime::{EnemyTrigger, LevelRuntime, PlayerTrigger, Services},
            LevelDefinition, SceneId, SetupError,
        },
        physics::{
            layers::LayerMask,
            perception::{PerceptionPort, RayHit},
        },
        session::{SceneRequest, Session},
        ui::{NullHud, ProgressHud},
    };
}
