//! Cross-scene session services
//!
//! The session owns everything that must survive scene transitions: the
//! progress coordinator and the music director. Exactly one instance
//! exists per process — the application root constructs it before the
//! first scene load and passes it by reference to whatever needs it.
//! There is no ambient global lookup.

use crate::audio::MusicDirector;
use crate::config::GameTuning;
use crate::level::progress::ProgressCoordinator;
use crate::level::runtime::LevelRuntime;
use crate::level::{LevelDefinition, LevelScene, SetupError};
use crate::ui::ProgressHud;

/// Scene transition requested of the host scene loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Load the main menu
    MainMenu,

    /// Load the first gameplay level
    FirstLevel,

    /// Exit to desktop
    Quit,
}

/// Process-wide holder of the cross-scene services
pub struct Session {
    /// Gameplay tuning applied to every spawned entity
    pub tuning: GameTuning,

    /// The single progress coordinator
    pub progress: ProgressCoordinator,

    /// The single music director
    pub music: MusicDirector,
}

impl Session {
    /// Construct the session (once, at application startup)
    pub fn new(tuning: GameTuning, music: MusicDirector) -> Self {
        Self {
            progress: ProgressCoordinator::new(tuning.progress.clone()),
            tuning,
            music,
        }
    }

    /// React to a finished scene load
    ///
    /// Starts the scene's music, then — for gameplay levels only —
    /// validates the scene content, arms the progress coordinator, and
    /// spawns the level runtime. Non-gameplay scenes disarm the
    /// coordinator and return `None`.
    pub fn on_scene_loaded(
        &mut self,
        definition: &LevelDefinition,
        seed: u64,
        hud: &mut dyn ProgressHud,
    ) -> Result<Option<LevelRuntime>, SetupError> {
        self.music.on_scene_loaded(definition.scene);
        if !definition.scene.is_level() {
            self.progress.deactivate();
            return Ok(None);
        }
        let scene = LevelScene::discover(definition)?;
        self.progress.on_level_loaded(&scene, hud);
        Ok(Some(LevelRuntime::new(scene, &self.tuning, seed)))
    }

    /// Request a return to the main menu
    pub fn return_to_main_menu(&mut self) -> SceneRequest {
        self.progress.deactivate();
        SceneRequest::MainMenu
    }

    /// Request the first gameplay level
    pub fn start_first_level(&self) -> SceneRequest {
        SceneRequest::FirstLevel
    }

    /// Request process exit
    pub fn quit(&self) -> SceneRequest {
        SceneRequest::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{MusicChannel, MusicDirector};
    use crate::foundation::math::Vec2;
    use crate::level::SceneId;
    use crate::ui::NullHud;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingChannel(Rc<RefCell<Vec<String>>>);

    impl MusicChannel for RecordingChannel {
        fn play(&mut self, track: &str) {
            self.0.borrow_mut().push(track.to_owned());
        }
    }

    fn session_with_log() -> (Session, Rc<RefCell<Vec<String>>>) {
        let played = Rc::new(RefCell::new(Vec::new()));
        let music = MusicDirector::new(
            Box::new(RecordingChannel(Rc::clone(&played))),
            vec!["menu_theme".to_owned(), "level1_theme".to_owned()],
            "victory_sting",
        );
        (Session::new(GameTuning::default(), music), played)
    }

    fn level_definition() -> LevelDefinition {
        LevelDefinition {
            scene: SceneId::Level(1),
            ambient_light: 0.0,
            player_spawn: Vec2::new(0.0, 1.0),
            respawn_point: Some(Vec2::new(0.0, 1.0)),
            collectibles: vec![Vec2::new(4.0, 1.0)],
            enemies: Vec::new(),
            progress_hud_present: true,
            menu_control_present: true,
        }
    }

    #[test]
    fn test_level_load_arms_coordinator_and_spawns_runtime() {
        let (mut session, played) = session_with_log();

        let runtime = session
            .on_scene_loaded(&level_definition(), 7, &mut NullHud)
            .expect("valid level")
            .expect("gameplay scene");

        assert!(session.progress.level_active());
        assert_eq!(session.progress.total(), 1);
        assert_eq!(runtime.collectibles.len(), 1);
        assert_eq!(*played.borrow(), vec!["level1_theme"]);
    }

    #[test]
    fn test_menu_load_disarms_coordinator() {
        let (mut session, played) = session_with_log();
        session
            .on_scene_loaded(&level_definition(), 7, &mut NullHud)
            .expect("valid level");

        let mut menu = level_definition();
        menu.scene = SceneId::MainMenu;
        let runtime = session
            .on_scene_loaded(&menu, 7, &mut NullHud)
            .expect("menu load");

        assert!(runtime.is_none());
        assert!(!session.progress.level_active());
        assert_eq!(played.borrow().last().map(String::as_str), Some("menu_theme"));
    }

    #[test]
    fn test_broken_level_aborts_setup() {
        let (mut session, _played) = session_with_log();
        let mut def = level_definition();
        def.respawn_point = None;

        let result = session.on_scene_loaded(&def, 7, &mut NullHud);

        assert!(matches!(result, Err(SetupError::MissingRespawnPoint)));
        assert!(!session.progress.level_active());
    }

    #[test]
    fn test_scene_requests() {
        let (mut session, _played) = session_with_log();
        session
            .on_scene_loaded(&level_definition(), 7, &mut NullHud)
            .expect("valid level");

        assert_eq!(session.return_to_main_menu(), SceneRequest::MainMenu);
        assert!(!session.progress.level_active());
        assert_eq!(session.start_first_level(), SceneRequest::FirstLevel);
        assert_eq!(session.quit(), SceneRequest::Quit);
    }
}
