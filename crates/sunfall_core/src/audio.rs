//! Audio dispatch boundary
//!
//! Gameplay code submits named cues and track changes; mixing, loading,
//! and playback belong to the host audio backend. Dispatch is
//! fire-and-forget with no ordering guarantee beyond "submitted this
//! tick".

use crate::level::SceneId;

/// Cue names understood by the shipped sound bank
pub mod cue {
    /// Sun piece collected
    pub const COLLECT_ITEM: &str = "collect_item";

    /// Footsteps loop (driven by the animation layer)
    pub const FOOTSTEPS: &str = "footsteps";

    /// Player landed after being airborne
    pub const LAND: &str = "land";

    /// Player jumped
    pub const JUMP: &str = "jump";

    /// Player bounced off an enemy's head
    pub const JUMP_ATTACK: &str = "jump_attack";

    /// Enemy struck the player
    pub const ENEMY_ATTACK: &str = "enemy_attack";

    /// Enemy spotted the player
    pub const ENEMY_AGGRO: &str = "enemy_aggro";
}

/// One-shot cue submission, implemented by the host audio backend
pub trait AudioDispatch {
    /// Submit a named cue for playback this tick
    fn play_cue(&mut self, name: &str);
}

/// Audio sink that discards every cue
pub struct NullAudio;

impl AudioDispatch for NullAudio {
    fn play_cue(&mut self, _name: &str) {}
}

/// Background-track playback, implemented by the host audio backend
pub trait MusicChannel {
    /// Replace the current background track and start it from the top
    fn play(&mut self, track: &str);
}

/// Music sink that discards every track change
pub struct NullMusic;

impl MusicChannel for NullMusic {
    fn play(&mut self, _track: &str) {}
}

/// Cross-scene music state
///
/// Owns the scene → track table and the completion sting. Lives in the
/// [`Session`](crate::session::Session) so the current track survives
/// level reloads.
pub struct MusicDirector {
    channel: Box<dyn MusicChannel>,
    scene_tracks: Vec<String>,
    completion_track: String,
    current: Option<String>,
}

impl MusicDirector {
    /// Create a director with a per-scene track table
    ///
    /// `scene_tracks` is indexed by scene: entry 0 is the main menu, entry
    /// `n` is level `n`.
    pub fn new(
        channel: Box<dyn MusicChannel>,
        scene_tracks: Vec<String>,
        completion_track: &str,
    ) -> Self {
        Self {
            channel,
            scene_tracks,
            completion_track: completion_track.to_owned(),
            current: None,
        }
    }

    /// Start the track assigned to the freshly loaded scene
    pub fn on_scene_loaded(&mut self, scene: SceneId) {
        let index = scene.track_index();
        match self.scene_tracks.get(index) {
            Some(track) => {
                let track = track.clone();
                self.channel.play(&track);
                self.current = Some(track);
            }
            None => {
                log::warn!("no music track configured for scene {scene:?}");
            }
        }
    }

    /// Switch to the level-complete track
    pub fn on_level_complete(&mut self) {
        self.channel.play(&self.completion_track);
        self.current = Some(self.completion_track.clone());
    }

    /// Track currently submitted to the channel, if any
    pub fn current_track(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
