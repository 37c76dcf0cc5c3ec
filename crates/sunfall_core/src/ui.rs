//! Scene-UI boundary
//!
//! The coordinator reports collection progress and completion effects
//! through this trait; sprite atlases, canvases, and widget plumbing are
//! the host UI layer's problem.

/// Collection-progress display and completion visuals for the loaded level
pub trait ProgressHud {
    /// Show the sprite for `index` pieces collected (0 = none)
    fn set_progress_index(&mut self, index: usize);

    /// Instantiate the completion logo at the camera position
    fn show_completion_logo(&mut self);

    /// Show or hide the return-to-menu control
    fn set_menu_button_visible(&mut self, visible: bool);
}

/// HUD stub that ignores every update
pub struct NullHud;

impl ProgressHud for NullHud {
    fn set_progress_index(&mut self, _index: usize) {}

    fn show_completion_logo(&mut self) {}

    fn set_menu_button_visible(&mut self, _visible: bool) {}
}
