//! Per-tick input snapshot
//!
//! The host platform layer samples devices and hands the gameplay layer a
//! plain snapshot; edge detection for the jump button happens upstream.

/// Input state sampled for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Horizontal axis in `[-1, 1]` (negative = left)
    pub horizontal: f32,

    /// Jump button was pressed this tick (edge, not level)
    pub jump_pressed: bool,
}

impl InputSample {
    /// Snapshot with no input active
    pub fn idle() -> Self {
        Self::default()
    }
}
