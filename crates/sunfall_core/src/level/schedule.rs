//! Deferred gameplay effects
//!
//! Delayed effects are explicit timer entries polled once per frame tick,
//! not engine callbacks. Entries cannot be cancelled; the handler
//! re-validates its preconditions at fire time and no-ops when stale
//! (e.g. the owning state changed while the timer ran).

/// Closed set of deferrable effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Re-enable player input after the knockback window
    RestorePlayerControl,

    /// Show the completion logo
    RevealCompletionLogo,

    /// Show the return-to-menu control
    RevealMenuButton,
}

#[derive(Debug, Clone)]
struct Entry {
    remaining: f32,
    action: DeferredAction,
}

/// Per-frame-polled timer schedule
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire once `delay` seconds have elapsed
    pub fn after(&mut self, delay: f32, action: DeferredAction) {
        self.entries.push(Entry {
            remaining: delay,
            action,
        });
    }

    /// Advance all timers and drain the actions that came due
    ///
    /// Due actions are returned in the order they were queued.
    pub fn tick(&mut self, delta_time: f32) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.entries.retain_mut(|entry| {
            entry.remaining -= delta_time;
            if entry.remaining <= 0.0 {
                due.push(entry.action);
                false
            } else {
                true
            }
        });
        due
    }

    /// Whether any entries are pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry (scene unload)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
