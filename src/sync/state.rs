//! Session-lived synchronization state.
//!
//! One instance exists per loaded score/video pair and is discarded with the
//! view. Fields are private: dependents read through the getters, and only
//! the engine's own operations (tick, seek, toggles, resize transitions)
//! mutate them through the crate-visible setters.

use crate::position::Position;

/// The engine's owned, session-lived state.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    current_position: Position,
    auto_scroll_enabled: bool,
    is_resizing: bool,
}

impl SyncState {
    /// Fresh state for a newly loaded document: nothing selected,
    /// auto-scroll on, no resize in progress.
    pub fn new() -> Self {
        Self {
            current_position: Position::None,
            auto_scroll_enabled: true,
            is_resizing: false,
        }
    }

    /// The authoritative current position.
    pub fn current_position(&self) -> Position {
        self.current_position
    }

    pub fn auto_scroll_enabled(&self) -> bool {
        self.auto_scroll_enabled
    }

    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    pub(crate) fn set_current_position(&mut self, position: Position) {
        self.current_position = position;
    }

    pub(crate) fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll_enabled = enabled;
    }

    pub(crate) fn set_resizing(&mut self, resizing: bool) {
        self.is_resizing = resizing;
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}
