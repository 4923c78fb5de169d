//! Pane-divider resize gesture.
//!
//! Redistributes width between the video pane and the score pane while the
//! user drags the divider. The gesture is an explicit `Idle -> Dragging ->
//! Idle` state machine: `begin` captures the pointer anchor and the video
//! pane's width at that instant, each `drag_to` recomputes the split from
//! the horizontal delta, and `end` always returns to idle; the pointer may
//! be released anywhere, including outside the divider, so ending must never
//! depend on where the drag finishes.
//!
//! While dragging, the engine flags `is_resizing` so the scroll controller
//! holds still instead of fighting the gesture.

/// Width split between the two panes, as the video pane's percentage of the
/// container. Clamped to the container bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSplit {
    pub video_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        /// Pointer x at drag start.
        anchor_x: f64,
        /// Video pane width at drag start.
        anchor_width: f64,
    },
}

/// Divider drag state machine.
#[derive(Debug)]
pub struct ResizeController {
    state: DragState,
}

impl ResizeController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Enter `Dragging`, anchoring at the pointer and current pane width.
    pub fn begin(&mut self, pointer_x: f64, video_pane_width: f64) {
        self.state = DragState::Dragging {
            anchor_x: pointer_x,
            anchor_width: video_pane_width,
        };
    }

    /// Recompute the split for the current pointer position.
    ///
    /// Returns `None` when no drag is in progress (a stray move event).
    pub fn drag_to(&self, pointer_x: f64, container_width: f64) -> Option<PaneSplit> {
        let DragState::Dragging {
            anchor_x,
            anchor_width,
        } = self.state
        else {
            return None;
        };
        if container_width <= 0.0 {
            return None;
        }
        let dx = pointer_x - anchor_x;
        let video_percent = ((anchor_width + dx) * 100.0 / container_width).clamp(0.0, 100.0);
        Some(PaneSplit { video_percent })
    }

    /// Return to `Idle` unconditionally.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_recomputes_split_from_delta() {
        let mut resize = ResizeController::new();
        // Container 1000px, video pane currently 500px, pointer at 500
        resize.begin(500.0, 500.0);
        let split = resize.drag_to(600.0, 1000.0).unwrap();
        assert_eq!(split.video_percent, 60.0);
        let split = resize.drag_to(250.0, 1000.0).unwrap();
        assert_eq!(split.video_percent, 25.0);
    }

    #[test]
    fn test_split_clamped_to_container() {
        let mut resize = ResizeController::new();
        resize.begin(500.0, 500.0);
        assert_eq!(resize.drag_to(5000.0, 1000.0).unwrap().video_percent, 100.0);
        assert_eq!(resize.drag_to(-5000.0, 1000.0).unwrap().video_percent, 0.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let resize = ResizeController::new();
        assert_eq!(resize.drag_to(600.0, 1000.0), None);
    }

    #[test]
    fn test_end_always_returns_to_idle() {
        let mut resize = ResizeController::new();
        resize.begin(500.0, 500.0);
        assert!(resize.is_dragging());
        // Pointer released far outside the divider: end must still work
        resize.end();
        assert!(!resize.is_dragging());
        assert_eq!(resize.drag_to(600.0, 1000.0), None);
        // A second end is harmless
        resize.end();
        assert!(!resize.is_dragging());
    }
}
