//! Auto-scroll policy.
//!
//! Keeps the score pane aligned with the current position: when a new
//! position arrives and auto-scroll is allowed, the pane is smooth-scrolled
//! so the position's block sits at a fixed reference line near the top.
//!
//! Movement markers have no block of their own; they redirect to the
//! movement's first block before any geometry is resolved. Scrolling is
//! suppressed while the user drags the pane divider, and re-delivery of the
//! position already scrolled to is a no-op, so redundant notifications never
//! re-trigger motion.

use crate::player::ScoreViewport;
use crate::position::{BlockId, Position};
use crate::position_index::PositionIndex;
use crate::sync::state::SyncState;

/// The reference line sits at `pane_width / 17` from the top of the pane,
/// keeping the current system a consistent fraction of the page height down.
const REFERENCE_LINE_DIVISOR: f64 = 17.0;

/// Moves the score viewport to follow the current position.
#[derive(Debug)]
pub struct ScrollController {
    last_scrolled: Option<Position>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self { last_scrolled: None }
    }

    /// React to a position change.
    ///
    /// No-op when auto-scroll is disabled, a resize drag is in progress, the
    /// position is the sentinel, the position was already scrolled to, or
    /// the layout has not rendered the target block yet.
    pub fn on_position_changed<V: ScoreViewport>(
        &mut self,
        position: Position,
        state: &SyncState,
        index: &PositionIndex,
        viewport: &mut V,
    ) {
        if !state.auto_scroll_enabled() || state.is_resizing() {
            return;
        }
        let Some(block) = resolve_block(position, index) else {
            return;
        };
        if self.last_scrolled == Some(position) {
            return;
        }
        let Some(block_top) = viewport.block_top(block) else {
            return;
        };

        let offset =
            viewport.scroll_top() + block_top - viewport.pane_width() / REFERENCE_LINE_DIVISOR;
        log::debug!("auto-scroll to block {} (offset {:.1})", block, offset);
        viewport.scroll_to(offset);
        self.last_scrolled = Some(position);
    }
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a position to the block whose geometry should be brought into
/// view: blocks map to themselves, markers to their movement's first block,
/// the sentinel to nothing.
fn resolve_block(position: Position, index: &PositionIndex) -> Option<BlockId> {
    match position {
        Position::Block(id) => Some(id),
        Position::MovementMarker(movement) => index.first_block_of(movement),
        Position::None => None,
    }
}
