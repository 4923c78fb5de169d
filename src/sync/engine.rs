//! Engine coordination: sampling, seeking, toggles, and labels.

use crate::document::ScoreDocument;
use crate::error::SyncError;
use crate::player::{PlayerState, ScoreViewport, VideoPlayer};
use crate::position::Position;
use crate::position_index::PositionIndex;
use crate::sync::resize::{PaneSplit, ResizeController};
use crate::sync::sampler::{Sampler, TickTicket};
use crate::sync::scroll::ScrollController;
use crate::sync::state::SyncState;
use crate::time_index::TimeIndex;
use crate::validate::validate;

/// The synchronization engine for one loaded score/video pair.
///
/// Owns both indexes and the session state; all mutations flow through the
/// operations below, each triggered by one discrete external event (timer
/// tick, pointer event, user click) and processed to completion before the
/// next. The most recent position write always wins; scroll and seek are
/// fire-and-forget.
///
/// # Example
/// ```rust
/// use scoresync::{Position, SyncEngine};
///
/// let source = r#"
/// movements:
///   - movement: 1
///     reservation: { from: 0, to: 100 }
///     first_blockId: 0
/// times:
///   - { time: 0.0, id: 0 }
///   - { time: 4.0, id: 1 }
/// "#;
///
/// let engine = SyncEngine::from_yaml(source)?;
/// assert_eq!(engine.current_position(), Position::None);
/// assert!(engine.auto_scroll_enabled());
/// # Ok::<(), scoresync::SyncError>(())
/// ```
#[derive(Debug)]
pub struct SyncEngine {
    position_index: PositionIndex,
    time_index: TimeIndex,
    state: SyncState,
    sampler: Sampler,
    scroll: ScrollController,
    resize: ResizeController,
}

impl SyncEngine {
    /// Build an engine from a loaded document.
    ///
    /// Runs the full validation pass first; both indexes are built once here
    /// and are immutable for the session.
    ///
    /// # Errors
    /// Returns the first [`SyncError`] found by [`crate::validate()`].
    pub fn new(document: &ScoreDocument) -> Result<Self, SyncError> {
        validate(document)?;
        log::info!(
            "engine ready: {} movements, {} time entries",
            document.movements.len(),
            document.times.len()
        );
        Ok(Self {
            position_index: PositionIndex::build(&document.movements),
            time_index: TimeIndex::build(document.times.clone()),
            state: SyncState::new(),
            sampler: Sampler::new(),
            scroll: ScrollController::new(),
            resize: ResizeController::new(),
        })
    }

    /// Build an engine straight from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, SyncError> {
        let document = ScoreDocument::from_yaml(source)?;
        Self::new(&document)
    }

    //
    // Playback sync loop ---------------------------------------------------
    //

    /// React to a player state change.
    ///
    /// Entering `Playing` starts the sampler and returns the ticket the host
    /// must attach to its scheduled ticks (period: [`crate::TICK_PERIOD`]).
    /// Every other state cancels the sampler, invalidating the old ticket so
    /// that any already-queued tick is ignored.
    pub fn on_player_state_change(&mut self, player_state: PlayerState) -> Option<TickTicket> {
        match player_state {
            PlayerState::Playing => {
                log::debug!("player playing: sampler started");
                Some(self.sampler.start())
            }
            other => {
                log::debug!("player {:?}: sampler cancelled", other);
                self.sampler.cancel();
                None
            }
        }
    }

    /// One sampler tick.
    ///
    /// Reads the player's current time, looks up the active position, and
    /// publishes it when it changed. Returns the new position on change so
    /// the display layer can re-render, `None` otherwise.
    ///
    /// Silent no-ops: a stale or cancelled ticket, and a player with no
    /// readable time yet (transient, retried next tick).
    pub fn tick<P: VideoPlayer, V: ScoreViewport>(
        &mut self,
        ticket: TickTicket,
        player: &P,
        viewport: &mut V,
    ) -> Option<Position> {
        if !self.sampler.accepts(ticket) {
            return None;
        }
        let time = player.current_time()?;
        let position = self.time_index.position_at(time);
        self.apply_position(position, viewport)
    }

    //
    // Seek -----------------------------------------------------------------
    //

    /// React to the user selecting a position (click on a block or a
    /// movement entry).
    ///
    /// Looks up the canonical playback time, seeks the player there, and
    /// publishes the position immediately: the sampler may be delayed or the
    /// player paused, so the selection must not wait for the next tick.
    /// A position with no recorded time is a no-op (returns `false`).
    pub fn select_position<P: VideoPlayer, V: ScoreViewport>(
        &mut self,
        position: Position,
        player: &mut P,
        viewport: &mut V,
    ) -> bool {
        let Some(time) = self.time_index.time_for(position) else {
            log::debug!("selected position {:?} has no seek target", position);
            return false;
        };
        log::debug!("seek to {:.2}s for {:?}", time, position);
        player.seek_to(time, true);
        self.apply_position(position, viewport);
        true
    }

    //
    // Toggles and resize ---------------------------------------------------
    //

    /// Enable or disable auto-scroll. Pure state write: future position
    /// changes act on it, nothing moves right now.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.state.set_auto_scroll(enabled);
    }

    /// Divider drag started: suppress auto-scroll for the duration.
    pub fn begin_resize(&mut self, pointer_x: f64, video_pane_width: f64) {
        self.resize.begin(pointer_x, video_pane_width);
        self.state.set_resizing(true);
    }

    /// Pointer moved during a divider drag; yields the new pane split.
    pub fn resize_to(&mut self, pointer_x: f64, container_width: f64) -> Option<PaneSplit> {
        self.resize.drag_to(pointer_x, container_width)
    }

    /// Divider drag ended (anywhere on screen): auto-scroll may act again.
    pub fn end_resize(&mut self) {
        self.resize.end();
        self.state.set_resizing(false);
    }

    //
    // Read surface ---------------------------------------------------------
    //

    pub fn current_position(&self) -> Position {
        self.state.current_position()
    }

    pub fn auto_scroll_enabled(&self) -> bool {
        self.state.auto_scroll_enabled()
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    pub fn sampler_active(&self) -> bool {
        self.sampler.is_active()
    }

    /// Movement label for the current position ("" when none).
    pub fn movement_label(&self) -> String {
        match self.position_index.movement_of(self.current_position()) {
            Some(movement) => movement.to_string(),
            None => String::new(),
        }
    }

    /// Measure label for the current position ("" when blank, e.g. for a
    /// movement marker).
    pub fn measure_label(&self) -> String {
        match self.position_index.measure_of(self.current_position()) {
            Some(measure) => measure.to_string(),
            None => String::new(),
        }
    }

    pub fn position_index(&self) -> &PositionIndex {
        &self.position_index
    }

    pub fn time_index(&self) -> &TimeIndex {
        &self.time_index
    }

    //
    // Internal -------------------------------------------------------------
    //

    /// Publish a position: update state and notify the scroll controller,
    /// but only when it actually changed (redundant scroll triggers are
    /// filtered here, upstream of the controller's own guard).
    fn apply_position<V: ScoreViewport>(
        &mut self,
        position: Position,
        viewport: &mut V,
    ) -> Option<Position> {
        if position == self.state.current_position() {
            return None;
        }
        self.state.set_current_position(position);
        self.scroll
            .on_position_changed(position, &self.state, &self.position_index, viewport);
        Some(position)
    }
}
