//! # External Collaborator Interfaces
//!
//! The engine never talks to a concrete video player or DOM-like layout; the
//! host shell implements these traits and the engine stays a pure state
//! machine that can be driven (and tested) without any real player.
//!
//! ## Collaborators
//! - [`VideoPlayer`] - The external reference player (current time + seek)
//! - [`ScoreViewport`] - The scrollable score pane (block geometry + scroll)
//! - [`PlayerState`] - State-change notifications emitted by the player

/// Playback states reported by the external video player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Player is loaded but has not started.
    Ready,
    /// Actively playing; the sampler runs only in this state.
    Playing,
    Paused,
    Buffering,
    Ended,
}

/// The external reference video player.
pub trait VideoPlayer {
    /// Current playback time in seconds.
    ///
    /// Returns `None` while the player has no readable time yet (not ready);
    /// the engine skips that tick silently.
    fn current_time(&self) -> Option<f64>;

    /// Seek to the given time. `allow_seek_ahead` permits seeking into
    /// not-yet-buffered regions. Fire-and-forget: the engine never waits for
    /// the seek to complete.
    fn seek_to(&mut self, time: f64, allow_seek_ahead: bool);
}

/// The scrollable score pane and its block layout.
///
/// Geometry follows the usual viewport convention: `block_top` is the
/// block's offset from the top of the visible viewport (negative when
/// scrolled past), and `scroll_top` is the pane's current scroll offset.
pub trait ScoreViewport {
    /// Current scroll offset of the pane.
    fn scroll_top(&self) -> f64;

    /// Current width of the pane (used to place the reference line).
    fn pane_width(&self) -> f64;

    /// Top of the block's bounding box relative to the viewport, or `None`
    /// when the block is not rendered yet.
    fn block_top(&self, block: crate::position::BlockId) -> Option<f64>;

    /// Smooth-scroll the pane to an absolute offset. Fire-and-forget: a new
    /// target may supersede an in-flight scroll at any time.
    fn scroll_to(&mut self, offset: f64);
}
