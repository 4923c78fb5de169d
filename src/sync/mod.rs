//! # Synchronization Module
//!
//! The runtime half of the crate: keeps the score viewport aligned with the
//! external player during playback, and playback aligned with the user's
//! selections.
//!
//! ## Sub-modules
//! - `state` - Session-lived [`SyncState`] (current position + toggles)
//! - `sampler` - 35 ms playback sampler with race-free cancellation
//! - `scroll` - Auto-scroll policy with marker redirection
//! - `resize` - Pane-divider drag state machine
//! - `engine` - [`SyncEngine`], the coordinator tying it all together
//!
//! ## Event model
//! The engine is single-threaded and event-driven: the host delivers player
//! state changes, timer ticks, clicks, and pointer events one at a time, and
//! each is processed to completion. There is no internal parallelism and no
//! locking; the only cancellable resource is the sampler, handled with
//! tickets (see `sampler`).
//!
//! ## Typical wiring
//! ```rust
//! use scoresync::{PlayerState, SyncEngine};
//! # use scoresync::{Position, ScoreViewport, VideoPlayer, BlockId};
//! # struct Player(f64);
//! # impl VideoPlayer for Player {
//! #     fn current_time(&self) -> Option<f64> { Some(self.0) }
//! #     fn seek_to(&mut self, time: f64, _ahead: bool) { self.0 = time; }
//! # }
//! # struct Pane;
//! # impl ScoreViewport for Pane {
//! #     fn scroll_top(&self) -> f64 { 0.0 }
//! #     fn pane_width(&self) -> f64 { 850.0 }
//! #     fn block_top(&self, _b: BlockId) -> Option<f64> { Some(120.0) }
//! #     fn scroll_to(&mut self, _offset: f64) {}
//! # }
//!
//! let source = r#"
//! movements:
//!   - movement: 1
//!     reservation: { from: 0, to: 100 }
//!     first_blockId: 0
//! times:
//!   - { time: 0.0, id: 0 }
//!   - { time: 4.0, id: 1 }
//! "#;
//! let mut engine = SyncEngine::from_yaml(source)?;
//! let player = Player(5.0);
//! let mut pane = Pane;
//!
//! // Player started: schedule ticks every TICK_PERIOD with this ticket
//! let ticket = engine.on_player_state_change(PlayerState::Playing).unwrap();
//! let changed = engine.tick(ticket, &player, &mut pane);
//! assert_eq!(changed, Some(Position::Block(1)));
//! # Ok::<(), scoresync::SyncError>(())
//! ```

mod engine;
mod resize;
mod sampler;
mod scroll;
mod state;


pub use engine::SyncEngine;
pub use resize::{PaneSplit, ResizeController};
pub use sampler::{Sampler, TickTicket, TICK_PERIOD};
pub use scroll::ScrollController;
pub use state::SyncState;
