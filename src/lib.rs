//! # scoresync
//!
//! Temporal-to-spatial synchronization engine for a score viewer that plays
//! a reference video alongside a paginated score image.
//!
//! The engine converts the player's continuous playback time into a discrete
//! position inside the score's addressing scheme, resolves that position to
//! movement and measure labels, drives an auto-scroll policy that follows
//! playback without fighting the user, and supports the inverse jump:
//! clicking a position seeks the video to the matching time.
//!
//! Rendering, video decoding, persistence, and authentication are not part
//! of this crate; the host implements the narrow traits in [`player`].
//!
//! ## Pipeline
//! 1. Load a [`ScoreDocument`] (movement descriptors + time table)
//! 2. [`validate()`] it (reservation disjointness, time table sanity)
//! 3. Build [`SyncEngine`], which precomputes the [`PositionIndex`] and
//!    [`TimeIndex`] once for the session
//! 4. Drive the engine with player state changes, timer ticks, clicks, and
//!    divider drags

pub mod document;
pub mod error;
pub mod player;
pub mod position;
pub mod position_index;
pub mod sync;
pub mod time_index;
pub mod validate;

pub use document::{CadenzaSpan, Movement, ScoreDocument, Span, TimedPosition};
pub use error::SyncError;
pub use player::{PlayerState, ScoreViewport, VideoPlayer};
pub use position::{
    BlockId, MovementNumber, Position, RawId, ADDRESS_SPACE, MARKER_BAND_END, MARKER_BAND_START,
    NO_POSITION,
};
pub use position_index::PositionIndex;
pub use sync::{PaneSplit, SyncEngine, TickTicket, TICK_PERIOD};
pub use time_index::TimeIndex;
pub use validate::validate;
