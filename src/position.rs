//! # Position Addressing
//!
//! This module defines the score's position addressing scheme.
//!
//! ## Addressing Space
//! Every addressable piece of the score carries a raw integer identifier in
//! `0..10000`. Three disjoint sub-ranges exist:
//! - **Blocks** - ordinary identifiers pointing at a content block inside a
//!   movement (anything outside the two ranges below)
//! - **Movement markers** - the reserved band `9800..9900`, where
//!   `raw = 9800 + movement_number` means "the start of movement N" without
//!   pointing at a real block
//! - **Sentinel** - `9999`, meaning "no position" (nothing selected, or
//!   playback has not reached the first timed entry yet)
//!
//! Rather than scattering numeric range checks through the engine, the raw
//! scheme is decoded once into the tagged [`Position`] type. All range logic
//! lives in [`Position::from_raw`] / [`Position::to_raw`].
//!
//! ## Related Modules
//! - `position_index` - Resolves positions to movement/measure numbers
//! - `time_index` - Maps playback time to positions

use serde::Deserialize;

/// Raw position identifier as it appears in score documents (0..10000).
pub type RawId = u16;

/// Block identifier: an ordinary position pointing at a content block.
pub type BlockId = u16;

/// Movement number, as displayed to users (e.g. 1 for "I. Allegro").
pub type MovementNumber = u32;

/// Size of the position addressing space.
pub const ADDRESS_SPACE: usize = 10000;

/// First identifier of the reserved movement-marker band.
pub const MARKER_BAND_START: RawId = 9800;

/// One past the last identifier of the movement-marker band.
pub const MARKER_BAND_END: RawId = 9900;

/// Sentinel identifier meaning "no position".
pub const NO_POSITION: RawId = 9999;

/// A decoded position inside the score's addressing scheme.
///
/// # Variants
/// - `Block`: an ordinary content block within a movement
/// - `MovementMarker`: "start of movement N" (no visual block of its own)
/// - `None`: nothing selected / before playback starts
///
/// # Example
/// ```rust
/// use scoresync::Position;
///
/// assert_eq!(Position::from_raw(120), Position::Block(120));
/// assert_eq!(Position::from_raw(9803), Position::MovementMarker(3));
/// assert_eq!(Position::from_raw(9999), Position::None);
/// assert_eq!(Position::MovementMarker(3).to_raw(), 9803);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Ordinary content block.
    Block(BlockId),
    /// Start-of-movement marker from the reserved band.
    MovementMarker(MovementNumber),
    /// Sentinel: no position selected.
    None,
}

impl Position {
    /// Decode a raw document identifier into a tagged position.
    ///
    /// Identifiers in the marker band become `MovementMarker`; the sentinel
    /// (and anything past the address space) becomes `None`; everything else
    /// is an ordinary `Block`.
    pub fn from_raw(raw: RawId) -> Self {
        if (MARKER_BAND_START..MARKER_BAND_END).contains(&raw) {
            Position::MovementMarker((raw - MARKER_BAND_START) as MovementNumber)
        } else if raw as usize >= ADDRESS_SPACE || raw == NO_POSITION {
            Position::None
        } else {
            Position::Block(raw)
        }
    }

    /// Encode back to the raw document identifier.
    pub fn to_raw(self) -> RawId {
        match self {
            Position::Block(id) => id,
            Position::MovementMarker(n) => MARKER_BAND_START + n as RawId,
            Position::None => NO_POSITION,
        }
    }

    /// True for the "no position" sentinel.
    pub fn is_none(self) -> bool {
        self == Position::None
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::None
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawId::deserialize(deserializer)?;
        Ok(Position::from_raw(raw))
    }
}
