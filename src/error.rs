//! # Error Types
//!
//! This module defines all error types for the scoresync engine.
//!
//! Every variant carries enough context (movement numbers, entry indexes) to
//! point at the offending part of the score document.
//!
//! ## Error Types
//! - `Document` - The document could not be deserialized at all
//! - `OverlappingReservations` - Two movements claim the same identifier range
//! - `EmptyReservation` / `ReservedRange` - A single interval is malformed
//! - `MovementOutOfBand` - A movement number does not fit the marker band
//! - `FirstBlockOutsideReservation` - A marker's scroll target is unreachable
//! - `BadTimeEntry` - A time-table entry is not a usable timestamp
//!
//! All of these are authoring-time defects in the source document; the
//! runtime engine itself never fails (lookup misses degrade to "no position"
//! and transient player unavailability is skipped silently).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The score document could not be deserialized.
    #[error("Invalid score document: {0}")]
    Document(String),

    /// Two reservations (main or cadenza) claim overlapping identifier
    /// ranges, so a position would belong to more than one movement.
    #[error("Movements {movement} and {other} reserve overlapping ranges [{from}, {to})")]
    OverlappingReservations {
        movement: u32,
        other: u32,
        from: u16,
        to: u16,
    },

    /// A reservation interval is empty or inverted (`from >= to`).
    #[error("Movement {movement} has an empty reservation [{from}, {to})")]
    EmptyReservation { movement: u32, from: u16, to: u16 },

    /// A reservation reaches into the marker band or past the address space.
    #[error("Movement {movement} reservation [{from}, {to}) enters the reserved range")]
    ReservedRange { movement: u32, from: u16, to: u16 },

    /// A movement number too large to address via the marker band.
    #[error("Movement number {movement} does not fit the marker band")]
    MovementOutOfBand { movement: u32 },

    /// A movement's first block lies outside every interval the movement
    /// owns, so its marker would scroll to a block no layout renders.
    #[error("Movement {movement} first block {first_block} is outside its own reservations")]
    FirstBlockOutsideReservation { movement: u32, first_block: u16 },

    /// A time-table entry whose timestamp is negative or not finite.
    #[error("Time entry {index} has unusable timestamp {time}")]
    BadTimeEntry { index: usize, time: f64 },
}
