//! # Document Validation Module
//!
//! This module validates the semantic consistency of a loaded score document.
//!
//! ## Purpose
//! A document can deserialize cleanly and still be inconsistent: overlapping
//! reservations would make a block belong to two movements, and a broken
//! time table would make lookups non-deterministic. These are authoring-time
//! defects, so they are rejected once at load time instead of being patched
//! over during playback.
//!
//! ## Validation Rules
//!
//! ### Reservations
//! - Every interval (main and cadenza) must be non-empty (`from < to`)
//! - No interval may reach into the reserved range (marker band and above)
//! - Intervals are pairwise disjoint across all movements and cadenzas
//!
//! ### Movement numbers
//! - Each movement number must fit the marker band (`9800 + n < 9900`)
//!
//! ### First blocks
//! - Each movement's `first_blockId` must fall inside one of that movement's
//!   own intervals (main reservation or a cadenza)
//!
//! ### Time table
//! - Every timestamp must be finite and non-negative
//!
//! ## Entry Point
//! `validate(document: &ScoreDocument) -> Result<(), SyncError>`
//!
//! ## Related Modules
//! - `document` - Defines the types being validated
//! - `error` - Returns `SyncError` variants naming the offending movement

use crate::document::{ScoreDocument, Span};
use crate::error::SyncError;
use crate::position::{MARKER_BAND_END, MARKER_BAND_START};

/// Validate a score document for semantic consistency.
///
/// Checks reservation shape and disjointness, movement numbering, and the
/// time table. Runtime lookups resolve overlaps deterministically
/// (first match wins), but a document that needs that fallback is broken and
/// is rejected here.
pub fn validate(document: &ScoreDocument) -> Result<(), SyncError> {
    validate_reservations(document)?;
    validate_movement_numbers(document)?;
    validate_first_blocks(document)?;
    validate_times(document)?;
    Ok(())
}

/// Every reservation interval owned by a movement, cadenzas included.
fn all_spans(document: &ScoreDocument) -> Vec<(u32, Span)> {
    let mut spans = Vec::new();
    for mov in &document.movements {
        spans.push((mov.movement, mov.reservation));
        if let Some(cadenzas) = &mov.cadenza {
            for cad in cadenzas {
                spans.push((mov.movement, cad.reservation));
            }
        }
    }
    spans
}

fn validate_reservations(document: &ScoreDocument) -> Result<(), SyncError> {
    let spans = all_spans(document);

    for (movement, span) in &spans {
        if span.from >= span.to {
            return Err(SyncError::EmptyReservation {
                movement: *movement,
                from: span.from,
                to: span.to,
            });
        }
        if span.to > MARKER_BAND_START {
            return Err(SyncError::ReservedRange {
                movement: *movement,
                from: span.from,
                to: span.to,
            });
        }
    }

    for (i, (movement, span)) in spans.iter().enumerate() {
        for (other, other_span) in spans.iter().skip(i + 1) {
            if span.overlaps(other_span) {
                return Err(SyncError::OverlappingReservations {
                    movement: *movement,
                    other: *other,
                    from: other_span.from.max(span.from),
                    to: other_span.to.min(span.to),
                });
            }
        }
    }

    Ok(())
}

fn validate_movement_numbers(document: &ScoreDocument) -> Result<(), SyncError> {
    let band_width = (MARKER_BAND_END - MARKER_BAND_START) as u32;
    for mov in &document.movements {
        if mov.movement >= band_width {
            return Err(SyncError::MovementOutOfBand {
                movement: mov.movement,
            });
        }
    }
    Ok(())
}

fn validate_first_blocks(document: &ScoreDocument) -> Result<(), SyncError> {
    for mov in &document.movements {
        let owned = mov.reservation.contains(mov.first_block)
            || mov
                .cadenza
                .iter()
                .flatten()
                .any(|cad| cad.reservation.contains(mov.first_block));
        if !owned {
            return Err(SyncError::FirstBlockOutsideReservation {
                movement: mov.movement,
                first_block: mov.first_block,
            });
        }
    }
    Ok(())
}

fn validate_times(document: &ScoreDocument) -> Result<(), SyncError> {
    for (index, entry) in document.times.iter().enumerate() {
        if !entry.time.is_finite() || entry.time < 0.0 {
            return Err(SyncError::BadTimeEntry {
                index,
                time: entry.time,
            });
        }
    }
    Ok(())
}
