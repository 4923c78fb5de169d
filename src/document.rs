//! # Score Document Types
//!
//! This module defines the score document supplied by the document loader:
//! the movement descriptors and the time table for one score/video pair.
//!
//! ## Type Hierarchy
//! ```text
//! ScoreDocument
//!   ├── Vec<Movement>
//!   │     ├── movement: number shown to users (1-indexed)
//!   │     ├── reservation: Span [from, to) of block identifiers
//!   │     ├── cadenza: optional Vec<CadenzaSpan> (alternate passages)
//!   │     └── first_block: block scrolled to for the movement's marker
//!   └── Vec<TimedPosition> (time table, playback seconds → raw identifier)
//! ```
//!
//! ## Key Concepts
//!
//! ### Reservations
//! A movement owns the half-open interval `[from, to)` of block identifiers.
//! A cadenza is an extra interval belonging to the same movement that need
//! not be contiguous with the main reservation. Across the whole document,
//! reservations must be pairwise disjoint (`validate` checks this).
//!
//! ### Time table
//! Each row associates a playback timestamp with the raw identifier of the
//! position active from that instant. A position may appear in several rows:
//! it was active over several non-contiguous spans of the performance.
//!
//! The document is loaded once per session and immutable afterwards; both
//! indexes are built from it exactly once.
//!
//! ## Related Modules
//! - `validate` - Authoring-time consistency checks
//! - `position_index` / `time_index` - Indexes built from this document

use serde::Deserialize;

use crate::error::SyncError;
use crate::position::RawId;

/// Half-open interval `[from, to)` of block identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub from: RawId,
    pub to: RawId,
}

impl Span {
    /// True if the identifier falls inside `[from, to)`.
    pub fn contains(&self, id: RawId) -> bool {
        id >= self.from && id < self.to
    }

    /// True if two intervals share at least one identifier.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.from < other.to && other.from < self.to
    }
}

/// One cadenza passage: an alternate interval still owned by its movement.
#[derive(Debug, Clone, Deserialize)]
pub struct CadenzaSpan {
    pub reservation: Span,
}

/// Descriptor for one movement of the piece.
#[derive(Debug, Clone, Deserialize)]
pub struct Movement {
    /// Movement number as displayed (1-indexed by convention).
    pub movement: u32,
    /// Main reservation of block identifiers.
    pub reservation: Span,
    /// Optional alternate passages (non-contiguous with the main range).
    #[serde(default)]
    pub cadenza: Option<Vec<CadenzaSpan>>,
    /// Block the viewer scrolls to when this movement's marker is selected.
    #[serde(rename = "first_blockId")]
    pub first_block: RawId,
}

/// One row of the time table.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimedPosition {
    /// Playback timestamp in seconds.
    pub time: f64,
    /// Raw identifier of the position active from this timestamp.
    pub id: RawId,
}

/// The full document for one score/video pair: movement descriptors plus the
/// time table. Supplied by the document loader, immutable for the session.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreDocument {
    #[serde(default)]
    pub movements: Vec<Movement>,
    pub times: Vec<TimedPosition>,
}

impl ScoreDocument {
    /// Deserialize a document from its YAML form.
    ///
    /// # Errors
    /// Returns [`SyncError::Document`] when the YAML is malformed or missing
    /// required fields. Semantic consistency is checked separately by
    /// [`crate::validate`].
    pub fn from_yaml(source: &str) -> Result<Self, SyncError> {
        serde_yaml::from_str(source).map_err(|e| SyncError::Document(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains_half_open() {
        let span = Span { from: 10, to: 20 };
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
    }

    #[test]
    fn test_span_overlap() {
        let a = Span { from: 0, to: 10 };
        let b = Span { from: 10, to: 20 };
        let c = Span { from: 9, to: 11 };
        assert!(!a.overlaps(&b)); // touching half-open intervals are disjoint
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_document_from_yaml() {
        let source = r#"
movements:
  - movement: 1
    reservation: { from: 0, to: 100 }
    first_blockId: 0
  - movement: 2
    reservation: { from: 100, to: 250 }
    cadenza:
      - reservation: { from: 400, to: 420 }
    first_blockId: 100
times:
  - { time: 0.0, id: 0 }
  - { time: 3.5, id: 1 }
"#;
        let doc = ScoreDocument::from_yaml(source).unwrap();
        assert_eq!(doc.movements.len(), 2);
        assert_eq!(doc.movements[1].first_block, 100);
        assert_eq!(doc.movements[1].cadenza.as_ref().unwrap().len(), 1);
        assert_eq!(doc.times.len(), 2);
        assert_eq!(doc.times[1].id, 1);
    }

    #[test]
    fn test_document_rejects_malformed_yaml() {
        let err = ScoreDocument::from_yaml("movements: [").unwrap_err();
        assert!(err.to_string().contains("Invalid score document"));
    }
}
