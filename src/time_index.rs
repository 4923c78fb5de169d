//! # Time Index
//!
//! Sorted table associating playback timestamps with positions, supporting
//! both directions of lookup:
//!
//! 1. **Forward** - `position_at(time)`: which position is active at a given
//!    playback time (used on every sampler tick)
//! 2. **Reverse** - `time_for(position)`: the canonical playback time to
//!    seek to when the user selects a position
//!
//! ## Forward lookup
//! Predicate binary search for the greatest entry with `time <= t`. A query
//! before the first entry yields the "no position" sentinel. When several
//! entries share a timestamp the last of them wins, so a zero-duration
//! position is skipped over at its own instant.
//!
//! ## Reverse lookup
//! A position can recur at several non-contiguous times; its canonical jump
//! target is the *last* entry carrying its identifier, so clicking the
//! position seeks to the final time it was active. The reverse map is
//! precomputed at build time, making the lookup O(1).
//!
//! ## Example
//! ```rust
//! use scoresync::{Position, TimeIndex, TimedPosition};
//!
//! let index = TimeIndex::build(vec![
//!     TimedPosition { time: 0.0, id: 10 },
//!     TimedPosition { time: 2.0, id: 20 },
//!     TimedPosition { time: 5.0, id: 30 },
//! ]);
//!
//! assert_eq!(index.position_at(1.0), Position::Block(10));
//! assert_eq!(index.position_at(-1.0), Position::None);
//! assert_eq!(index.time_for(Position::Block(20)), Some(2.0));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::document::TimedPosition;
use crate::position::{Position, RawId};

/// Sorted time table with a precomputed reverse map.
#[derive(Debug)]
pub struct TimeIndex {
    entries: Vec<TimedPosition>,
    jump_target_by_id: HashMap<RawId, f64>,
}

impl TimeIndex {
    /// Build the index from the document's time table.
    ///
    /// Entries are stably sorted by timestamp, so rows that share a time
    /// keep their document order. The reverse map records, for every
    /// identifier, the timestamp of its last entry in sorted order.
    pub fn build(mut entries: Vec<TimedPosition>) -> Self {
        entries.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));

        let mut jump_target_by_id = HashMap::new();
        for entry in &entries {
            // Later entries overwrite earlier ones: last occurrence wins
            jump_target_by_id.insert(entry.id, entry.time);
        }

        Self {
            entries,
            jump_target_by_id,
        }
    }

    /// Position active at the given playback time.
    ///
    /// Returns the position of the greatest entry with `time <= t`, or
    /// [`Position::None`] when the query precedes the first entry.
    pub fn position_at(&self, time: f64) -> Position {
        let mut min: isize = -1;
        let mut max: isize = self.entries.len() as isize;
        while max - min > 1 {
            let mid = (min + max) / 2;
            if time >= self.entries[mid as usize].time {
                min = mid;
            } else {
                max = mid;
            }
        }
        if min == -1 {
            Position::None
        } else {
            Position::from_raw(self.entries[min as usize].id)
        }
    }

    /// Canonical seek target for a position: the time of its last entry.
    ///
    /// Returns `None` for positions with no recorded time (including the
    /// sentinel); such positions cannot be seek targets.
    pub fn time_for(&self, position: Position) -> Option<f64> {
        if position.is_none() {
            return None;
        }
        self.jump_target_by_id.get(&position.to_raw()).copied()
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timestamp of the last entry, i.e. the covered playback span.
    pub fn end_time(&self) -> Option<f64> {
        self.entries.last().map(|e| e.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: f64, id: RawId) -> TimedPosition {
        TimedPosition { time, id }
    }

    fn sample_index() -> TimeIndex {
        TimeIndex::build(vec![
            entry(0.0, 10),
            entry(2.0, 20),
            entry(2.0, 21),
            entry(5.0, 30),
        ])
    }

    #[test]
    fn test_forward_lookup_between_entries() {
        let index = sample_index();
        assert_eq!(index.position_at(1.0), Position::Block(10));
        assert_eq!(index.position_at(3.0), Position::Block(21));
        assert_eq!(index.position_at(4.999), Position::Block(21));
    }

    #[test]
    fn test_forward_lookup_before_first_entry_is_sentinel() {
        let index = sample_index();
        assert_eq!(index.position_at(-1.0), Position::None);
        assert_eq!(index.position_at(-0.001), Position::None);
    }

    #[test]
    fn test_forward_lookup_on_tie_takes_last_entry() {
        let index = sample_index();
        assert_eq!(index.position_at(2.0), Position::Block(21));
    }

    #[test]
    fn test_forward_lookup_past_end_takes_last_entry() {
        let index = sample_index();
        assert_eq!(index.position_at(100.0), Position::Block(30));
    }

    #[test]
    fn test_forward_lookup_exact_first_entry() {
        let index = sample_index();
        assert_eq!(index.position_at(0.0), Position::Block(10));
    }

    #[test]
    fn test_empty_table_always_sentinel() {
        let index = TimeIndex::build(Vec::new());
        assert_eq!(index.position_at(0.0), Position::None);
        assert_eq!(index.position_at(100.0), Position::None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_sorts_unordered_entries() {
        let index = TimeIndex::build(vec![entry(5.0, 30), entry(0.0, 10), entry(2.0, 20)]);
        assert_eq!(index.position_at(1.0), Position::Block(10));
        assert_eq!(index.position_at(2.5), Position::Block(20));
        assert_eq!(index.end_time(), Some(5.0));
    }

    #[test]
    fn test_reverse_lookup_simple() {
        let index = sample_index();
        assert_eq!(index.time_for(Position::Block(10)), Some(0.0));
        assert_eq!(index.time_for(Position::Block(30)), Some(5.0));
    }

    #[test]
    fn test_reverse_lookup_recurring_position_takes_last() {
        let index = TimeIndex::build(vec![
            entry(0.0, 10),
            entry(2.0, 20),
            entry(7.0, 10), // block 10 recurs later
        ]);
        assert_eq!(index.time_for(Position::Block(10)), Some(7.0));
    }

    #[test]
    fn test_reverse_lookup_miss_and_sentinel() {
        let index = sample_index();
        assert_eq!(index.time_for(Position::Block(555)), None);
        assert_eq!(index.time_for(Position::None), None);
    }

    #[test]
    fn test_reverse_lookup_marker_entries() {
        let index = TimeIndex::build(vec![entry(0.0, 10), entry(60.0, 9802)]);
        assert_eq!(index.time_for(Position::MovementMarker(2)), Some(60.0));
        assert_eq!(index.position_at(61.0), Position::MovementMarker(2));
    }
}
