//! # Position Index
//!
//! Static mapping from a position to its human-facing coordinates: the
//! containing movement number and the measure number inside it.
//!
//! ## Build
//! The index is precomputed once per document into two address-space-sized
//! tables (a document has tens of movements; the tables make every playback
//! lookup O(1) and keep the interval scan out of the tick path entirely).
//! For each movement, every identifier in the main reservation and in each
//! cadenza interval maps to that movement; the first movement to claim an
//! identifier wins (`validate` rejects documents where that could matter).
//!
//! ## Measure numbers
//! A block's measure number is its 1-based offset inside the interval that
//! contains it. Movement markers have no measure of their own, so their
//! measure resolves to blank.
//!
//! ## Related Modules
//! - `document` - Source movement descriptors
//! - `sync::scroll` - Uses `first_block_of` to redirect marker positions

use std::collections::HashMap;

use crate::document::Movement;
use crate::position::{BlockId, MovementNumber, Position, ADDRESS_SPACE};

/// Precomputed position → movement/measure tables for one document.
#[derive(Debug)]
pub struct PositionIndex {
    movement_by_block: Vec<Option<MovementNumber>>,
    measure_by_block: Vec<Option<u32>>,
    first_block_by_movement: HashMap<MovementNumber, BlockId>,
}

impl PositionIndex {
    /// Build the index from the document's movement descriptors.
    pub fn build(movements: &[Movement]) -> Self {
        let mut movement_by_block = vec![None; ADDRESS_SPACE];
        let mut measure_by_block = vec![None; ADDRESS_SPACE];
        let mut first_block_by_movement = HashMap::new();

        for mov in movements {
            first_block_by_movement
                .entry(mov.movement)
                .or_insert(mov.first_block);

            let mut claim = |from: BlockId, to: BlockId| {
                for id in from..to {
                    let cell = &mut movement_by_block[id as usize];
                    if cell.is_none() {
                        *cell = Some(mov.movement);
                        measure_by_block[id as usize] = Some((id - from + 1) as u32);
                    }
                }
            };

            claim(mov.reservation.from, mov.reservation.to);
            if let Some(cadenzas) = &mov.cadenza {
                for cad in cadenzas {
                    claim(cad.reservation.from, cad.reservation.to);
                }
            }
        }

        Self {
            movement_by_block,
            measure_by_block,
            first_block_by_movement,
        }
    }

    /// Movement containing the position, if any.
    ///
    /// Blocks resolve through the reservation tables, markers resolve to
    /// their own movement number, and the sentinel resolves to nothing.
    /// A block identifier outside the address space is a miss, not a fault.
    pub fn movement_of(&self, position: Position) -> Option<MovementNumber> {
        match position {
            Position::Block(id) => self.movement_by_block.get(id as usize).copied().flatten(),
            Position::MovementMarker(n) => Some(n),
            Position::None => None,
        }
    }

    /// Measure number of the position, if it has one.
    ///
    /// Markers have no real measure and resolve to `None` (blank label).
    pub fn measure_of(&self, position: Position) -> Option<u32> {
        match position {
            Position::Block(id) => self.measure_by_block.get(id as usize).copied().flatten(),
            Position::MovementMarker(_) | Position::None => None,
        }
    }

    /// First content block of a movement (the marker's scroll target).
    pub fn first_block_of(&self, movement: MovementNumber) -> Option<BlockId> {
        self.first_block_by_movement.get(&movement).copied()
    }
}
