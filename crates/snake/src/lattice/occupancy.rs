//! Cell occupancy for a single simulation run.

use std::collections::HashMap;

use super::simulate::Failure;
use super::types::{Orientation, Point};

/// A cell holds one prism, or two antipodal halves.
#[derive(Clone, Copy, Debug)]
enum Slot {
    One(Orientation),
    Two,
}

/// Cells entered so far by the chain.
#[derive(Debug, Default)]
pub struct Occupancy {
    cells: HashMap<Point, Slot>,
}

impl Occupancy {
    pub fn with_capacity(prisms: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(prisms),
        }
    }

    /// Put a prism in `cell`, or report why it does not fit.
    pub fn place(&mut self, cell: Point, orientation: Orientation) -> Result<(), Failure> {
        match self.cells.get(&cell).copied() {
            None => {
                self.cells.insert(cell, Slot::One(orientation));
                Ok(())
            }
            Some(Slot::Two) => Err(Failure::Crowded),
            Some(Slot::One(other)) if orientation.is_compatible(other) => {
                self.cells.insert(cell, Slot::Two);
                Ok(())
            }
            Some(Slot::One(_)) => Err(Failure::Collision),
        }
    }

    /// Number of prisms currently in `cell` (0, 1 or 2).
    pub fn occupants(&self, cell: &Point) -> usize {
        match self.cells.get(cell) {
            None => 0,
            Some(Slot::One(_)) => 1,
            Some(Slot::Two) => 2,
        }
    }
}
