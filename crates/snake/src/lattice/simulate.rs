//! Walk a state through the lattice and check it for self-collision.

use std::fmt;

use super::cfg::{closing_cell, start_cell, CLOSING_LEAD};
use super::occupancy::Occupancy;
use super::types::{Orientation, Point, Prism};
use crate::state::State;

/// Why a chain is not realizable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The new prism overlaps the single prism already in its cell.
    Collision,
    /// The cell already holds two prisms.
    Crowded,
    /// Cyclic mode: too far from the start to return within the remaining rules.
    OutOfReach,
    /// Cyclic mode: every prism fits but the chain does not close.
    Open,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Collision => "collision",
            Self::Crowded => "crowded cell",
            Self::OutOfReach => "out of reach of the start",
            Self::Open => "chain does not close",
        };
        f.write_str(s)
    }
}

/// Verdict of one simulation run.
///
/// `index` is the last rule applied before the verdict (`len - 1` on success,
/// saturating at 0 for the empty state). Every state sharing the first
/// `index + 1` rules fails the same way, which is what the enumerator's
/// subtree skip relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Simulation {
    pub failure: Option<Failure>,
    pub index: usize,
}

impl Simulation {
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.failure.is_none()
    }

    /// `(valid, index)` pair.
    #[inline]
    pub fn as_pair(&self) -> (bool, usize) {
        (self.is_physical(), self.index)
    }
}

#[inline]
fn step(cell: Point, orientation: Orientation, rule: u8) -> (Point, Orientation) {
    (cell + orientation.lead().unit(), orientation.advance(rule))
}

/// Can a chain at `cell` with `remaining` rules still return next to the start?
///
/// The y bound carries one extra unit: the loop closes at `(0, -1, 0)`.
#[inline]
fn within_reach(cell: &Point, remaining: i64) -> bool {
    2 * i64::from(cell.x.abs()) <= remaining
        && 2 * i64::from(cell.y.abs()) <= remaining + 1
        && 2 * i64::from(cell.z.abs()) <= remaining
}

/// Simulate the chain described by `state`.
///
/// Every prism, including the last one (checked by a trailing step that
/// applies no rule), is placed into an `Occupancy`. With `cyclic`, a reach
/// bound runs before each placement and the final pose must close the loop.
pub fn simulate(state: &State, cyclic: bool) -> Simulation {
    let n = state.len();
    let mut cells = Occupancy::with_capacity(n + 1);
    let mut cell = start_cell();
    let mut orientation = Orientation::START;
    let mut applied = 0usize;

    let rules = state.digits().iter().copied().map(Some);
    for rule in rules.chain(std::iter::once(None)) {
        let verdict = if cyclic && !within_reach(&cell, (n + 1 - applied) as i64) {
            Err(Failure::OutOfReach)
        } else {
            cells.place(cell, orientation)
        };
        if let Err(failure) = verdict {
            return Simulation {
                failure: Some(failure),
                index: applied.saturating_sub(1),
            };
        }
        let Some(rule) = rule else { break };
        (cell, orientation) = step(cell, orientation, rule);
        applied += 1;
    }

    let index = n.saturating_sub(1);
    if cyclic && !(orientation.lead() == CLOSING_LEAD && cell == closing_cell()) {
        return Simulation {
            failure: Some(Failure::Open),
            index,
        };
    }
    Simulation {
        failure: None,
        index,
    }
}

/// Cell and pose of every prism in the chain (`len + 1` prisms), without
/// collision checks.
pub fn embed(state: &State) -> Vec<Prism> {
    let mut cell = start_cell();
    let mut orientation = Orientation::START;
    let mut prisms = Vec::with_capacity(state.len() + 1);
    prisms.push(Prism { cell, orientation });
    for &rule in state.digits() {
        (cell, orientation) = step(cell, orientation, rule);
        prisms.push(Prism { cell, orientation });
    }
    prisms
}
