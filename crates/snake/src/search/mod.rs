//! Symmetry-aware enumeration of realizable states.
//!
//! Purpose
//! - Produce every state of a given length that is canonical under the selected
//!   symmetries and (optionally) physically realizable, lazily and in ascending
//!   lexicographic order.
//!
//! Pipeline
//! - `Enumerator`: index-jumping scan over `[0, 4^n)` with three checks per
//!   candidate, in order:
//!   1. chirality only: a `3` before any `1` skips past the prefix ending there;
//!   2. reversal/chirality canonicality: a non-canonical candidate steps by one;
//!   3. simulator: a failure at rule `f` skips past the prefix ending at `f`.
//! - `CyclicDedup`: for cyclic search, keeps the first loop of each rotation
//!   class. Runs after discovery because loop rotations are only known once the
//!   loop is.
//!
//! Code cross-refs: `lattice::simulate`, `symmetry::{is_canonical, cyclic_orbit}`.

mod dedup;
mod enumerator;
mod types;

pub use dedup::CyclicDedup;
pub use enumerator::Enumerator;
pub use types::{SearchCfg, SearchStats};

use crate::state::{State, StateError};

#[cfg(test)]
mod tests;

#[derive(Debug)]
enum Stage {
    Plain(Enumerator),
    Cyclic(CyclicDedup<Enumerator>),
}

/// Full search pipeline for one length: the enumerator, plus cyclic
/// deduplication when `cfg.symmetry.cyclic` is set.
#[derive(Debug)]
pub struct Solutions {
    stage: Stage,
}

impl Solutions {
    pub fn new(len: usize, cfg: SearchCfg) -> Result<Self, StateError> {
        let scan = Enumerator::new(len, cfg)?;
        let sym = cfg.symmetry;
        let stage = if sym.cyclic {
            Stage::Cyclic(CyclicDedup::new(scan, sym.reverse, sym.chiral))
        } else {
            Stage::Plain(scan)
        };
        Ok(Self { stage })
    }

    fn scan(&self) -> &Enumerator {
        match &self.stage {
            Stage::Plain(scan) => scan,
            Stage::Cyclic(dedup) => dedup.inner(),
        }
    }

    /// Work done so far; final once the iterator is exhausted.
    pub fn stats(&self) -> SearchStats {
        self.scan().stats()
    }

    pub fn cfg(&self) -> SearchCfg {
        self.scan().cfg()
    }
}

impl Iterator for Solutions {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        match &mut self.stage {
            Stage::Plain(scan) => scan.next(),
            Stage::Cyclic(dedup) => dedup.next(),
        }
    }
}
