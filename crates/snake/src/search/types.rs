//! Search configuration and statistics.

use crate::symmetry::Symmetry;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Require the chain to be free of self-collision.
    pub physical: bool,
    pub symmetry: Symmetry,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            physical: true,
            symmetry: Symmetry::default(),
        }
    }
}

impl SearchCfg {
    /// Run the simulator on canonical candidates? Cyclic search always does,
    /// since closure is a geometric property.
    #[inline]
    pub fn simulates(&self) -> bool {
        self.physical || self.symmetry.cyclic
    }
}

/// Work counters for one enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate indices examined (each skip counts once).
    pub candidates: u64,
    /// Simulator invocations.
    pub simulations: u64,
    /// States that passed every check (before cyclic deduplication).
    pub accepted: u64,
}
