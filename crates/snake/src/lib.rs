//! Search and validation core for the segmented folding puzzle ("snake").
//!
//! A snake is a chain of right-angle prisms joined by hinges; a configuration is
//! a state, one rule in `0..=3` per hinge.
//!
//! Modules
//! - `state`: the digit-sequence type and its base-4 indexing.
//! - `lattice`: embedding in the unit lattice, collision and closure checks.
//! - `symmetry`: reversal/chirality orbits, canonical forms, loop rotations.
//! - `search`: pruned, symmetry-aware enumeration and cyclic deduplication.
//! - `api`: string-in, string-out entry points for the CLI.

pub mod api;
pub mod lattice;
pub mod search;
pub mod state;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{enumerate, is_physical};
pub use state::{State, StateError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::lattice::{
        embed, simulate, Face, Failure, Orientation, Point, Prism, Simulation,
    };
    pub use crate::search::{CyclicDedup, Enumerator, SearchCfg, SearchStats, Solutions};
    pub use crate::state::{State, StateError};
    pub use crate::symmetry::{normalize, variants, Symmetry};
}
