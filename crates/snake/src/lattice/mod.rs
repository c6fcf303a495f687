//! Lattice embedding of a prism chain.
//!
//! Purpose
//! - Place each prism of a state in a unit lattice cell with one of 24 discrete
//!   orientations, and decide whether the chain is physically realizable
//!   (no self-collision) and, optionally, whether it closes into a loop.
//!
//! Conventions
//! - The first prism sits at the origin with lead `+x` and inner `-y`.
//! - A cell holds at most two prisms, and only as antipodal halves
//!   (`Orientation::is_compatible`).
//! - The simulator's failure index is load-bearing: every state sharing the
//!   failing prefix fails identically, so callers may skip that whole subtree.
//!
//! Code cross-refs: `search::Enumerator` (subtree skip), `api::is_physical`.

mod cfg;
mod occupancy;
mod simulate;
mod types;

pub use occupancy::Occupancy;
pub use simulate::{embed, simulate, Failure, Simulation};
pub use types::{Face, Orientation, Point, Prism};
