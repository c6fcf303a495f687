//! Entry points for command-line and rendering collaborators.
//!
//! Both take and return plain digit strings; parsing is the only place malformed
//! input is reported.

use crate::lattice::simulate;
use crate::search::{SearchCfg, Solutions};
use crate::state::{State, StateError};
use crate::symmetry::Symmetry;

/// Is the chain described by `state` free of self-collision (and, with
/// `cyclic`, a closed loop)?
pub fn is_physical(state: &str, cyclic: bool) -> Result<bool, StateError> {
    let state: State = state.parse()?;
    Ok(simulate(&state, cyclic).is_physical())
}

/// Canonical states of length `len` under the selected symmetries, as strings,
/// in ascending order (cyclic classes represented by their first member).
pub fn enumerate(
    len: usize,
    physical: bool,
    reverse: bool,
    chiral: bool,
    cyclic: bool,
) -> Result<impl Iterator<Item = String>, StateError> {
    let cfg = SearchCfg {
        physical,
        symmetry: Symmetry {
            reverse,
            chiral,
            cyclic,
        },
    };
    Ok(Solutions::new(len, cfg)?.map(|s| s.to_string()))
}
