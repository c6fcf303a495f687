//! Cyclic deduplication of closed loops.

use std::collections::HashSet;

use crate::state::State;
use crate::symmetry::cyclic_orbit;

/// Pass through the first member of each cyclic-equivalence class.
///
/// Every incoming loop (yielded or not) marks its whole `cyclic_orbit` as used,
/// so the class representative is whichever member arrives first. With an
/// ascending input stream that is the lexicographically first one found.
///
/// Memory: the used set grows by up to `16 * (len + 1)` states per input loop
/// and is the dominant cost of a cyclic search.
#[derive(Debug)]
pub struct CyclicDedup<I> {
    inner: I,
    reverse: bool,
    chiral: bool,
    used: HashSet<State>,
}

impl<I> CyclicDedup<I> {
    pub fn new(inner: I, reverse: bool, chiral: bool) -> Self {
        Self {
            inner,
            reverse,
            chiral,
            used: HashSet::new(),
        }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Number of states marked as equivalent to something already seen.
    pub fn used_len(&self) -> usize {
        self.used.len()
    }
}

impl<I: Iterator<Item = State>> Iterator for CyclicDedup<I> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        loop {
            let state = self.inner.next()?;
            let fresh = !self.used.contains(&state);
            self.used.extend(cyclic_orbit(&state, self.reverse, self.chiral));
            if fresh {
                return Some(state);
            }
        }
    }
}
