//! Counter-driven enumeration with subtree skips.
//!
//! Candidates are the fixed-width base-4 indices `0..end`, visited in
//! increasing order. A failed check on the prefix ending at position `p`
//! jumps to the next index that differs in that prefix: digit `p` is
//! incremented (with carry) and everything after it is zeroed.

use std::iter::FusedIterator;

use crate::lattice::simulate;
use crate::state::{State, StateError, MAX_INDEXED_LEN, RADIX};
use crate::symmetry::{is_canonical, right_turn_first};

use super::types::{SearchCfg, SearchStats};

/// Lazy stream of canonical states of one length, in ascending order.
#[derive(Clone, Debug)]
pub struct Enumerator {
    len: usize,
    cfg: SearchCfg,
    next: u64,
    end: u64,
    stats: SearchStats,
}

impl Enumerator {
    pub fn new(len: usize, cfg: SearchCfg) -> Result<Self, StateError> {
        if len > MAX_INDEXED_LEN {
            return Err(StateError::TooLong {
                len,
                max: MAX_INDEXED_LEN,
            });
        }
        let full = RADIX.pow(len as u32);
        // Under chirality a leading 3 always mirrors to a smaller leading 1.
        let end = if cfg.symmetry.chiral && len > 0 {
            full / RADIX * 3
        } else {
            full
        };
        Ok(Self {
            len,
            cfg,
            next: 0,
            end,
            stats: SearchStats::default(),
        })
    }

    #[inline]
    pub fn state_len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn cfg(&self) -> SearchCfg {
        self.cfg
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// First index after every candidate sharing digits `0..=pos` with `index`.
    #[inline]
    fn past_prefix(&self, index: u64, pos: usize) -> u64 {
        let span = RADIX.pow(self.len.saturating_sub(pos + 1) as u32);
        (index / span + 1) * span
    }
}

impl Iterator for Enumerator {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let sym = self.cfg.symmetry;
        while self.next < self.end {
            let index = self.next;
            let state = State::from_index(index, self.len);
            self.stats.candidates += 1;

            if sym.chiral {
                if let Some(pos) = right_turn_first(state.digits()) {
                    self.next = self.past_prefix(index, pos);
                    continue;
                }
            }
            if !is_canonical(&state, sym.reverse, sym.chiral) {
                self.next = index + 1;
                continue;
            }
            if self.cfg.simulates() {
                self.stats.simulations += 1;
                let sim = simulate(&state, sym.cyclic);
                if !sim.is_physical() {
                    self.next = self.past_prefix(index, sim.index);
                    continue;
                }
            }

            self.next = index + 1;
            self.stats.accepted += 1;
            return Some(state);
        }
        None
    }
}

impl FusedIterator for Enumerator {}
