//! Symmetry orbits and canonical forms of states.
//!
//! Purpose
//! - Decide when two states describe the same shape up to the selected
//!   symmetries: reversal (read the chain from the other end), chirality
//!   (mirror image, swapping rules `1` and `3`), and cyclic rotation (for closed
//!   loops, start at another joint).
//! - The canonical form is the lexicographically least member of the
//!   reversal/chirality orbit.
//!
//! Conventions
//! - Cyclic rotation is not part of `variants`/`normalize`. A closed loop of
//!   `n` rules has `n + 1` joints, the last of which is implied, so its rotations
//!   are only known once the loop is found. `cyclic_orbit` expands them for the
//!   deduplicator in `search`.

use crate::state::State;


/// Which transforms count as equivalences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Symmetry {
    pub reverse: bool,
    pub chiral: bool,
    pub cyclic: bool,
}

/// Mirror one rule: quarter turns swap sense, `0` and `2` are fixed.
#[inline]
pub fn chiral_digit(rule: u8) -> u8 {
    match rule {
        1 => 3,
        3 => 1,
        r => r,
    }
}

/// Mirror image of a state.
pub fn mirrored(state: &State) -> State {
    State::from_digits(state.digits().iter().map(|&d| chiral_digit(d)).collect())
}

/// The same chain read from the other end.
pub fn reversed(state: &State) -> State {
    State::from_digits(state.digits().iter().rev().copied().collect())
}

/// Orbit of `state` under the selected transforms (1, 2, or 4 members,
/// duplicates kept): the identity first, then reversals, then mirror images.
pub fn variants(state: &State, reverse: bool, chiral: bool) -> Vec<State> {
    let mut orbit = Vec::with_capacity(4);
    orbit.push(state.clone());
    if reverse {
        orbit.push(reversed(state));
    }
    if chiral {
        let mirrors: Vec<State> = orbit.iter().map(mirrored).collect();
        orbit.extend(mirrors);
    }
    orbit
}

/// Lexicographically least member of the orbit.
pub fn normalize(state: &State, reverse: bool, chiral: bool) -> State {
    variants(state, reverse, chiral)
        .into_iter()
        .min()
        .unwrap_or_default()
}

/// `normalize(state, reverse, chiral) == *state`, without building the orbit.
pub fn is_canonical(state: &State, reverse: bool, chiral: bool) -> bool {
    let d = state.digits();
    let fwd = || d.iter().copied();
    let rev = || d.iter().rev().copied();
    (!reverse || fwd().le(rev()))
        && (!chiral || fwd().le(fwd().map(chiral_digit)))
        && (!(reverse && chiral) || fwd().le(rev().map(chiral_digit)))
}

/// Position of the first `3` when it precedes every `1`.
///
/// Such a state is never canonical under chirality: its mirror image agrees up
/// to that position and has a `1` there.
#[inline]
pub fn right_turn_first(digits: &[u8]) -> Option<usize> {
    for (pos, &d) in digits.iter().enumerate() {
        match d {
            1 => return None,
            3 => return Some(pos),
            _ => {}
        }
    }
    None
}

/// Rotations of a closed loop: for each of the four rules the implied closing
/// joint could carry, every rotation of the `n + 1` joints with the joint that
/// lands last dropped.
pub fn closing_rotations(state: &State) -> impl Iterator<Item = State> + '_ {
    let n = state.len();
    (0u8..4).flat_map(move |closing| {
        let joints: Vec<u8> = state
            .digits()
            .iter()
            .copied()
            .chain(std::iter::once(closing))
            .collect();
        (0..=n).map(move |k| {
            State::from_digits(joints.iter().cycle().skip(k).take(n).copied().collect())
        })
    })
}

/// Every state equivalent to a closed loop: its closing rotations and their
/// reversal/chirality orbits.
pub fn cyclic_orbit(state: &State, reverse: bool, chiral: bool) -> Vec<State> {
    closing_rotations(state)
        .flat_map(|rot| variants(&rot, reverse, chiral))
        .collect()
}
