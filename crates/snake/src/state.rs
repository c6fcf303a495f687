//! Digit sequences ("states"): one hinge rule per joint, each in `0..=3`.
//!
//! Conventions
//! - `0` straight, `1` and `3` quarter turns in opposite senses, `2` half turn.
//! - Ordering is lexicographic on the digits, which for equal lengths equals the
//!   ordering of the fixed-width base-4 index.
//! - Parsing validates the alphabet; everything downstream assumes valid digits.

use std::fmt;
use std::str::FromStr;

/// Number of distinct hinge rules.
pub const RADIX: u64 = 4;

/// Longest state whose base-4 index (and the enumerator's upper bound) fits in `u64`.
pub const MAX_INDEXED_LEN: usize = 31;

/// Errors raised at the boundary where raw input becomes a `State`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    InvalidDigit { position: usize, found: char },
    TooLong { len: usize, max: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { position, found } => {
                write!(f, "invalid rule {found:?} at position {position} (expected 0-3)")
            }
            Self::TooLong { len, max } => {
                write!(f, "state length {len} exceeds the indexable maximum {max}")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Immutable sequence of hinge rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(Vec<u8>);

impl State {
    /// Validate and wrap raw rules.
    pub fn new(digits: Vec<u8>) -> Result<Self, StateError> {
        if let Some(position) = digits.iter().position(|&d| u64::from(d) >= RADIX) {
            return Err(StateError::InvalidDigit {
                position,
                found: char::from_digit(u32::from(digits[position]), 36).unwrap_or('?'),
            });
        }
        Ok(Self(digits))
    }

    /// Internal constructor for digits produced by transforms of valid states.
    #[inline]
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| u64::from(d) < RADIX));
        Self(digits)
    }

    /// Fixed-width base-4 expansion of `index`, most significant digit first.
    ///
    /// Pre: `len <= MAX_INDEXED_LEN` and `index < 4^len`.
    pub fn from_index(mut index: u64, len: usize) -> Self {
        debug_assert!(len <= MAX_INDEXED_LEN);
        let mut digits = vec![0u8; len];
        for slot in digits.iter_mut().rev() {
            *slot = (index % RADIX) as u8;
            index /= RADIX;
        }
        debug_assert_eq!(index, 0, "index does not fit in {len} digits");
        Self(digits)
    }

    /// Base-4 value of the digits (inverse of `from_index`).
    pub fn index(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &d| acc * RADIX + u64::from(d))
    }

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_digits(self) -> Vec<u8> {
        self.0
    }
}

impl FromStr for State {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0'..='3' => Ok(c as u8 - b'0'),
                found => Err(StateError::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
