//! Fixed chain poses (internal).
//!
//! Policy
//! - The start pose is a design constant; the closing pose follows from it.
//!   Changing one without the other breaks every cyclic verdict.

use super::types::{Face, Point};

/// Cell of the first prism.
#[inline]
pub(crate) fn start_cell() -> Point {
    Point::zeros()
}

/// Cell the last prism of a closed loop must occupy: one step along the start
/// pose's inner face (`-y`).
#[inline]
pub(crate) fn closing_cell() -> Point {
    Point::new(0, -1, 0)
}

/// Lead face of the last prism of a closed loop; points back into the start cell.
pub(crate) const CLOSING_LEAD: Face = Face::PosY;
