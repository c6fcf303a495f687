//! Faces, orientations, and lattice cells.

use nalgebra::Vector3;
use std::fmt;

/// Integer lattice cell anchoring one prism.
pub type Point = Vector3<i32>;

/// Signed unit axis naming one face of a prism's bounding cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

/// For each face (in declaration order), the four perpendicular faces in hinge order.
static RINGS: [[Face; 4]; 6] = {
    use Face::*;
    [
        [PosY, PosZ, NegY, NegZ], // +x
        [PosZ, PosY, NegZ, NegY], // -x
        [PosZ, PosX, NegZ, NegX], // +y
        [PosX, PosZ, NegX, NegZ], // -y
        [PosX, PosY, NegX, NegY], // +z
        [PosY, PosX, NegY, NegX], // -z
    ]
};

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    #[inline]
    pub const fn flip(self) -> Face {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// Lattice step through this face.
    #[inline]
    pub fn unit(self) -> Point {
        match self {
            Face::PosX => Point::new(1, 0, 0),
            Face::NegX => Point::new(-1, 0, 0),
            Face::PosY => Point::new(0, 1, 0),
            Face::NegY => Point::new(0, -1, 0),
            Face::PosZ => Point::new(0, 0, 1),
            Face::NegZ => Point::new(0, 0, -1),
        }
    }

    /// Perpendicular faces in the order a hinge about this axis visits them.
    #[inline]
    pub fn ring(self) -> &'static [Face; 4] {
        &RINGS[self as usize]
    }

    #[inline]
    pub const fn is_perpendicular(self, other: Face) -> bool {
        !matches!(
            (self, other),
            (Face::PosX | Face::NegX, Face::PosX | Face::NegX)
                | (Face::PosY | Face::NegY, Face::PosY | Face::NegY)
                | (Face::PosZ | Face::NegZ, Face::PosZ | Face::NegZ)
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Face::PosX => "+x",
            Face::NegX => "-x",
            Face::PosY => "+y",
            Face::NegY => "-y",
            Face::PosZ => "+z",
            Face::NegZ => "-z",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete prism pose: `lead` faces the next prism, `inner` is the reference
/// face for hinge rotation.
///
/// Invariant: `lead` and `inner` are perpendicular (24 reachable poses).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    lead: Face,
    inner: Face,
}

impl Orientation {
    /// Pose of the first prism of every chain.
    pub const START: Orientation = Orientation {
        lead: Face::PosX,
        inner: Face::NegY,
    };

    /// `None` unless the faces are perpendicular.
    pub fn new(lead: Face, inner: Face) -> Option<Self> {
        lead.is_perpendicular(inner).then_some(Self { lead, inner })
    }

    #[inline]
    pub fn lead(self) -> Face {
        self.lead
    }

    #[inline]
    pub fn inner(self) -> Face {
        self.inner
    }

    /// Pose of the successor prism across a hinge set to `rule`.
    ///
    /// The successor's inner face is the flipped lead; its lead starts at the
    /// flipped inner face and moves `rule` steps around the inner face's ring.
    #[inline]
    pub fn advance(self, rule: u8) -> Self {
        let inner = self.lead.flip();
        let from = self.inner.flip();
        let ring = inner.ring();
        let pos = ring
            .iter()
            .position(|&f| f == from)
            .expect("perpendicular faces share a ring");
        Self {
            lead: ring[(pos + usize::from(rule)) % ring.len()],
            inner,
        }
    }

    /// Two prisms fit in one cell only as antipodal halves of the cube.
    #[inline]
    pub fn is_compatible(self, other: Orientation) -> bool {
        (self.lead == other.lead.flip() && self.inner == other.inner.flip())
            || (self.lead == other.inner.flip() && self.inner == other.lead.flip())
    }

    /// All 24 valid poses.
    pub fn all() -> impl Iterator<Item = Orientation> {
        Face::ALL.into_iter().flat_map(|lead| {
            lead.ring()
                .iter()
                .map(move |&inner| Orientation { lead, inner })
        })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lead, self.inner)
    }
}

/// One placed prism of an embedded chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prism {
    pub cell: Point,
    pub orientation: Orientation,
}
