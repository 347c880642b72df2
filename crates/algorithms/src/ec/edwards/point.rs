//! Affine and projective point representations

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Affine point (x, y) on a Twisted Edwards curve
///
/// The neutral element is `(0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    pub x: BigUint,
    /// y-coordinate
    pub y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The neutral element (0, 1)
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    /// Is this the neutral element?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    /// Split into `(x, y)`
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl From<(BigUint, BigUint)> for AffinePoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Self { x, y }
    }
}

/// Projective coordinates (X : Y : Z) with x = X/Z and y = Y/Z
///
/// `Z ≡ 0` has no affine counterpart; converting such a point yields the
/// `(0, 0)` sentinel.
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    /// X coordinate
    pub x: BigUint,
    /// Y coordinate
    pub y: BigUint,
    /// Z coordinate
    pub z: BigUint,
}

impl ProjectivePoint {
    /// Create a point from raw projective coordinates
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Self { x, y, z }
    }

    /// Neutral element in projective form: (0 : 1 : 1)
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::one(),
        }
    }

    /// Lift an affine point to (x : y : 1)
    pub fn from_affine(p: &AffinePoint) -> Self {
        Self::lift(&p.x, &p.y)
    }

    /// Lift raw affine coordinates to (x : y : 1)
    pub fn lift(x: &BigUint, y: &BigUint) -> Self {
        Self {
            x: x.clone(),
            y: y.clone(),
            z: BigUint::one(),
        }
    }
}
