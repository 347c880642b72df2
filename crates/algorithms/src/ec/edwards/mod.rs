//! Twisted Edwards Elliptic Curve Primitives
//!
//! Generic arithmetic on curves of the form
//! `a·x² + y² = 1 + d·x²·y²` over 𝔽ₚ, for large primes p. One engine serves
//! every registered curve; a curve is just an [`EdwardsCurve`] parameter
//! bundle obtained from the registry.
//!
//! Implements:
//! - projective coordinates (X:Y:Z) so a field inversion is only paid when
//!   converting back to affine,
//! - the unified addition law, used for both addition and doubling,
//! - a two-accumulator binary ladder for scalar multiplication that performs
//!   the same number of group operations for every scalar of a given length,
//! - curve membership tests and rejection-sampled key generation.
//!
//! Registered curves: E-222, E-382, Ed448-Goldilocks, E-521, Curve1174 and
//! Curve41417.

mod curve;
mod field;
mod keygen;
mod point;
mod registry;

pub use curve::EdwardsCurve;
pub use keygen::generate_keypair;
pub use point::{AffinePoint, ProjectivePoint};
pub use registry::{
    all_curves, curve1174, curve41417, e222, e382, e521, ed448_goldilocks, CurveId,
};
