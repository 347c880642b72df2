//! Curve trait for edcurves
//!
//! Every registered curve exposes the same surface: a membership test,
//! affine addition, scalar multiplication (by an arbitrary point or by the
//! generator) and key generation. Points cross this boundary as plain
//! coordinate pairs, scalars as big-endian byte strings.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for elliptic curve groups
///
/// All arithmetic methods are total: they never fail on inputs that are
/// field elements of the curve. Only [`EllipticCurve::generate_key`] can
/// fail, and only when the random source does.
pub trait EllipticCurve {
    /// Field element type used for coordinates
    type FieldElement: Clone + PartialEq + core::fmt::Debug;

    /// Private key type - zeroizable and readable as the raw scalar bytes
    type SecretKey: Zeroize + AsRef<[u8]>;

    /// Returns the name of this curve
    fn name(&self) -> &'static str;

    /// Check whether `(x, y)` satisfies the curve equation
    fn is_on_curve(&self, x: &Self::FieldElement, y: &Self::FieldElement) -> bool;

    /// Add two affine points
    fn add(
        &self,
        lx: &Self::FieldElement,
        ly: &Self::FieldElement,
        rx: &Self::FieldElement,
        ry: &Self::FieldElement,
    ) -> (Self::FieldElement, Self::FieldElement);

    /// Multiply the point `(bx, by)` by the big-endian scalar `k`
    fn scalar_mult(
        &self,
        bx: &Self::FieldElement,
        by: &Self::FieldElement,
        k: &[u8],
    ) -> (Self::FieldElement, Self::FieldElement);

    /// Multiply the curve generator by the big-endian scalar `k`
    fn scalar_base_mult(&self, k: &[u8]) -> (Self::FieldElement, Self::FieldElement);

    /// Generate a private key and its public point using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must draw all key material from `rng` and must
    /// surface a failing source as an error instead of retrying it.
    fn generate_key<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::SecretKey, Self::FieldElement, Self::FieldElement)>;
}
