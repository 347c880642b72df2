//! Curve parameter bundle and the point arithmetic engine

use edcurves_api::{EllipticCurve, Result, SecretScalar};
use edcurves_params::EdwardsCurveConstants;
use num_bigint::BigUint;
use num_traits::{Num, One};
use rand::{CryptoRng, RngCore};

use super::field;
use super::keygen;
use super::point::{AffinePoint, ProjectivePoint};

/// Parameters of a Twisted Edwards curve `a·x² + y² = 1 + d·x²·y²` over 𝔽ₚ
///
/// Coefficients are stored reduced into `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdwardsCurve {
    /// Canonical curve name
    pub name: &'static str,
    /// Prime field modulus
    pub p: BigUint,
    /// Coefficient a
    pub a: BigUint,
    /// Coefficient d
    pub d: BigUint,
    /// Generator x-coordinate
    pub gx: BigUint,
    /// Generator y-coordinate
    pub gy: BigUint,
    /// Order of the generator subgroup
    pub n: BigUint,
    /// Bit length of p
    pub bit_size: usize,
}

fn decimal(curve: &str, literal: &str) -> BigUint {
    BigUint::from_str_radix(literal, 10)
        .unwrap_or_else(|e| panic!("{curve}: malformed constant {literal}: {e}"))
}

impl EdwardsCurve {
    /// Build a curve from its literal constants
    ///
    /// # Panics
    ///
    /// Panics if a decimal literal in `constants` does not parse.
    pub fn from_constants(constants: &EdwardsCurveConstants) -> Self {
        let p = field::modulus(constants.p);
        Self {
            name: constants.name,
            a: field::from_i64(constants.a, &p),
            d: field::from_i64(constants.d, &p),
            gx: decimal(constants.name, constants.g_x),
            gy: decimal(constants.name, constants.g_y),
            n: decimal(constants.name, constants.n),
            bit_size: constants.bit_size,
            p,
        }
    }

    /// The generator point (Gx, Gy)
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::new(self.gx.clone(), self.gy.clone())
    }

    /// Big-endian bytes of the subgroup order
    pub fn order_bytes(&self) -> Vec<u8> {
        self.n.to_bytes_be()
    }

    /// Length in bytes of a private key
    pub fn scalar_size(&self) -> usize {
        (self.bit_size + 7) / 8
    }

    /// Mask applied to the first private key byte so the key fits in `bit_size` bits
    pub fn key_mask(&self) -> u8 {
        0xFF >> ((8 - self.bit_size % 8) % 8)
    }

    /// Does `pt` satisfy the curve equation?
    pub fn contains(&self, pt: &AffinePoint) -> bool {
        self.is_on_curve(&pt.x, &pt.y)
    }

    /// Additive inverse: (−x mod p, y)
    pub fn negate(&self, pt: &AffinePoint) -> AffinePoint {
        AffinePoint::new(field::neg(&pt.x, &self.p), pt.y.clone())
    }

    /// Unified Twisted Edwards addition in projective coordinates
    ///
    /// The same formula serves for doubling, so every group operation in the
    /// ladder has the same shape. It is complete when `d` is a non-square
    /// relative to `a`, which holds for all registered curves.
    pub fn projective_add(&self, l: &ProjectivePoint, r: &ProjectivePoint) -> ProjectivePoint {
        let p = &self.p;

        let a = field::mul(&l.z, &r.z, p); // Z₁·Z₂
        let c = field::mul(&l.x, &r.x, p); // X₁·X₂
        let d = field::mul(&l.y, &r.y, p); // Y₁·Y₂
        let b = field::square(&a, p);
        let e = field::mul(&field::mul(&self.d, &c, p), &d, p);
        let f = field::sub(&b, &e, p);
        let g = field::add(&b, &e, p);

        // (X₁+Y₁)(X₂+Y₂) − C − D
        let x1y1 = field::add(&l.x, &l.y, p);
        let x2y2 = field::add(&r.x, &r.y, p);
        let cross = field::sub(&field::sub(&field::mul(&x1y1, &x2y2, p), &c, p), &d, p);
        let x3 = field::mul(&field::mul(&a, &f, p), &cross, p);

        let ac = field::mul(&self.a, &c, p);
        let y3 = field::mul(&field::mul(&a, &g, p), &field::sub(&d, &ac, p), p);

        let z3 = field::mul(&f, &g, p);

        ProjectivePoint::new(x3, y3, z3)
    }

    /// Convert projective coordinates back to affine
    ///
    /// A point with `Z ≡ 0` maps to `(0, 0)`.
    pub fn affine_from_projective(&self, pt: &ProjectivePoint) -> AffinePoint {
        match field::invert(&pt.z, &self.p) {
            Some(z_inv) => AffinePoint::new(
                field::mul(&pt.x, &z_inv, &self.p),
                field::mul(&pt.y, &z_inv, &self.p),
            ),
            None => AffinePoint::new(BigUint::default(), BigUint::default()),
        }
    }

    /// Group law on affine points
    pub fn point_add(&self, l: &AffinePoint, r: &AffinePoint) -> AffinePoint {
        let sum = self.projective_add(
            &ProjectivePoint::from_affine(l),
            &ProjectivePoint::from_affine(r),
        );
        self.affine_from_projective(&sum)
    }

    /// Scalar multiplication: k · base, with `k` read as a big-endian integer
    ///
    /// Every bit of every byte of `k` is processed, leading zeros included,
    /// and each step performs exactly one addition and one doubling. Only the
    /// choice of which accumulator receives which result depends on the bit.
    pub fn point_mul(&self, base: &AffinePoint, k: &[u8]) -> AffinePoint {
        let mut r0 = ProjectivePoint::identity();
        let mut r1 = ProjectivePoint::from_affine(base);

        for &byte in k {
            for i in (0..8).rev() {
                if (byte >> i) & 1 == 1 {
                    r0 = self.projective_add(&r0, &r1);
                    r1 = self.projective_add(&r1, &r1);
                } else {
                    r1 = self.projective_add(&r0, &r1);
                    r0 = self.projective_add(&r0, &r0);
                }
            }
        }

        self.affine_from_projective(&r0)
    }
}

impl EllipticCurve for EdwardsCurve {
    type FieldElement = BigUint;
    type SecretKey = SecretScalar;

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = &self.p;
        let xx = x * x;
        let yy = y * y;

        // a·x² + y²
        let lhs = (&self.a * &xx + &yy) % p;
        // 1 + d·x²·y²
        let rhs = (&self.d * &xx * &yy + BigUint::one()) % p;

        lhs == rhs
    }

    fn add(&self, lx: &BigUint, ly: &BigUint, rx: &BigUint, ry: &BigUint) -> (BigUint, BigUint) {
        let sum = self.projective_add(&ProjectivePoint::lift(lx, ly), &ProjectivePoint::lift(rx, ry));
        self.affine_from_projective(&sum).into_coordinates()
    }

    fn scalar_mult(&self, bx: &BigUint, by: &BigUint, k: &[u8]) -> (BigUint, BigUint) {
        self.point_mul(&AffinePoint::new(bx.clone(), by.clone()), k)
            .into_coordinates()
    }

    fn scalar_base_mult(&self, k: &[u8]) -> (BigUint, BigUint) {
        self.point_mul(&self.generator(), k).into_coordinates()
    }

    fn generate_key<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(SecretScalar, BigUint, BigUint)> {
        let (secret, public) = keygen::generate_keypair(self, rng)?;
        let (x, y) = public.into_coordinates();
        Ok((secret, x, y))
    }
}
