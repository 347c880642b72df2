//! Arithmetic in the prime field 𝔽ₚ
//!
//! Field elements are plain `BigUint` values. Every helper reduces its
//! result into `[0, p)`; subtraction reduces its operands first so callers
//! may pass unreduced values.

use edcurves_params::PrimeForm;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Expand a modulus description into the prime itself
pub fn modulus(form: PrimeForm) -> BigUint {
    match form {
        PrimeForm::PseudoMersenne { k, c } => (BigUint::one() << k) - c,
        PrimeForm::Trinomial { k, m } => (BigUint::one() << k) - (BigUint::one() << m) - 1u32,
    }
}

/// Map a small signed integer into the field
pub fn from_i64(v: i64, p: &BigUint) -> BigUint {
    let magnitude = BigUint::from(v.unsigned_abs()) % p;
    if v < 0 {
        neg(&magnitude, p)
    } else {
        magnitude
    }
}

/// (a + b) mod p
#[inline]
pub fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// (a − b) mod p
#[inline]
pub fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

/// (a · b) mod p
#[inline]
pub fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// a² mod p
#[inline]
pub fn square(a: &BigUint, p: &BigUint) -> BigUint {
    mul(a, a, p)
}

/// −a mod p
#[inline]
pub fn neg(a: &BigUint, p: &BigUint) -> BigUint {
    (p - (a % p)) % p
}

/// a⁻¹ mod p, via Fermat's little theorem (p must be prime)
///
/// Returns `None` when `a ≡ 0`.
pub fn invert(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return None;
    }
    Some(a.modpow(&(p - 2u32), p))
}
