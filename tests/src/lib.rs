//! Testing utilities for the edcurves library

use edcurves_algorithms::{all_curves, AffinePoint, EdwardsCurve};
use edcurves_api::{EllipticCurve, SecretScalar};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Every registered curve, in registry order
pub fn curves() -> Vec<&'static EdwardsCurve> {
    all_curves().collect()
}

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generate a key pair, panicking on failure
pub fn keypair<R: CryptoRng + RngCore>(
    curve: &EdwardsCurve,
    rng: &mut R,
) -> (SecretScalar, AffinePoint) {
    let (sk, x, y) = curve
        .generate_key(rng)
        .unwrap_or_else(|e| panic!("{}: key generation failed: {e}", curve.name));
    (sk, AffinePoint::new(x, y))
}

/// RNG that delivers `budget` bytes and then reports exhaustion
pub struct LimitedRng<R> {
    budget: usize,
    inner: R,
}

impl<R> LimitedRng<R> {
    /// Wrap `inner`, allowing at most `budget` bytes to be drawn
    pub fn new(inner: R, budget: usize) -> Self {
        Self { budget, inner }
    }
}

impl<R: RngCore> RngCore for LimitedRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("LimitedRng: {e}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if dest.len() > self.budget {
            return Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "random source exhausted",
            )));
        }
        self.budget -= dest.len();
        self.inner.try_fill_bytes(dest)
    }
}

impl<R: CryptoRng> CryptoRng for LimitedRng<R> {}
