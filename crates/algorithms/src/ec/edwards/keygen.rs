//! Private key generation

use edcurves_api::{Error, Result, SecretScalar};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::curve::EdwardsCurve;
use super::point::AffinePoint;

/// Generate a private key and its public point `k · G`
///
/// Draws `ceil(bit_size / 8)` bytes, clears the bits of the first byte that
/// lie above `bit_size`, and multiplies the generator. A draw whose public
/// point is the neutral element is discarded and redrawn; there is no bound
/// on the number of redraws. A failing random source ends the call with
/// [`Error::RandomGenerationError`].
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &EdwardsCurve,
    rng: &mut R,
) -> Result<(SecretScalar, AffinePoint)> {
    let mut buf = Zeroizing::new(vec![0u8; curve.scalar_size()]);
    let mask = curve.key_mask();
    let g = curve.generator();
    let mut attempt: u64 = 0;

    loop {
        attempt += 1;

        if let Err(e) = rng.try_fill_bytes(buf.as_mut_slice()) {
            tracing::debug!(curve = curve.name, error = %e, "random source failed");
            return Err(Error::from(e));
        }

        if let Some(first) = buf.first_mut() {
            *first &= mask;
        }

        let public = curve.point_mul(&g, &buf);
        if !public.is_identity() {
            return Ok((SecretScalar::new(core::mem::take(&mut *buf)), public));
        }

        tracing::trace!(curve = curve.name, attempt, "neutral public point, redrawing");
    }
}
