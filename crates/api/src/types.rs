//! Core types with security guarantees for the edcurves library

use core::fmt;
use core::ops::Deref;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// Private scalar bytes that are securely zeroed when dropped
///
/// This type provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar {
    data: Vec<u8>,
}

impl SecretScalar {
    /// Create a new instance from an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice that must be exactly `expected` bytes long
    pub fn from_slice(slice: &[u8], expected: usize) -> Result<Self> {
        validate::length("SecretScalar::from_slice", slice.len(), expected)?;
        Ok(Self {
            data: slice.to_vec(),
        })
    }

    /// Borrow the big-endian scalar bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretScalar {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for SecretScalar {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        // slices of unequal length compare unequal without inspecting contents
        self.data.as_slice().ct_eq(other.data.as_slice()).into()
    }
}

impl Eq for SecretScalar {}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretScalar({})[REDACTED]", self.data.len())
    }
}
