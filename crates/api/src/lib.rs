//! Public API traits and types for the edcurves library
//!
//! This crate provides the public API surface shared by every curve in the
//! edcurves ecosystem: the error type, the [`EllipticCurve`] trait and the
//! zeroizing [`SecretScalar`] returned by key generation.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretScalar;

pub use traits::EllipticCurve;
pub use traits::curve;
