//! # edcurves
//!
//! Twisted Edwards curve arithmetic over large prime fields.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edcurves = "0.3"
//! ```
//!
//! ```no_run
//! use edcurves::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let curve = edcurves::algorithms::e521();
//! let (secret, x, y) = curve.generate_key(&mut OsRng).unwrap();
//! assert!(curve.is_on_curve(&x, &y));
//! let _shared = curve.scalar_mult(&x, &y, secret.as_bytes());
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the curve registry and arithmetic engine
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edcurves-api`]: error type, the `EllipticCurve` trait and secret types
//! - [`edcurves-params`]: literal constants of the named curves
//! - [`edcurves-algorithms`]: curve registry and point arithmetic

// Core re-exports (always available)
pub use edcurves_api as api;
pub use edcurves_params as params;

#[cfg(feature = "algorithms")]
pub use edcurves_algorithms as algorithms;

/// Common imports for edcurves users
pub mod prelude {
    pub use crate::api::{EllipticCurve, Error, Result, SecretScalar};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::edwards::{
        all_curves, AffinePoint, CurveId, EdwardsCurve, ProjectivePoint,
    };

    pub use num_bigint::BigUint;
}
