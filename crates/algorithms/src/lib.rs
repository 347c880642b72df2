//! Elliptic curve arithmetic for the edcurves library
//!
//! This crate implements the curve registry and the point arithmetic engine
//! for a family of Twisted Edwards curves over large prime fields. All
//! arithmetic is pure and reentrant; the only shared state is the registry,
//! which is built once on first use.
//!
//! # Example
//!
//! ```
//! use edcurves_algorithms::{e222, EllipticCurve};
//! use num_bigint::BigUint;
//!
//! let curve = e222();
//! assert!(curve.is_on_curve(&curve.gx, &curve.gy));
//!
//! let (x, y) = curve.scalar_base_mult(&curve.order_bytes());
//! assert_eq!((x, y), (BigUint::from(0u32), BigUint::from(1u32)));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error re-exports
pub use edcurves_api::{EllipticCurve, Error, Result, SecretScalar};

// Elliptic Curve primitives
pub mod ec;
pub use ec::edwards::{
    all_curves, curve1174, curve41417, e222, e382, e521, ed448_goldilocks, AffinePoint,
    CurveId, EdwardsCurve, ProjectivePoint,
};
