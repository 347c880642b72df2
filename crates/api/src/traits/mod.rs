//! Trait definitions for the edcurves library

pub mod curve;

pub use curve::EllipticCurve;
