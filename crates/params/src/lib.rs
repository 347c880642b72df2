//! Constant values for the edcurves library
//!
//! Curve constants are kept as literal data (decimal strings and small
//! signed coefficients) so this crate stays dependency-free; the
//! algorithms crate turns them into big integers once, at first use.

#![no_std]

pub mod traditional;

pub use traditional::edwards::{
    EdwardsCurveConstants, PrimeForm, CURVE1174, CURVE41417, E222, E382, E521,
    ED448_GOLDILOCKS, NAMED_CURVES,
};
