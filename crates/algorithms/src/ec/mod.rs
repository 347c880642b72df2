//! Elliptic Curve Primitives
//!
//! This module provides the Twisted Edwards curve family: E-222, E-382,
//! Ed448-Goldilocks, E-521, Curve1174 and Curve41417, all served by one
//! generic arithmetic engine.

pub mod edwards;
