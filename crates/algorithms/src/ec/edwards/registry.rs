//! Registry of the named curves
//!
//! The six bundles are built together on first access of any accessor and
//! shared as `&'static` afterwards.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use edcurves_api::Error;
use edcurves_params::{EdwardsCurveConstants, NAMED_CURVES};

use super::curve::EdwardsCurve;

struct Registry {
    curves: [EdwardsCurve; 6],
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    fn build() -> Self {
        let span = tracing::debug_span!("edwards_registry_init");
        let _enter = span.enter();

        let curves = NAMED_CURVES.map(|constants| {
            let curve = EdwardsCurve::from_constants(constants);
            tracing::debug!(curve = curve.name, bits = curve.bit_size, "curve parameters ready");
            curve
        });

        Self { curves }
    }
}

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::build)
}

/// Identifier of a registered curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// E-222
    E222,
    /// E-382
    E382,
    /// Ed448-Goldilocks
    Ed448Goldilocks,
    /// E-521
    E521,
    /// Curve1174
    Curve1174,
    /// Curve41417
    Curve41417,
}

impl CurveId {
    /// Every registered curve, in registry order
    pub const ALL: [CurveId; 6] = [
        CurveId::E222,
        CurveId::E382,
        CurveId::Ed448Goldilocks,
        CurveId::E521,
        CurveId::Curve1174,
        CurveId::Curve41417,
    ];

    /// The curve's parameter bundle
    pub fn curve(self) -> &'static EdwardsCurve {
        &registry().curves[self as usize]
    }

    /// The literal constants the bundle is built from
    pub fn constants(self) -> &'static EdwardsCurveConstants {
        NAMED_CURVES[self as usize]
    }

    /// Canonical curve name
    pub fn name(self) -> &'static str {
        self.constants().name
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// "E-222", "e222" and "E_222" all name the same curve
fn normalize(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveId::ALL
            .into_iter()
            .find(|id| normalize(id.name()).eq(normalize(s)))
            .ok_or_else(|| Error::param("CurveId", format!("unknown curve name '{s}'")))
    }
}

/// E-222 curve parameters
pub fn e222() -> &'static EdwardsCurve {
    CurveId::E222.curve()
}

/// E-382 curve parameters
pub fn e382() -> &'static EdwardsCurve {
    CurveId::E382.curve()
}

/// Ed448-Goldilocks curve parameters
pub fn ed448_goldilocks() -> &'static EdwardsCurve {
    CurveId::Ed448Goldilocks.curve()
}

/// E-521 curve parameters
pub fn e521() -> &'static EdwardsCurve {
    CurveId::E521.curve()
}

/// Curve1174 parameters
pub fn curve1174() -> &'static EdwardsCurve {
    CurveId::Curve1174.curve()
}

/// Curve41417 parameters
pub fn curve41417() -> &'static EdwardsCurve {
    CurveId::Curve41417.curve()
}

/// Iterate over every registered curve
pub fn all_curves() -> impl Iterator<Item = &'static EdwardsCurve> {
    registry().curves.iter()
}
