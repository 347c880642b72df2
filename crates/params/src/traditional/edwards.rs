//! Constants for Twisted Edwards curves
//!
//! Every curve here satisfies `a·x² + y² = 1 + d·x²·y² (mod p)` with `a = 1`.
//! Coordinates and orders are decimal literals; coefficients are small signed
//! integers and are reduced into the field by the consumer.

/// Shape of a curve's prime modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeForm {
    /// p = 2^k − c
    PseudoMersenne {
        /// Exponent k
        k: u32,
        /// Subtracted constant c
        c: u32,
    },
    /// p = 2^k − 2^m − 1
    Trinomial {
        /// Leading exponent k
        k: u32,
        /// Middle exponent m
        m: u32,
    },
}

/// Literal parameters of a named Twisted Edwards curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdwardsCurveConstants {
    /// Canonical curve name
    pub name: &'static str,
    /// Form of the prime field modulus
    pub p: PrimeForm,
    /// Coefficient a
    pub a: i64,
    /// Coefficient d (may be negative)
    pub d: i64,
    /// Generator x-coordinate, decimal
    pub g_x: &'static str,
    /// Generator y-coordinate, decimal
    pub g_y: &'static str,
    /// Order of the generator subgroup, decimal
    pub n: &'static str,
    /// Bit length of p
    pub bit_size: usize,
}

impl EdwardsCurveConstants {
    /// Length in bytes of a private key for this curve
    pub const fn scalar_size(&self) -> usize {
        (self.bit_size + 7) / 8
    }
}

/// E-222: p = 2^222 − 117
pub const E222: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "E-222",
    p: PrimeForm::PseudoMersenne { k: 222, c: 117 },
    a: 1,
    d: 160102,
    g_x: "2705691079882681090389589001251962954446177367541711474502428610129",
    g_y: "28",
    n: "1684996666696914987166688442938726735569737456760058294185521417407",
    bit_size: 222,
};

/// E-382: p = 2^382 − 105
pub const E382: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "E-382",
    p: PrimeForm::PseudoMersenne { k: 382, c: 105 },
    a: 1,
    d: -67254,
    g_x: "3914921414754292646847594472454013487047137431784830634731377862923477302047857640522480241298429278603678181725699",
    g_y: "17",
    n: "2462625387274654950767440006258975862817483704404090416745738034557663054564649171262659326683244604346084081047321",
    bit_size: 382,
};

/// Ed448-Goldilocks: p = 2^448 − 2^224 − 1
pub const ED448_GOLDILOCKS: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "Ed448-Goldilocks",
    p: PrimeForm::Trinomial { k: 448, m: 224 },
    a: 1,
    d: -39081,
    g_x: "117812161263436946737282484343310064665180535357016373416879082147939404277809514858788439644911793978499419995990477371552926308078495",
    g_y: "19",
    n: "181709681073901722637330951972001133588410340171829515070372549795146003961539585716195755291692375963310293709091662304773755859649779",
    bit_size: 448,
};

/// E-521: p = 2^521 − 1
pub const E521: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "E-521",
    p: PrimeForm::PseudoMersenne { k: 521, c: 1 },
    a: 1,
    d: -376014,
    g_x: "1571054894184995387535939749894317568645297350402905821437625181152304994381188529632591196067604100772673927915114267193389905003276673749012051148356041324",
    g_y: "12",
    n: "1716199415032652428745475199770348304317358825035826352348615864796385795849413675475876651663657849636693659065234142604319282948702542317993421293670108523",
    bit_size: 521,
};

/// Curve1174: p = 2^251 − 9
pub const CURVE1174: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "Curve1174",
    p: PrimeForm::PseudoMersenne { k: 251, c: 9 },
    a: 1,
    d: -1174,
    g_x: "1582619097725911541954547006453739763381091388846394833492296309729998839514",
    g_y: "3037538013604154504764115728651437646519513534305223422754827055689195992590",
    n: "904625697166532776746648320380374280092339035279495474023489261773642975601",
    bit_size: 251,
};

/// Curve41417: p = 2^414 − 17
pub const CURVE41417: EdwardsCurveConstants = EdwardsCurveConstants {
    name: "Curve41417",
    p: PrimeForm::PseudoMersenne { k: 414, c: 17 },
    a: 1,
    d: 3617,
    g_x: "17319886477121189177719202498822615443556957307604340815256226171904769976866975908866528699294134494857887698432266169206165",
    g_y: "34",
    n: "5288447750321988791615322464262168318627237463714249754277190328831105466135348245791335989419337099796002495788978276839289",
    bit_size: 414,
};

/// All named curves, in registry order
pub const NAMED_CURVES: [&EdwardsCurveConstants; 6] = [
    &E222,
    &E382,
    &ED448_GOLDILOCKS,
    &E521,
    &CURVE1174,
    &CURVE41417,
];
