//! Property-based tests for the scalar ladder

use edcurves_algorithms::{curve1174, e222};
use edcurves_api::EllipticCurve;
use num_bigint::BigUint;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scalar_mult_distributes_over_addition(a in any::<u16>(), b in any::<u16>()) {
        let crv = curve1174();
        let sum = BigUint::from(a) + BigUint::from(b);

        let (ax, ay) = crv.scalar_base_mult(&a.to_be_bytes());
        let (bx, by) = crv.scalar_base_mult(&b.to_be_bytes());
        let expected = crv.scalar_base_mult(&sum.to_bytes_be());

        prop_assert_eq!(crv.add(&ax, &ay, &bx, &by), expected);
    }

    #[test]
    fn leading_zero_bytes_do_not_change_result(k in prop::collection::vec(any::<u8>(), 1..8), pad in 0usize..4) {
        let crv = e222();
        let mut padded = vec![0u8; pad];
        padded.extend_from_slice(&k);

        prop_assert_eq!(crv.scalar_base_mult(&k), crv.scalar_base_mult(&padded));
    }

    #[test]
    fn scalar_results_stay_on_curve(k in prop::collection::vec(any::<u8>(), 0..16)) {
        let crv = curve1174();
        let (x, y) = crv.scalar_base_mult(&k);
        prop_assert!(crv.is_on_curve(&x, &y));
    }

    #[test]
    fn nested_scalar_mult_commutes(a in 1u8.., b in 1u8..) {
        let crv = e222();
        let (ax, ay) = crv.scalar_base_mult(&[a]);
        let (bx, by) = crv.scalar_base_mult(&[b]);

        prop_assert_eq!(crv.scalar_mult(&ax, &ay, &[b]), crv.scalar_mult(&bx, &by, &[a]));
    }
}
