//! The registry is built once, even under concurrent first access

use std::sync::{Arc, Barrier};
use std::thread;

use edcurves_algorithms::{all_curves, e222, CurveId};
use edcurves_api::EllipticCurve;

#[test]
fn test_concurrent_first_access_builds_once() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let id = CurveId::ALL[i % CurveId::ALL.len()];
                let curve = id.curve();
                assert!(curve.is_on_curve(&curve.gx, &curve.gy));
                CurveId::ALL
                    .iter()
                    .map(|id| id.curve() as *const _ as usize)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let addresses: Vec<Vec<usize>> = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect();

    for seen in &addresses[1..] {
        assert_eq!(seen, &addresses[0]);
    }

    let local: Vec<usize> = all_curves().map(|c| c as *const _ as usize).collect();
    assert_eq!(local, addresses[0]);
}

#[test]
fn test_shared_curve_across_threads() {
    let curve = e222();
    let handles: Vec<_> = (1u8..=4)
        .map(|k| thread::spawn(move || curve.scalar_base_mult(&[k])))
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect();

    for (k, r) in (1u8..=4).zip(results) {
        assert_eq!(r, curve.scalar_base_mult(&[k]));
    }
}
