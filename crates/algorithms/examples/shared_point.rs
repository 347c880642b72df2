use edcurves_algorithms::{CurveId, EllipticCurve};
use rand::rngs::OsRng;

fn main() {
    for id in CurveId::ALL {
        let curve = id.curve();

        // Two parties each generate a key pair
        let (alice_sk, alice_x, alice_y) = curve.generate_key(&mut OsRng).unwrap();
        let (bob_sk, bob_x, bob_y) = curve.generate_key(&mut OsRng).unwrap();

        // Each multiplies the other's public point by their own private scalar
        let alice_view = curve.scalar_mult(&bob_x, &bob_y, alice_sk.as_bytes());
        let bob_view = curve.scalar_mult(&alice_x, &alice_y, bob_sk.as_bytes());

        assert_eq!(alice_view, bob_view);
        println!("{:<18} shared x = {:x}", id, alice_view.0);
    }
}
