use pregion_geom::{Coord, Vertex, distance_point_to_segment};
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f64, b: f64, atol: f64, rtol: f64) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn coord_f64() -> impl Strategy<Value = f64> {
    -10_000.0f64..10_000.0
}

fn arb_vertex() -> impl Strategy<Value = Vertex<()>> {
    (coord_f64(), coord_f64(), coord_f64()).prop_map(|(x, y, z)| Vertex::new(x, y, z, ()))
}

fn arb_segment() -> impl Strategy<Value = (Vertex<()>, Vertex<()>)> {
    (arb_vertex(), arb_vertex()).prop_filter("non-degenerate in x/z", |(a, b)| {
        (b.x - a.x).abs() > 1e-3 || (b.z - a.z).abs() > 1e-3
    })
}

proptest! {
    // In a single horizontal plane, never farther than the nearer endpoint
    #[test]
    fn bounded_by_endpoints((a, b) in arb_segment(), p in arb_vertex()) {
        let b = Vertex::new(b.x, a.y, b.z, ());
        let p = Vertex::new(p.x, a.y, p.z, ());
        let d = distance_point_to_segment(&a, &b, &p).unwrap();
        let nearest = p.distance_to(&a).min(p.distance_to(&b));
        prop_assert!(d <= nearest + 1e-6 + 1e-9 * nearest);
    }

    // Interpolated points on a level segment are at distance zero
    #[test]
    fn point_on_level_segment_is_zero((a, b) in arb_segment(), t in 0.0f64..=1.0) {
        let b = Vertex::new(b.x, a.y, b.z, ());
        let p = Vertex::at(
            Coord::new(a.x + t * (b.x - a.x), a.y, a.z + t * (b.z - a.z)),
            (),
        );
        let d = distance_point_to_segment(&a, &b, &p).unwrap();
        prop_assert!(approx_abs_rel(d, 0.0, 1e-6, 0.0));
    }

    // Lifting the probe straight up over a level segment adds exactly that height
    #[test]
    fn vertical_offset_adds_height((a, b) in arb_segment(), t in 0.0f64..=1.0, h in 0.0f64..256.0) {
        let b = Vertex::new(b.x, a.y, b.z, ());
        let p = Vertex::new(a.x + t * (b.x - a.x), a.y + h, a.z + t * (b.z - a.z), ());
        let d = distance_point_to_segment(&a, &b, &p).unwrap();
        prop_assert!(approx_abs_rel(d, h, 1e-6, 1e-9));
    }

    #[test]
    fn zero_length_always_rejected(a in arb_vertex(), dy in coord_f64(), p in arb_vertex()) {
        let b = Vertex::new(a.x, a.y + dy, a.z, ());
        prop_assert!(distance_point_to_segment(&a, &b, &p).is_err());
    }
}
