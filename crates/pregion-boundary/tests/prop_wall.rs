use hashbrown::HashSet;
use pregion_boundary::{ColumnScan, EdgeTrace, TerrainProbe, trace_edge, wall_columns};
use pregion_geom::Column;
use proptest::prelude::*;

fn arb_column() -> impl Strategy<Value = Column> {
    (-40i32..=40, -40i32..=40).prop_map(|(x, z)| Column::new(x, z))
}

fn arb_trace() -> impl Strategy<Value = EdgeTrace> {
    prop_oneof![Just(EdgeTrace::Bresenham), Just(EdgeTrace::FourConnected)]
}

// Deterministic bumpy ground
fn bumpy() -> ColumnScan<impl Fn(i32, i32, i32) -> bool> {
    ColumnScan::new(|x: i32, y: i32, z: i32| y < 60 + (x * 7 + z * 13).rem_euclid(9))
}

proptest! {
    #[test]
    fn every_column_sits_on_its_surface(
        pts in prop::collection::vec(arb_column(), 0..6),
        trace in arb_trace(),
    ) {
        let probe = bumpy();
        let cols = wall_columns(&pts, 0, 128, &probe, trace);
        for p in &cols {
            prop_assert_eq!(p.y, probe.highest_solid_y(p.x, p.z, 0, 128));
        }
        let cells: HashSet<Column> = cols.iter().map(|p| p.column()).collect();
        prop_assert_eq!(cells.len(), cols.len());
    }

    #[test]
    fn covers_every_edge_in_both_directions(
        pts in prop::collection::vec(arb_column(), 1..6),
        trace in arb_trace(),
    ) {
        let probe = bumpy();
        let cols = wall_columns(&pts, 0, 128, &probe, trace);
        let cells: HashSet<Column> = cols.iter().map(|p| p.column()).collect();
        let n = pts.len();
        let mut expect = HashSet::new();
        for i in 0..n {
            expect.extend(trace_edge(pts[i], pts[(i + 1) % n], trace));
        }
        prop_assert_eq!(cells, expect);
        for p in &pts {
            prop_assert!(cols.iter().any(|c| c.x == p.x && c.z == p.z));
        }
    }

    #[test]
    fn vertex_order_rotation_is_irrelevant(
        pts in prop::collection::vec(arb_column(), 1..6),
        shift in 0usize..6,
    ) {
        let probe = bumpy();
        let mut rotated = pts.clone();
        let k = shift % pts.len();
        rotated.rotate_left(k);
        let a = wall_columns(&pts, 0, 128, &probe, EdgeTrace::Bresenham);
        let b = wall_columns(&rotated, 0, 128, &probe, EdgeTrace::Bresenham);
        prop_assert_eq!(a, b);
    }
}
