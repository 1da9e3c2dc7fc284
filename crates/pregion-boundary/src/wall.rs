use hashbrown::HashSet;
use pregion_geom::{Column, LatticePoint};
use pregion_raster::{Line2, Walk2, line2, walk2};
use serde::Deserialize;

use crate::terrain::TerrainProbe;

/// How a boundary edge is turned into columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeTrace {
    /// Minimal 8-connected line.
    #[default]
    Bresenham,
    /// Edge-adjacent steps only; diagonal edges leave no corner gaps.
    FourConnected,
}

#[derive(Clone, Debug)]
pub enum EdgeCells {
    Line(Line2),
    Walk(Walk2),
}

impl Iterator for EdgeCells {
    type Item = Column;

    #[inline]
    fn next(&mut self) -> Option<Column> {
        match self {
            EdgeCells::Line(it) => it.next(),
            EdgeCells::Walk(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            EdgeCells::Line(it) => it.size_hint(),
            EdgeCells::Walk(it) => it.size_hint(),
        }
    }
}

/// Columns covered by the edge `a`–`b`, both ends included.
pub fn trace_edge(a: Column, b: Column, trace: EdgeTrace) -> EdgeCells {
    match trace {
        EdgeTrace::Bresenham => EdgeCells::Line(line2(a, b)),
        EdgeTrace::FourConnected => EdgeCells::Walk(walk2(a, b)),
    }
}

/// Ground-following wall positions around the closed polygon `points`.
///
/// Every column on every edge (closing edge included) is probed once per
/// visit, in edge order. Shared corners collapse in the set.
pub fn wall_columns<P>(
    points: &[Column],
    min_y: i32,
    max_y: i32,
    probe: &P,
    trace: EdgeTrace,
) -> HashSet<LatticePoint>
where
    P: TerrainProbe + ?Sized,
{
    let n = points.len();
    let mut out = HashSet::new();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        for c in trace_edge(a, b, trace) {
            let y = probe.highest_solid_y(c.x, c.z, min_y, max_y);
            log::trace!(target: "boundary", "column {} -> y={}", c, y);
            out.insert(c.with_y(y));
        }
    }
    log::debug!(
        target: "boundary",
        "{} wall columns from {} edges ({:?})",
        out.len(),
        n,
        trace
    );
    out
}

/// Stable ordering for output and comparison: by x, then z, then y.
pub fn sorted_columns(set: &HashSet<LatticePoint>) -> Vec<LatticePoint> {
    let mut v: Vec<LatticePoint> = set.iter().copied().collect();
    v.sort_by_key(|p| (p.x, p.z, p.y));
    v
}
