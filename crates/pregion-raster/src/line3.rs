use core::iter::FusedIterator;

use pregion_geom::LatticePoint;

/// Lattice points from `p1` (exclusive) to `p2` (inclusive), one per unit
/// step along the dominant axis.
///
/// Dominance ties resolve x, then y, then z. Axes with no travel carry a step
/// of -1 but never advance.
#[inline]
pub fn rasterize_line(p1: LatticePoint, p2: LatticePoint) -> Line3 {
    Line3::new(p1, p2)
}

/// 3D Bresenham walk. Cheap to clone; cloning restarts nothing, it forks the
/// remaining sequence.
#[derive(Clone, Debug)]
pub struct Line3 {
    cur: [i32; 3],
    end: i32,
    step: [i32; 3],
    delta: [i64; 3],
    dom: usize,
    sec: [usize; 2],
    err: [i64; 2],
}

impl Line3 {
    pub fn new(p1: LatticePoint, p2: LatticePoint) -> Self {
        let a = p1.to_array();
        let b = p2.to_array();
        let mut step = [0i32; 3];
        let mut delta = [0i64; 3];
        for i in 0..3 {
            delta[i] = (i64::from(b[i]) - i64::from(a[i])).abs();
            step[i] = if a[i] < b[i] { 1 } else { -1 };
        }
        let [dx, dy, dz] = delta;
        let (dom, sec) = if dx >= dy && dx >= dz {
            (0, [1, 2])
        } else if dy >= dx && dy >= dz {
            (1, [0, 2])
        } else {
            (2, [1, 0])
        };
        let err = [
            2 * delta[sec[0]] - delta[dom],
            2 * delta[sec[1]] - delta[dom],
        ];
        Self {
            cur: a,
            end: b[dom],
            step,
            delta,
            dom,
            sec,
            err,
        }
    }

    /// Index of the driving axis (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn dominant_axis(&self) -> usize {
        self.dom
    }

    #[inline]
    fn remaining(&self) -> usize {
        (i64::from(self.end) - i64::from(self.cur[self.dom])).unsigned_abs() as usize
    }
}

impl Iterator for Line3 {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<LatticePoint> {
        if self.cur[self.dom] == self.end {
            return None;
        }
        let d = self.dom;
        self.cur[d] += self.step[d];
        for k in 0..2 {
            let s = self.sec[k];
            if self.err[k] >= 0 {
                self.cur[s] += self.step[s];
                self.err[k] -= 2 * self.delta[d];
            }
            self.err[k] += 2 * self.delta[s];
        }
        Some(LatticePoint::from_array(self.cur))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line3 {}
impl FusedIterator for Line3 {}
