use core::iter::FusedIterator;

use pregion_geom::Column;

/// Horizontal Bresenham line from `a` to `b`, both endpoints included.
/// The dominant axis is the larger delta, x on ties.
#[inline]
pub fn line2(a: Column, b: Column) -> Line2 {
    Line2::new(a, b)
}

/// Face-connected walk from `a` to `b`, both endpoints included. Never moves
/// diagonally, so consecutive columns always share an edge.
#[inline]
pub fn walk2(a: Column, b: Column) -> Walk2 {
    Walk2::new(a, b)
}

#[derive(Clone, Debug)]
pub struct Line2 {
    cur: [i32; 2],
    end: i32,
    step: [i32; 2],
    delta: [i64; 2],
    dom: usize,
    err: i64,
    started: bool,
}

impl Line2 {
    pub fn new(a: Column, b: Column) -> Self {
        let pa = [a.x, a.z];
        let pb = [b.x, b.z];
        let delta = [
            (i64::from(pb[0]) - i64::from(pa[0])).abs(),
            (i64::from(pb[1]) - i64::from(pa[1])).abs(),
        ];
        let step = [
            if pa[0] < pb[0] { 1 } else { -1 },
            if pa[1] < pb[1] { 1 } else { -1 },
        ];
        let dom = if delta[0] >= delta[1] { 0 } else { 1 };
        let sec = 1 - dom;
        Self {
            cur: pa,
            end: pb[dom],
            step,
            delta,
            dom,
            err: 2 * delta[sec] - delta[dom],
            started: false,
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        let steps = (i64::from(self.end) - i64::from(self.cur[self.dom])).unsigned_abs() as usize;
        if self.started { steps } else { steps + 1 }
    }
}

impl Iterator for Line2 {
    type Item = Column;

    fn next(&mut self) -> Option<Column> {
        if !self.started {
            self.started = true;
            return Some(Column::new(self.cur[0], self.cur[1]));
        }
        if self.cur[self.dom] == self.end {
            return None;
        }
        let d = self.dom;
        let s = 1 - d;
        self.cur[d] += self.step[d];
        if self.err >= 0 {
            self.cur[s] += self.step[s];
            self.err -= 2 * self.delta[d];
        }
        self.err += 2 * self.delta[s];
        Some(Column::new(self.cur[0], self.cur[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line2 {}
impl FusedIterator for Line2 {}

#[derive(Clone, Debug)]
pub struct Walk2 {
    cur: Column,
    remaining: u64,
    dir_x: i32,
    dir_z: i32,
    err: i64,
    dx2: i64,
    dz2: i64,
}

impl Walk2 {
    pub fn new(a: Column, b: Column) -> Self {
        let dx = (i64::from(b.x) - i64::from(a.x)).abs();
        let dz = (i64::from(b.z) - i64::from(a.z)).abs();
        Self {
            cur: a,
            remaining: (1 + dx + dz) as u64,
            dir_x: if b.x > a.x { 1 } else { -1 },
            dir_z: if b.z > a.z { 1 } else { -1 },
            err: dx - dz,
            dx2: dx * 2,
            dz2: dz * 2,
        }
    }
}

impl Iterator for Walk2 {
    type Item = Column;

    fn next(&mut self) -> Option<Column> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let out = self.cur;
        if self.remaining > 0 {
            if self.err > 0 {
                self.cur.x += self.dir_x;
                self.err -= self.dz2;
            } else {
                self.cur.z += self.dir_z;
                self.err += self.dx2;
            }
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Walk2 {}
impl FusedIterator for Walk2 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, z: i32) -> Column {
        Column::new(x, z)
    }

    #[test]
    fn line_includes_both_ends() {
        let pts: Vec<_> = line2(c(0, 0), c(3, 0)).collect();
        assert_eq!(pts, vec![c(0, 0), c(1, 0), c(2, 0), c(3, 0)]);
    }

    #[test]
    fn line_single_point() {
        let pts: Vec<_> = line2(c(-4, 9), c(-4, 9)).collect();
        assert_eq!(pts, vec![c(-4, 9)]);
    }

    #[test]
    fn line_diagonal_tie_goes_x() {
        let line = line2(c(0, 0), c(-2, 2));
        assert_eq!(line.len(), 3);
        let pts: Vec<_> = line.collect();
        assert_eq!(pts, vec![c(0, 0), c(-1, 1), c(-2, 2)]);
    }

    #[test]
    fn line_z_dominant() {
        let pts: Vec<_> = line2(c(0, 0), c(1, 4)).collect();
        assert_eq!(pts, vec![c(0, 0), c(0, 1), c(1, 2), c(1, 3), c(1, 4)]);
    }

    #[test]
    fn walk_never_moves_diagonally() {
        let pts: Vec<_> = walk2(c(0, 0), c(3, 2)).collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts.first(), Some(&c(0, 0)));
        assert_eq!(pts.last(), Some(&c(3, 2)));
        for w in pts.windows(2) {
            let step = (w[1].x - w[0].x).abs() + (w[1].z - w[0].z).abs();
            assert_eq!(step, 1);
        }
    }

    #[test]
    fn walk_single_point() {
        let pts: Vec<_> = walk2(c(5, 5), c(5, 5)).collect();
        assert_eq!(pts, vec![c(5, 5)]);
    }
}
