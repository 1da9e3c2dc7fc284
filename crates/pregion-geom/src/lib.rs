//! Vertex and lattice types plus the horizontal point/segment distance.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, Sub};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Segment endpoints share the same (x,z); the projection has no direction.
    #[error("segment endpoints coincide in the horizontal plane")]
    DegenerateSegment,
}

/// Plain world-space coordinate, used as the lookup key for vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    pub const ZERO: Coord = Coord {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Lattice cell containing this coordinate.
    #[inline]
    pub fn block(self) -> LatticePoint {
        LatticePoint::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} | {} | {}]", self.x, self.y, self.z)
    }
}

/// A recorded boundary point. `tag` is carried for the host (e.g. the material
/// the vertex replaced) and never inspected here.
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub tag: T,
}

impl<T> Vertex<T> {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, tag: T) -> Self {
        Self { x, y, z, tag }
    }

    #[inline]
    pub fn at(c: Coord, tag: T) -> Self {
        Self::new(c.x, c.y, c.z, tag)
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn same_coord(&self, c: Coord) -> bool {
        self.x == c.x && self.y == c.y && self.z == c.z
    }

    #[inline]
    pub fn block(&self) -> LatticePoint {
        self.coord().block()
    }

    #[inline]
    pub fn distance_to<U>(&self, other: &Vertex<U>) -> f64 {
        self.coord().distance(other.coord())
    }
}

// Identity is positional; tags never participate.
impl<T, U> PartialEq<Vertex<U>> for Vertex<T> {
    fn eq(&self, other: &Vertex<U>) -> bool {
        self.same_coord(other.coord())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LatticePoint {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    #[inline]
    pub const fn column(self) -> Column {
        Column::new(self.x, self.z)
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub const fn from_array(a: [i32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl Add for LatticePoint {
    type Output = LatticePoint;
    #[inline]
    fn add(self, rhs: LatticePoint) -> LatticePoint {
        self.offset(rhs.x, rhs.y, rhs.z)
    }
}

impl Sub for LatticePoint {
    type Output = LatticePoint;
    #[inline]
    fn sub(self, rhs: LatticePoint) -> LatticePoint {
        LatticePoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Horizontal (x,z) lattice position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column {
    pub x: i32,
    pub z: i32,
}

impl Column {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub const fn with_y(self, y: i32) -> LatticePoint {
        LatticePoint::new(self.x, y, self.z)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Distance from `p` to segment `a`–`b`, projecting onto the segment in the
/// (x,z) plane.
///
/// Past either end the segment endpoint itself is the closest point. Between
/// them the closest point takes its height from `a`, so the result is not
/// symmetric in `a`/`b` when their heights differ.
pub fn distance_point_to_segment<A, B, P>(
    a: &Vertex<A>,
    b: &Vertex<B>,
    p: &Vertex<P>,
) -> Result<f64, GeomError> {
    let ex = b.x - a.x;
    let ez = b.z - a.z;
    if ex == 0.0 && ez == 0.0 {
        return Err(GeomError::DegenerateSegment);
    }

    let dot = (p.x - a.x) * ex + (p.z - a.z) * ez;
    let len_sq = ex * ex + ez * ez;
    let t = dot / len_sq;

    let closest = if t < 0.0 {
        a.coord()
    } else if t > 1.0 {
        b.coord()
    } else {
        Coord::new(a.x + t * ex, a.y, a.z + t * ez)
    };
    Ok(p.coord().distance(closest))
}
