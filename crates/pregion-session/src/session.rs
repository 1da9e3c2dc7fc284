use pregion_geom::{Coord, GeomError, Vertex, distance_point_to_segment};

use crate::SessionError;

/// Fewest vertices that still describe an area.
pub const MIN_VERTICES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    /// One or two vertices: not yet a polygon.
    Open,
    Valid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted { index: usize },
    /// A vertex with the same coordinates is already recorded.
    Rejected,
}

#[derive(Clone, Debug)]
pub enum RemoveOutcome<T> {
    Removed {
        index: usize,
        vertex: Vertex<T>,
        /// Vertices dropped because fewer than [`MIN_VERTICES`] remained.
        released: Vec<Vertex<T>>,
    },
    NotFound,
    /// Nothing was recorded to remove from.
    NoVertices,
}

impl<T> RemoveOutcome<T> {
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }
}

/// Ordered vertex list for one editing subject. Order is the polygon winding.
#[derive(Clone, Debug)]
pub struct Session<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<T> Session<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session in the given order. Later coordinate duplicates are
    /// dropped.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex<T>>) -> Self {
        let mut out: Vec<Vertex<T>> = Vec::new();
        for v in vertices {
            if !out.iter().any(|w| *w == v) {
                out.push(v);
            }
        }
        Self { vertices: out }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_VERTICES
    }

    pub fn state(&self) -> SessionState {
        match self.vertices.len() {
            0 => SessionState::Empty,
            n if n < MIN_VERTICES => SessionState::Open,
            _ => SessionState::Valid,
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let count = self.vertices.len();
        if count == 0 {
            return Err(SessionError::NoSession);
        }
        if count < MIN_VERTICES {
            return Err(SessionError::InvalidSession {
                count,
                required: MIN_VERTICES,
                missing: MIN_VERTICES - count,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn position(&self, c: Coord) -> Option<usize> {
        self.vertices.iter().position(|v| v.same_coord(c))
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.position(c).is_some()
    }

    /// Adjacent pairs in winding order, ending with the closing pair
    /// (last, first). A single vertex pairs with itself.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex<T>, &Vertex<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Where `v` would be inserted: right after the start of the nearest edge.
    ///
    /// Edges with no horizontal extent are skipped. Appends when no edge
    /// qualifies. The first of several equally near edges wins.
    pub fn insert_index<U>(&self, v: &Vertex<U>) -> usize {
        if self.vertices.is_empty() {
            return 0;
        }
        let mut best = f64::MAX;
        let mut index = self.vertices.len();
        for (i, (a, b)) in self.edges().enumerate() {
            match distance_point_to_segment(a, b, v) {
                Ok(d) if d < best => {
                    best = d;
                    index = i + 1;
                }
                Ok(_) => {}
                Err(GeomError::DegenerateSegment) => {
                    log::trace!(target: "session", "skip degenerate edge {} -> {}", a.coord(), b.coord());
                }
            }
        }
        index
    }

    pub fn add_vertex(&mut self, v: Vertex<T>) -> AddOutcome {
        if self.contains(v.coord()) {
            return AddOutcome::Rejected;
        }
        let index = self.insert_index(&v);
        self.vertices.insert(index, v);
        AddOutcome::Inserted { index }
    }

    /// Removes the vertex at `c` (tag ignored). Dropping below
    /// [`MIN_VERTICES`] empties the session.
    pub fn remove_vertex(&mut self, c: Coord) -> RemoveOutcome<T> {
        if self.vertices.is_empty() {
            return RemoveOutcome::NoVertices;
        }
        let Some(index) = self.position(c) else {
            return RemoveOutcome::NotFound;
        };
        let vertex = self.vertices.remove(index);
        let released = if self.vertices.len() < MIN_VERTICES {
            self.clear_all()
        } else {
            Vec::new()
        };
        RemoveOutcome::Removed {
            index,
            vertex,
            released,
        }
    }

    /// Empties the session, handing back what was recorded.
    pub fn clear_all(&mut self) -> Vec<Vertex<T>> {
        std::mem::take(&mut self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vertex<u16> {
        Vertex::new(x, y, z, 0)
    }

    fn triangle() -> Session<u16> {
        Session::from_vertices([v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0), v(5.0, 0.0, 10.0)])
    }

    #[test]
    fn first_vertex_goes_to_zero() {
        let mut s = Session::new();
        assert_eq!(s.add_vertex(v(3.5, 64.5, 3.5)), AddOutcome::Inserted { index: 0 });
        assert_eq!(s.state(), SessionState::Open);
    }

    #[test]
    fn second_vertex_appends() {
        let mut s = Session::new();
        s.add_vertex(v(0.0, 0.0, 0.0));
        assert_eq!(s.add_vertex(v(4.0, 0.0, 0.0)), AddOutcome::Inserted { index: 1 });
    }

    #[test]
    fn duplicate_rejected_regardless_of_tag() {
        let mut s = triangle();
        let dup = Vertex::new(10.0, 0.0, 0.0, 99);
        assert_eq!(s.add_vertex(dup), AddOutcome::Rejected);
        assert_eq!(s.vertex_count(), 3);
    }

    #[test]
    fn inserts_into_nearest_edge() {
        let mut s = triangle();
        assert_eq!(s.add_vertex(v(5.0, 0.0, -1.0)), AddOutcome::Inserted { index: 1 });
        let xs: Vec<f64> = s.vertices().iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 5.0, 10.0, 5.0]);
    }

    #[test]
    fn closing_edge_is_considered() {
        let mut s = triangle();
        // Just outside the edge from (5,10) back to (0,0)
        assert_eq!(s.add_vertex(v(1.0, 0.0, 4.0)), AddOutcome::Inserted { index: 3 });
    }

    #[test]
    fn stacked_vertices_do_not_fault() {
        let mut s = Session::new();
        s.add_vertex(v(2.0, 60.0, 2.0));
        s.add_vertex(v(2.0, 70.0, 2.0));
        assert_eq!(s.add_vertex(v(8.0, 60.0, 2.0)), AddOutcome::Inserted { index: 2 });
    }

    #[test]
    fn remove_below_three_clears() {
        let mut s = triangle();
        match s.remove_vertex(Coord::new(10.0, 0.0, 0.0)) {
            RemoveOutcome::Removed {
                index,
                vertex,
                released,
            } => {
                assert_eq!(index, 1);
                assert_eq!(vertex.x, 10.0);
                assert_eq!(released.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.vertex_count(), 0);
        assert!(!s.is_valid());
        assert_eq!(s.state(), SessionState::Empty);
    }

    #[test]
    fn remove_keeps_valid_polygon() {
        let mut s = triangle();
        s.add_vertex(v(5.0, 0.0, -1.0));
        let out = s.remove_vertex(Coord::new(5.0, 0.0, -1.0));
        assert!(out.is_removed());
        assert_eq!(s.vertex_count(), 3);
        assert!(s.is_valid());
    }

    #[test]
    fn remove_missing_and_empty() {
        let mut s = triangle();
        assert!(matches!(
            s.remove_vertex(Coord::new(1.0, 1.0, 1.0)),
            RemoveOutcome::NotFound
        ));
        let mut empty: Session<u16> = Session::new();
        assert!(matches!(
            empty.remove_vertex(Coord::ZERO),
            RemoveOutcome::NoVertices
        ));
    }

    #[test]
    fn validate_reports_missing() {
        let mut s = Session::new();
        assert_eq!(s.validate(), Err(SessionError::NoSession));
        s.add_vertex(v(0.0, 0.0, 0.0));
        assert_eq!(
            s.validate(),
            Err(SessionError::InvalidSession {
                count: 1,
                required: 3,
                missing: 2
            })
        );
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn clear_all_returns_vertices_in_order() {
        let mut s = triangle();
        let drained = s.clear_all();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[2].z, 10.0);
        assert!(s.is_empty());
    }

    #[test]
    fn edges_wrap_around() {
        let s = triangle();
        let pairs: Vec<(f64, f64)> = s.edges().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(pairs, vec![(0.0, 10.0), (10.0, 5.0), (5.0, 0.0)]);
    }
}
