use hashbrown::{HashMap, HashSet};
use pregion_geom::{Column, LatticePoint, Vertex};
use pregion_session::{MIN_VERTICES, Session, SessionError};
use serde::Deserialize;
use thiserror::Error;

use crate::terrain::TerrainProbe;
use crate::wall::{EdgeTrace, wall_columns};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("region \"{0}\" not found")]
    NotFound(String),
    #[error("region \"{0}\" already exists")]
    AlreadyExists(String),
    #[error("region name is empty")]
    EmptyName,
    #[error("region name \"{name}\" contains invalid characters: {chars}")]
    InvalidName { name: String, chars: String },
    #[error("a polygon needs at least {required} points, got {count}")]
    TooFewPoints { count: usize, required: usize },
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Vertical span a committed region covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Extent {
    #[serde(default = "default_min_y")]
    pub min_y: i32,
    #[serde(default = "default_max_y")]
    pub max_y: i32,
}
fn default_min_y() -> i32 {
    -64
}
fn default_max_y() -> i32 {
    320
}
impl Default for Extent {
    fn default() -> Self {
        Self {
            min_y: default_min_y(),
            max_y: default_max_y(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedPolygon {
    pub name: String,
    pub points: Vec<Column>,
    pub extent: Extent,
}

impl CommittedPolygon {
    pub fn wall_columns<P>(&self, probe: &P, trace: EdgeTrace) -> HashSet<LatticePoint>
    where
        P: TerrainProbe + ?Sized,
    {
        wall_columns(
            &self.points,
            self.extent.min_y,
            self.extent.max_y,
            probe,
            trace,
        )
    }
}

/// Named polygon persistence owned by the host.
pub trait RegionStore {
    fn polygon(&self, name: &str) -> Result<&CommittedPolygon, RegionError>;

    fn create_polygon(
        &mut self,
        name: &str,
        points: Vec<Column>,
        extent: Extent,
    ) -> Result<(), RegionError>;
}

/// Region names are ASCII letters and digits only.
pub fn validate_name(name: &str) -> Result<(), RegionError> {
    if name.is_empty() {
        return Err(RegionError::EmptyName);
    }
    let bad: Vec<String> = name
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric())
        .map(String::from)
        .collect();
    if bad.is_empty() {
        Ok(())
    } else {
        Err(RegionError::InvalidName {
            name: name.to_string(),
            chars: bad.join(" "),
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryRegionStore {
    regions: HashMap<String, CommittedPolygon>,
}

impl MemoryRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.keys().map(String::as_str)
    }
}

impl RegionStore for MemoryRegionStore {
    fn polygon(&self, name: &str) -> Result<&CommittedPolygon, RegionError> {
        self.regions
            .get(name)
            .ok_or_else(|| RegionError::NotFound(name.to_string()))
    }

    fn create_polygon(
        &mut self,
        name: &str,
        points: Vec<Column>,
        extent: Extent,
    ) -> Result<(), RegionError> {
        validate_name(name)?;
        if points.len() < MIN_VERTICES {
            return Err(RegionError::TooFewPoints {
                count: points.len(),
                required: MIN_VERTICES,
            });
        }
        if self.regions.contains_key(name) {
            return Err(RegionError::AlreadyExists(name.to_string()));
        }
        self.regions.insert(
            name.to_string(),
            CommittedPolygon {
                name: name.to_string(),
                points,
                extent,
            },
        );
        Ok(())
    }
}

/// Commits a valid session as the named polygon, projecting each vertex onto
/// the column it sits in.
pub fn commit_session<T, S>(
    session: &Session<T>,
    name: &str,
    extent: Extent,
    store: &mut S,
) -> Result<(), RegionError>
where
    S: RegionStore + ?Sized,
{
    session.validate()?;
    let points: Vec<Column> = session.vertices().iter().map(|v| v.block().column()).collect();
    let count = points.len();
    store.create_polygon(name, points, extent)?;
    log::info!(
        target: "boundary",
        "region \"{}\" committed: {} points, y {}..={}",
        name,
        count,
        extent.min_y,
        extent.max_y
    );
    Ok(())
}

/// Rebuilds an editable session from a committed polygon. Each vertex is
/// centred on the topmost solid block of its column; `tag_at` supplies the
/// tag for that block.
pub fn load_session<T, P, F>(polygon: &CommittedPolygon, probe: &P, mut tag_at: F) -> Session<T>
where
    P: TerrainProbe + ?Sized,
    F: FnMut(i32, i32, i32) -> T,
{
    let Extent { min_y, max_y } = polygon.extent;
    let vertices = polygon.points.iter().map(|c| {
        let top = (probe.highest_solid_y(c.x, c.z, min_y, max_y) - 1).max(min_y);
        Vertex::new(
            f64::from(c.x) + 0.5,
            f64::from(top) + 0.5,
            f64::from(c.z) + 0.5,
            tag_at(c.x, top, c.z),
        )
    });
    let session = Session::from_vertices(vertices);
    log::info!(
        target: "boundary",
        "region \"{}\" loaded: {} vertices",
        polygon.name,
        session.vertex_count()
    );
    session
}
