//! Committed polygons and ground-following wall placement.
#![forbid(unsafe_code)]

pub mod region;
pub mod terrain;
pub mod wall;

pub use region::{
    CommittedPolygon, Extent, MemoryRegionStore, RegionError, RegionStore, commit_session,
    load_session, validate_name,
};
pub use terrain::{ColumnScan, FlatTerrain, NoiseTerrain, TerrainConfig, TerrainProbe};
pub use wall::{EdgeCells, EdgeTrace, sorted_columns, trace_edge, wall_columns};
