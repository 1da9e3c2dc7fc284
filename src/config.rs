use std::error::Error;
use std::fs;
use std::path::Path;

use pregion_boundary::{
    EdgeTrace, Extent, MemoryRegionStore, RegionError, RegionStore, TerrainConfig,
};
use pregion_geom::Column;
use pregion_viz::VizConfig;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct WallConfig {
    #[serde(default)]
    pub trace: EdgeTrace,
}

/// Named polygon given directly in the config file.
#[derive(Clone, Debug, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    /// `[x, z]` pairs in boundary order.
    pub points: Vec<[i32; 2]>,
    #[serde(default)]
    pub min_y: Option<i32>,
    #[serde(default)]
    pub max_y: Option<i32>,
}

impl RegionEntry {
    fn extent(&self, fallback: Extent) -> Extent {
        Extent {
            min_y: self.min_y.unwrap_or(fallback.min_y),
            max_y: self.max_y.unwrap_or(fallback.max_y),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PregionConfig {
    #[serde(default)]
    pub region: Extent,
    #[serde(default)]
    pub wall: WallConfig,
    #[serde(default)]
    pub viz: VizConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
}

impl PregionConfig {
    /// Store pre-populated with every `[[regions]]` entry.
    pub fn build_store(&self) -> Result<MemoryRegionStore, RegionError> {
        let mut store = MemoryRegionStore::new();
        for entry in &self.regions {
            let points = entry
                .points
                .iter()
                .map(|&[x, z]| Column::new(x, z))
                .collect();
            store.create_polygon(&entry.name, points, entry.extent(self.region))?;
        }
        Ok(store)
    }
}

pub fn load_config(path: &Path) -> Result<PregionConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: PregionConfig = toml::from_str(&s)?;
    log::info!(
        "loaded {} ({} regions, trace {:?})",
        path.display(),
        cfg.regions.len(),
        cfg.wall.trace
    );
    Ok(cfg)
}
