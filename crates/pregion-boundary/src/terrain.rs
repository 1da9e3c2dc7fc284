use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

/// Surface query against the host world.
pub trait TerrainProbe {
    /// One above the topmost solid cell of column (x,z) within
    /// `min_y..=max_y`, or `min_y` when the column is empty there.
    fn highest_solid_y(&self, x: i32, z: i32, min_y: i32, max_y: i32) -> i32;
}

impl<P: TerrainProbe + ?Sized> TerrainProbe for &P {
    #[inline]
    fn highest_solid_y(&self, x: i32, z: i32, min_y: i32, max_y: i32) -> i32 {
        (**self).highest_solid_y(x, z, min_y, max_y)
    }
}

// Shared by every probe that knows its ground height directly.
#[inline]
fn clamp_surface(surface_y: i32, min_y: i32, max_y: i32) -> i32 {
    let top = surface_y - 1;
    if top < min_y { min_y } else { top.min(max_y) + 1 }
}

/// Scans a column top-down with a solidity callback.
pub struct ColumnScan<F> {
    is_solid: F,
}

impl<F> ColumnScan<F>
where
    F: Fn(i32, i32, i32) -> bool,
{
    pub fn new(is_solid: F) -> Self {
        Self { is_solid }
    }
}

impl<F> TerrainProbe for ColumnScan<F>
where
    F: Fn(i32, i32, i32) -> bool,
{
    fn highest_solid_y(&self, x: i32, z: i32, min_y: i32, max_y: i32) -> i32 {
        for y in (min_y..=max_y).rev() {
            if (self.is_solid)(x, y, z) {
                return y + 1;
            }
        }
        min_y
    }
}

/// Everything below `surface_y` is solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatTerrain {
    pub surface_y: i32,
}

impl FlatTerrain {
    pub const fn new(surface_y: i32) -> Self {
        Self { surface_y }
    }
}

impl TerrainProbe for FlatTerrain {
    #[inline]
    fn highest_solid_y(&self, _x: i32, _z: i32, min_y: i32, max_y: i32) -> i32 {
        clamp_surface(self.surface_y, min_y, max_y)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_base_y")]
    pub base_y: i32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
}
fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.02
}
fn default_base_y() -> i32 {
    64
}
fn default_amplitude() -> f32 {
    12.0
}
impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frequency: default_frequency(),
            base_y: default_base_y(),
            amplitude: default_amplitude(),
        }
    }
}

/// Rolling heightmap for running without a host world.
pub struct NoiseTerrain {
    noise: FastNoiseLite,
    base_y: i32,
    amplitude: f32,
}

impl NoiseTerrain {
    pub fn new(cfg: &TerrainConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(cfg.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(cfg.frequency));
        Self {
            noise,
            base_y: cfg.base_y,
            amplitude: cfg.amplitude,
        }
    }

    /// First non-solid y of column (x,z).
    pub fn surface_y(&self, x: i32, z: i32) -> i32 {
        let n = self.noise.get_noise_2d(x as f32, z as f32);
        self.base_y + (n * self.amplitude).round() as i32
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        y < self.surface_y(x, z)
    }
}

impl TerrainProbe for NoiseTerrain {
    #[inline]
    fn highest_solid_y(&self, x: i32, z: i32, min_y: i32, max_y: i32) -> i32 {
        clamp_surface(self.surface_y(x, z), min_y, max_y)
    }
}
