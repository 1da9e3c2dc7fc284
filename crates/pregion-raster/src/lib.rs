//! Integer digital lines over the block lattice.
#![forbid(unsafe_code)]

pub mod line2;
pub mod line3;

pub use line2::{Line2, Walk2, line2, walk2};
pub use line3::{Line3, rasterize_line};
