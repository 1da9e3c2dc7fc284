//! Marker frames for an editing session and the renderer sync hook.
#![forbid(unsafe_code)]

mod frame;
mod renderer;

pub use frame::{Label, Stripe, SupportPiece, VisualFrame};
pub use renderer::{BoundaryRenderer, LogRenderer, sync};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct VizConfig {
    /// Height of the connector lines above the vertex cells.
    #[serde(default = "default_lift")]
    pub lift: i32,
}
fn default_lift() -> i32 {
    5
}
impl Default for VizConfig {
    fn default() -> Self {
        Self {
            lift: default_lift(),
        }
    }
}
