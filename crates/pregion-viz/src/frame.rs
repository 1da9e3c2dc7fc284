use pregion_geom::{Coord, LatticePoint};
use pregion_raster::rasterize_line;
use pregion_session::Session;

use crate::VizConfig;

/// Pieces stacked per unit of support height.
const PIECES_PER_UNIT: i32 = 3;
const PIECE_BASE: f64 = 0.125;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stripe {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupportPiece {
    pub pos: Coord,
    pub stripe: Stripe,
}

/// 1-based vertex number floating above a support.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub number: usize,
    pub pos: Coord,
}

/// Everything a renderer needs to show one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualFrame {
    pub connectors: Vec<LatticePoint>,
    pub labels: Vec<Label>,
    pub supports: Vec<SupportPiece>,
}

impl VisualFrame {
    pub fn build<T>(session: &Session<T>, cfg: &VizConfig) -> Self {
        let lift = cfg.lift;
        let mut frame = VisualFrame::default();

        for (a, b) in session.edges() {
            let from = a.block().offset(0, lift, 0);
            let to = b.block().offset(0, lift, 0);
            frame.connectors.extend(rasterize_line(from, to));
        }

        for (i, v) in session.vertices().iter().enumerate() {
            let c = v.coord();
            frame.labels.push(Label {
                number: i + 1,
                pos: Coord::new(c.x, c.y + f64::from(lift) + 1.0, c.z),
            });
            push_support(&mut frame.supports, c, v.block().y, lift);
        }

        log::debug!(
            target: "viz",
            "frame: {} connectors, {} labels, {} support pieces",
            frame.connectors.len(),
            frame.labels.len(),
            frame.supports.len()
        );
        frame
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty() && self.labels.is_empty() && self.supports.is_empty()
    }
}

// Striped pole from the cell above the vertex up to the connector height.
// The middle piece of the top unit would clip into the connector.
fn push_support(out: &mut Vec<SupportPiece>, at: Coord, base_y: i32, lift: i32) {
    for unit in 1..=lift {
        let y = f64::from(base_y + unit) + PIECE_BASE;
        for i in 0..PIECES_PER_UNIT {
            if unit == lift && i == 1 {
                continue;
            }
            let stripe = if i % 2 == 0 { Stripe::Light } else { Stripe::Dark };
            out.push(SupportPiece {
                pos: Coord::new(at.x, y + f64::from(i) / f64::from(PIECES_PER_UNIT), at.z),
                stripe,
            });
        }
    }
}
