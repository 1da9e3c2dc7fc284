use pregion_session::{Refresh, Session};

use crate::{VisualFrame, VizConfig};

/// Host-side display of a session's markers.
pub trait BoundaryRenderer {
    /// Removes everything previously drawn for this session.
    fn clear(&mut self);
    fn draw(&mut self, frame: &VisualFrame);
}

impl<R: BoundaryRenderer + ?Sized> BoundaryRenderer for &mut R {
    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }
    #[inline]
    fn draw(&mut self, frame: &VisualFrame) {
        (**self).draw(frame)
    }
}

/// Applies `refresh` to `renderer`. A redraw always clears first, so markers
/// from a previous frame never linger.
pub fn sync<T, R>(session: Option<&Session<T>>, refresh: Refresh, cfg: &VizConfig, renderer: &mut R)
where
    R: BoundaryRenderer + ?Sized,
{
    match refresh {
        Refresh::Keep => {}
        Refresh::Clear => renderer.clear(),
        Refresh::Redraw => {
            renderer.clear();
            if let Some(s) = session.filter(|s| s.is_valid()) {
                renderer.draw(&VisualFrame::build(s, cfg));
            }
        }
    }
}

/// Renderer that reports frames through the `viz` log target.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames_drawn: usize,
    pub clears: usize,
    pub last: Option<VisualFrame>,
}

impl BoundaryRenderer for LogRenderer {
    fn clear(&mut self) {
        self.clears += 1;
        self.last = None;
        log::debug!(target: "viz", "markers cleared");
    }

    fn draw(&mut self, frame: &VisualFrame) {
        self.frames_drawn += 1;
        log::info!(
            target: "viz",
            "draw: {} vertices, {} connector cells, {} support pieces",
            frame.labels.len(),
            frame.connectors.len(),
            frame.supports.len()
        );
        for label in &frame.labels {
            log::debug!(target: "viz", "label {} at {}", label.number, label.pos);
        }
        self.last = Some(frame.clone());
    }
}
