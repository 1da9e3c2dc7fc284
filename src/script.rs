use std::error::Error;
use std::fs;
use std::path::Path;

use pregion_boundary::{
    MemoryRegionStore, NoiseTerrain, RegionError, RegionStore, commit_session, load_session,
};
use pregion_geom::{Coord, LatticePoint, Vertex};
use pregion_session::{Applied, Command, Refresh, RemoveOutcome, SessionRegistry};
use pregion_viz::{BoundaryRenderer, sync};
use serde::Deserialize;

use crate::config::PregionConfig;

/// One scripted action. Vertex tags record the cell the marker replaced.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Add([f64; 3]),
    Remove([f64; 3]),
    Clear,
    Commit(String),
    Load(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}
fn default_subject() -> String {
    "player".to_string()
}

pub fn load_script(path: &Path) -> Result<Script, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let script: Script = toml::from_str(&s)?;
    Ok(script)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub committed: Vec<String>,
    pub failed: usize,
    pub restored_tags: usize,
}

/// Drives one subject's session through `script`, keeping `renderer` in step.
/// Failed commits and loads are logged and counted; the replay continues.
pub fn replay<R>(
    cfg: &PregionConfig,
    script: &Script,
    store: &mut MemoryRegionStore,
    renderer: &mut R,
) -> ReplaySummary
where
    R: BoundaryRenderer + ?Sized,
{
    let terrain = NoiseTerrain::new(&cfg.terrain);
    let mut registry: SessionRegistry<String, LatticePoint> = SessionRegistry::new();
    let subject = &script.subject;
    let mut summary = ReplaySummary::default();

    for step in &script.steps {
        let cmd = match step {
            Step::Add([x, y, z]) => {
                let c = Coord::new(*x, *y, *z);
                Command::AddVertex(Vertex::at(c, c.block()))
            }
            Step::Remove([x, y, z]) => Command::RemoveVertex(Coord::new(*x, *y, *z)),
            Step::Clear => Command::ClearAll,
            Step::Commit(name) => {
                let res = registry
                    .validate(subject)
                    .map_err(RegionError::from)
                    .and_then(|s| commit_session(s, name, cfg.region, store));
                match res {
                    Ok(()) => summary.committed.push(name.clone()),
                    Err(e) => {
                        log::warn!("commit \"{}\" failed: {}", name, e);
                        summary.failed += 1;
                    }
                }
                continue;
            }
            Step::Load(name) => {
                match store.polygon(name) {
                    Ok(polygon) => {
                        let session =
                            load_session(polygon, &terrain, |x, y, z| LatticePoint::new(x, y, z));
                        if let Some(old) = registry.replace(subject.clone(), session) {
                            summary.restored_tags += old.vertex_count();
                        }
                        sync(
                            registry.session(subject),
                            Refresh::Redraw,
                            &cfg.viz,
                            renderer,
                        );
                    }
                    Err(e) => {
                        log::warn!("load failed: {}", e);
                        summary.failed += 1;
                    }
                }
                continue;
            }
        };

        let out = registry.dispatch(subject, cmd);
        summary.applied += 1;
        match &out.applied {
            Applied::Remove(RemoveOutcome::Removed { released, .. }) => {
                // Removed vertex plus anything dropped with it
                summary.restored_tags += 1 + released.len();
            }
            Applied::Clear(Some(vs)) => summary.restored_tags += vs.len(),
            _ => {}
        }
        sync(registry.session(subject), out.refresh, &cfg.viz, renderer);
    }

    log::info!(
        "replay done: {} commands, {} committed, {} failed",
        summary.applied,
        summary.committed.len(),
        summary.failed
    );
    summary
}
