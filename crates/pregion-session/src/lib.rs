//! Polygon editing sessions: ordered vertices with nearest-edge insertion.
#![forbid(unsafe_code)]

pub mod registry;
pub mod session;

use thiserror::Error;

pub use registry::{Applied, Command, CommandOutcome, Refresh, SessionRegistry};
pub use session::{AddOutcome, MIN_VERTICES, RemoveOutcome, Session, SessionState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no vertices have been set")]
    NoSession,
    #[error("{count}/{required} vertices set, {missing} more needed")]
    InvalidSession {
        count: usize,
        required: usize,
        missing: usize,
    },
}
