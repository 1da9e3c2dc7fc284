use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use pregion_geom::{Coord, Vertex};

use crate::SessionError;
use crate::session::{AddOutcome, MIN_VERTICES, RemoveOutcome, Session};

/// Session edit requested by the host on behalf of a subject.
#[derive(Clone, Debug)]
pub enum Command<T> {
    AddVertex(Vertex<T>),
    RemoveVertex(Coord),
    ClearAll,
}

/// What the visualization should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// Rebuild the boundary from the current vertices.
    Redraw,
    /// Remove everything shown for the subject.
    Clear,
    Keep,
}

#[derive(Clone, Debug)]
pub enum Applied<T> {
    Add(AddOutcome),
    Remove(RemoveOutcome<T>),
    /// `None` when the subject had no session.
    Clear(Option<Vec<Vertex<T>>>),
}

#[derive(Clone, Debug)]
pub struct CommandOutcome<T> {
    pub applied: Applied<T>,
    pub refresh: Refresh,
    pub vertex_count: usize,
}

/// Per-subject sessions. Owned by the host and passed to whoever edits.
#[derive(Debug)]
pub struct SessionRegistry<K, T> {
    sessions: HashMap<K, Session<T>>,
}

impl<K, T> Default for SessionRegistry<K, T> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<K, T> SessionRegistry<K, T>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[inline]
    pub fn contains(&self, subject: &K) -> bool {
        self.sessions.contains_key(subject)
    }

    #[inline]
    pub fn session(&self, subject: &K) -> Option<&Session<T>> {
        self.sessions.get(subject)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &K> + '_ {
        self.sessions.keys()
    }

    pub fn vertex_count(&self, subject: &K) -> usize {
        self.sessions.get(subject).map_or(0, Session::vertex_count)
    }

    pub fn is_valid(&self, subject: &K) -> bool {
        self.sessions.get(subject).is_some_and(Session::is_valid)
    }

    pub fn validate(&self, subject: &K) -> Result<&Session<T>, SessionError> {
        let session = self.sessions.get(subject).ok_or(SessionError::NoSession)?;
        session.validate()?;
        Ok(session)
    }

    /// Creates the subject's session on first use.
    pub fn add_vertex(&mut self, subject: &K, v: Vertex<T>) -> AddOutcome {
        let c = v.coord();
        let session = self.sessions.entry(subject.clone()).or_default();
        let out = session.add_vertex(v);
        match out {
            AddOutcome::Inserted { index } => log::info!(
                target: "session",
                "{:?}: vertex {} added at #{} ({} total)",
                subject,
                c,
                index + 1,
                session.vertex_count()
            ),
            AddOutcome::Rejected => {
                log::warn!(target: "session", "{:?}: vertex {} already set", subject, c)
            }
        }
        out
    }

    pub fn remove_vertex(&mut self, subject: &K, c: Coord) -> RemoveOutcome<T> {
        let Some(session) = self.sessions.get_mut(subject) else {
            log::warn!(target: "session", "{:?}: no vertices to remove", subject);
            return RemoveOutcome::NoVertices;
        };
        let out = session.remove_vertex(c);
        match &out {
            RemoveOutcome::Removed {
                index, released, ..
            } => {
                log::info!(
                    target: "session",
                    "{:?}: vertex {} removed from #{} ({} left)",
                    subject,
                    c,
                    index + 1,
                    session.vertex_count()
                );
                if !released.is_empty() {
                    log::info!(
                        target: "session",
                        "{:?}: fewer than {} vertices, released {}",
                        subject,
                        MIN_VERTICES,
                        released.len()
                    );
                }
            }
            RemoveOutcome::NotFound => {
                log::warn!(target: "session", "{:?}: {} is not a vertex", subject, c)
            }
            RemoveOutcome::NoVertices => {
                log::warn!(target: "session", "{:?}: no vertices to remove", subject)
            }
        }
        out
    }

    /// Empties and forgets the subject's session.
    pub fn clear_all(&mut self, subject: &K) -> Option<Vec<Vertex<T>>> {
        let mut session = self.sessions.remove(subject)?;
        let drained = session.clear_all();
        log::info!(target: "session", "{:?}: all {} vertices removed", subject, drained.len());
        Some(drained)
    }

    /// Installs `session` for `subject`, returning the one it displaced.
    pub fn replace(&mut self, subject: K, session: Session<T>) -> Option<Session<T>> {
        log::info!(
            target: "session",
            "{:?}: session replaced ({} vertices)",
            subject,
            session.vertex_count()
        );
        self.sessions.insert(subject, session)
    }

    pub fn dispatch(&mut self, subject: &K, cmd: Command<T>) -> CommandOutcome<T> {
        let (applied, refresh) = match cmd {
            Command::AddVertex(v) => {
                let out = self.add_vertex(subject, v);
                let refresh = match out {
                    AddOutcome::Inserted { .. } if self.is_valid(subject) => Refresh::Redraw,
                    _ => Refresh::Keep,
                };
                (Applied::Add(out), refresh)
            }
            Command::RemoveVertex(c) => {
                let out = self.remove_vertex(subject, c);
                let refresh = match &out {
                    RemoveOutcome::Removed { .. } if self.is_valid(subject) => Refresh::Redraw,
                    RemoveOutcome::Removed { .. } => Refresh::Clear,
                    _ => Refresh::Keep,
                };
                (Applied::Remove(out), refresh)
            }
            Command::ClearAll => {
                let out = self.clear_all(subject);
                let refresh = if out.is_some() {
                    Refresh::Clear
                } else {
                    Refresh::Keep
                };
                (Applied::Clear(out), refresh)
            }
        };
        CommandOutcome {
            applied,
            refresh,
            vertex_count: self.vertex_count(subject),
        }
    }
}
