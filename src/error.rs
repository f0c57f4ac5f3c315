use std::fmt;

use crate::{BodyId, Num};

/// What was missing when an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// No central body has been placed yet
    NoSystem,
    /// A central body already exists
    SystemExists,
    /// No placement anchor has been detected
    NoPlacementAnchor,
    /// The renderer cannot report a camera position
    NoCamera,
    /// The operation acts on the selection, but nothing is selected
    NoSelection,
    UnknownBody(BodyId),
    /// Distance edits only apply to orbiting bodies
    NotOrbiting(BodyId),
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::NoSystem => write!(f, "no central body has been placed"),
            Precondition::SystemExists => write!(f, "a central body already exists"),
            Precondition::NoPlacementAnchor => write!(f, "no placement anchor"),
            Precondition::NoCamera => write!(f, "camera position unavailable"),
            Precondition::NoSelection => write!(f, "nothing is selected"),
            Precondition::UnknownBody(id) => write!(f, "no body with id {id}"),
            Precondition::NotOrbiting(id) => write!(f, "body {id} does not orbit anything"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("precondition not met: {0}")]
    PreconditionNotMet(Precondition),
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: Num },
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Precondition> for Error {
    fn from(precondition: Precondition) -> Self {
        Error::PreconditionNotMet(precondition)
    }
}

/// Rejects non-finite and non-positive values.
pub(crate) fn positive(name: &'static str, value: Num) -> Result<Num> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}
