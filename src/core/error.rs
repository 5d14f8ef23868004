//! Error types.
//!
//! Two classes:
//!
//! - [`MoveError`]: an illegal move. Always recoverable, carries the reason
//!   shown to the player.
//! - [`EngineError`]: the host broke the engine's contract (an input event
//!   with nothing bound, a snapshot that does not fit the board, an unknown
//!   variant name).

use std::borrow::Cow;

use thiserror::Error;

use super::handle::PileId;

/// A refused move, with the reason to show the player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MoveError {
    reason: Cow<'static, str>,
}

impl MoveError {
    /// Create a refusal with the given reason.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason, suitable for a toast.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Shorthand for legality checks.
pub type Legality = Result<(), MoveError>;

/// Structural failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("{0} event arrived with no bound object")]
    NoBoundObject(&'static str),

    #[error("snapshot has {found} piles, board has {expected}")]
    PileCountMismatch { expected: usize, found: usize },

    #[error("snapshot pile {pile} is a {found}, board has a {expected}")]
    PileClassMismatch {
        pile: PileId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("snapshot holds {found} cards, board has {expected}")]
    CardCountMismatch { expected: usize, found: usize },

    #[error("snapshot refers to unknown or duplicated card {0}")]
    UnknownCard(String),

    #[error("undo stack is empty")]
    EmptyUndoStack,

    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
}
