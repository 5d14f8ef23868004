//! # rust-solitaire
//!
//! A patience (solitaire) game engine: piles, rules and an undoable board,
//! with no drawing, audio or storage of its own.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Board**: The board knows pile kinds, not games.
//!    Each game is a [`Variant`] script that lays out piles, deals and
//!    judges moves.
//!
//! 2. **Handles, Not References**: Cards and piles live in arenas owned by
//!    the [`Table`]; everything else holds `CardRef`/`PileId` handles.
//!
//! 3. **Explicit Context**: UI, sound and statistics are collaborator
//!    traits handed to the board in a [`GameContext`], never globals.
//!
//! ## Architecture
//!
//! - **Commit Rule**: An operation counts as a move only if the board CRC
//!   (per-pile card counts) changed. No-ops never reach the undo history
//!   or the statistics.
//!
//! - **Persistent Undo History**: Snapshots are plain values in an
//!   `im::Vector`, so the history clones in O(1) and serializes as is.
//!
//! ## Modules
//!
//! - `core`: Handles, geometry, RNG, configuration, errors
//! - `cards`: Card identity, runtime card state, pair comparator
//! - `piles`: Piles, the table, per-kind behavior
//! - `variants`: The `Variant` trait, registry and built-in games
//! - `undo`: Board snapshots and the undo stack
//! - `context`: Collaborator traits and `GameContext`
//! - `baize`: The board controller and its input state machine

pub mod core;
pub mod cards;
pub mod piles;
pub mod variants;
pub mod undo;
pub mod context;
pub mod baize;

// Re-export commonly used types
pub use crate::core::{
    BaizeConfig, CardRef, EngineError, GameRng, GameRngState, Geometry, Legality, MoveError,
    PileId, Point, Rect,
};

pub use crate::cards::{Card, CardId, CardPair, Color, Suit};

pub use crate::piles::{DeckSpec, FanType, MovableTail, MoveType, Pile, PileClass, PileKind, Table};

pub use crate::variants::{Easy, Freecell, Klondike, Spider, Variant, VariantRegistry};

pub use crate::undo::{SavedCard, SavedPile, Snapshot, UndoStack};

pub use crate::context::{
    Cue, Fab, GameContext, Recorder, SoundPlayer, Statistics, Status, TallyStatistics, Ui,
};

pub use crate::baize::{Baize, Bound, StrokeEvent, StrokeKind};
