//! Undo history and board snapshots.

pub mod snapshot;

pub use snapshot::{decode_stack, encode_stack, SavedCard, SavedPile, Snapshot, UndoStack};
