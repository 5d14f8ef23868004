//! Piles and the table that owns them.
//!
//! - [`Pile`]: an ordered stack of card handles with a fixed kind, slot and
//!   fan style
//! - [`Table`]: the card and pile arenas, with the derived references to
//!   stock, waste, foundations and the rest
//! - [`behavior`]: per-kind legality, sortedness and tap/collect actions

pub mod behavior;
pub mod pile;
pub mod table;

pub use behavior::{MovableTail, Tail};
pub use pile::{FanType, MoveType, Pile, PileClass, PileKind, UNLIMITED_RECYCLES};
pub use table::{DeckSpec, Table};
