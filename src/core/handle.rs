//! Non-owning handles into the board arenas.
//!
//! The board owns every card and every pile in two flat arenas. Everything
//! else (piles listing their cards, cards naming their owner, the dragged
//! tail, the undo snapshots) refers to them through these handles.
//!
//! ## Usage
//!
//! ```
//! use rust_solitaire::core::{CardRef, PileId};
//!
//! let card = CardRef::new(12);
//! let pile = PileId::new(3);
//!
//! assert_eq!(card.index(), 12);
//! assert_eq!(format!("{}", pile), "Pile(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Index of a card in the board's card library.
///
/// Stable for the lifetime of a variant; rebuilt on `new_variant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardRef(pub u16);

impl CardRef {
    /// Create a new card handle.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position in the card library.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardRef({})", self.0)
    }
}

/// Index of a pile in registration order.
///
/// Registration order matters: it is the order piles are hashed for the
/// board checksum and the tie-break order for drop targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a new pile handle.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position in the pile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}
