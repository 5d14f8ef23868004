//! Card instances - runtime card state.
//!
//! A `Card` pairs an immutable [`CardId`] with the state that changes during
//! play: orientation, owning pile, board position and drag bookkeeping.
//!
//! The owner is a non-owning [`PileId`]. Only the board's
//! [`Table`](crate::piles::Table) changes it, so a card is in exactly one
//! pile, or in none while it is being moved between two.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, Suit};
use crate::core::{PileId, Point};

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,

    /// Face down.
    prone: bool,

    owner: Option<PileId>,

    /// Top left corner in board coordinates.
    pos: Point,

    /// Where the current drag started.
    drag_start: Point,

    dragging: bool,
}

impl Card {
    /// A new card starts face down and unowned.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            prone: true,
            owner: None,
            pos: Point::default(),
            drag_start: Point::default(),
            dragging: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.id.suit
    }

    #[must_use]
    pub fn ordinal(&self) -> u8 {
        self.id.ordinal
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.id.is_joker()
    }

    // === Orientation ===

    #[must_use]
    pub fn prone(&self) -> bool {
        self.prone
    }

    pub fn flip_up(&mut self) {
        self.prone = false;
    }

    pub fn flip_down(&mut self) {
        self.prone = true;
    }

    pub fn flip(&mut self) {
        self.prone = !self.prone;
    }

    pub fn set_prone(&mut self, prone: bool) {
        self.prone = prone;
    }

    // === Ownership ===

    #[must_use]
    pub fn owner(&self) -> Option<PileId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PileId>) {
        self.owner = owner;
    }

    // === Position ===

    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    // === Dragging ===

    pub fn start_drag(&mut self) {
        self.drag_start = self.pos;
        self.dragging = true;
    }

    /// Reposition by the cumulative offset since the drag started.
    pub fn drag_by(&mut self, offset: Point) {
        self.pos = self.drag_start.add(offset);
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Stop dragging and return to where the drag started.
    pub fn cancel_drag(&mut self) {
        self.dragging = false;
        self.pos = self.drag_start;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn was_dragged(&self) -> bool {
        self.pos != self.drag_start
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(CardId::new(0, Suit::Heart, 9))
    }

    #[test]
    fn test_new_card_is_prone_and_unowned() {
        let c = card();
        assert!(c.prone());
        assert_eq!(c.owner(), None);
        assert_eq!(c.ordinal(), 9);
        assert_eq!(c.suit(), Suit::Heart);
    }

    #[test]
    fn test_flips() {
        let mut c = card();
        c.flip_up();
        assert!(!c.prone());
        c.flip();
        assert!(c.prone());
        c.set_prone(false);
        assert!(!c.prone());
        c.flip_down();
        assert!(c.prone());
    }

    #[test]
    fn test_drag_and_cancel() {
        let mut c = card();
        c.set_pos(Point::new(100, 200));
        c.start_drag();
        assert!(c.is_dragging());

        c.drag_by(Point::new(15, -5));
        assert_eq!(c.pos(), Point::new(115, 195));
        assert!(c.was_dragged());

        c.drag_by(Point::new(30, 0));
        assert_eq!(c.pos(), Point::new(130, 200));

        c.cancel_drag();
        assert!(!c.is_dragging());
        assert_eq!(c.pos(), Point::new(100, 200));
        assert!(!c.was_dragged());
    }

    #[test]
    fn test_owner() {
        let mut c = card();
        c.set_owner(Some(PileId::new(4)));
        assert_eq!(c.owner(), Some(PileId::new(4)));
        c.set_owner(None);
        assert_eq!(c.owner(), None);
    }
}
