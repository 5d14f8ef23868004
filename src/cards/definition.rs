//! Card identity - the immutable part of a card.
//!
//! A `CardId` names a card by pack, suit and ordinal. It never changes once
//! the card is created and is what snapshots store. The mutable runtime
//! state (orientation, owner, position) lives in [`Card`](super::Card).

use serde::{Deserialize, Serialize};

/// Ordinal of an Ace.
pub const ACE: u8 = 1;
/// Ordinal of a King.
pub const KING: u8 = 13;
/// Cards per suit.
pub const CARDS_PER_SUIT: usize = 13;

/// Card suit. Jokers have `NoSuit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    NoSuit,
    Club,
    Diamond,
    Heart,
    Spade,
}

/// Card colour, for alternating-colour rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    /// The four real suits, in the order a Stock creates them.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::NoSuit | Suit::Club | Suit::Spade => Color::Black,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::NoSuit => "*",
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
        }
    }
}

/// Immutable identity of one physical card.
///
/// ```
/// use rust_solitaire::cards::{CardId, Suit};
///
/// let queen = CardId::new(0, Suit::Diamond, 12);
/// assert_eq!(queen.to_string(), "Q♦");
/// assert!(!queen.is_joker());
///
/// let joker = CardId::joker(1);
/// assert!(joker.is_joker());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub pack: u8,
    pub suit: Suit,
    /// 1 (Ace) to 13 (King); 0 for a Joker.
    pub ordinal: u8,
}

impl CardId {
    #[must_use]
    pub const fn new(pack: u8, suit: Suit, ordinal: u8) -> Self {
        Self { pack, suit, ordinal }
    }

    #[must_use]
    pub const fn joker(pack: u8) -> Self {
        Self::new(pack, Suit::NoSuit, 0)
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::NoSuit)
    }
}

fn ordinal_label(ordinal: u8) -> String {
    match ordinal {
        0 => "Joker".to_string(),
        ACE => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        KING => "K".to_string(),
        n => n.to_string(),
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker() {
            write!(f, "Joker")
        } else {
            write!(f, "{}{}", ordinal_label(self.ordinal), self.suit.symbol())
        }
    }
}
