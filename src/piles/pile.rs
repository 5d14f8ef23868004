//! Pile kinds and the pile container itself.
//!
//! A pile is an ordered stack of card handles, bottom to top, plus the
//! fixed identity it was built with: kind, board slot, fan style and move
//! granularity. Piles hold no mutable state of their own beyond that,
//! except the Stock's recycle counter.

use serde::{Deserialize, Serialize};

use crate::core::{CardRef, PileId, Point};

/// Recycle count that is, in practice, unlimited.
pub const UNLIMITED_RECYCLES: u32 = 32767;

/// Pile kind, with any per-kind bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileKind {
    Stock { recycles: u32 },
    Waste,
    Foundation,
    Tableau,
    Reserve,
    Discard,
    Cell,
}

/// Pile kind without bookkeeping; what snapshots record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileClass {
    Stock,
    Waste,
    Foundation,
    Tableau,
    Reserve,
    Discard,
    Cell,
}

impl PileKind {
    #[must_use]
    pub const fn class(self) -> PileClass {
        match self {
            PileKind::Stock { .. } => PileClass::Stock,
            PileKind::Waste => PileClass::Waste,
            PileKind::Foundation => PileClass::Foundation,
            PileKind::Tableau => PileClass::Tableau,
            PileKind::Reserve => PileClass::Reserve,
            PileKind::Discard => PileClass::Discard,
            PileKind::Cell => PileClass::Cell,
        }
    }

    /// How many cards a tail lifted from this kind may hold by default.
    #[must_use]
    pub const fn default_move_type(self) -> MoveType {
        match self {
            PileKind::Foundation | PileKind::Discard => MoveType::None,
            PileKind::Tableau => MoveType::Any,
            PileKind::Stock { .. } | PileKind::Waste | PileKind::Reserve | PileKind::Cell => {
                MoveType::One
            }
        }
    }
}

impl PileClass {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PileClass::Stock => "Stock",
            PileClass::Waste => "Waste",
            PileClass::Foundation => "Foundation",
            PileClass::Tableau => "Tableau",
            PileClass::Reserve => "Reserve",
            PileClass::Discard => "Discard",
            PileClass::Cell => "Cell",
        }
    }
}

impl std::fmt::Display for PileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How cards in a pile are spread out. A display hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanType {
    None,
    Down,
    Left,
    Right,
    /// Only the top three cards are spread.
    Left3,
    Right3,
}

impl FanType {
    /// Left and right swapped, for mirrored layouts.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            FanType::Left => FanType::Right,
            FanType::Right => FanType::Left,
            FanType::Left3 => FanType::Right3,
            FanType::Right3 => FanType::Left3,
            other => other,
        }
    }
}

/// Tail granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveType {
    /// Nothing may be lifted.
    None,
    /// Only the top card.
    One,
    /// Any face up run ending at the top.
    Any,
}

/// An ordered stack of cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    pub(crate) kind: PileKind,
    pub(crate) slot: Point,
    pub(crate) fan: FanType,
    move_type: MoveType,
    /// Bottom to top.
    pub(crate) cards: Vec<CardRef>,
    label: Option<String>,
    pub(crate) pos: Point,
    pub(crate) target: bool,
}

impl Pile {
    pub(crate) fn new(id: PileId, kind: PileKind, slot: Point, fan: FanType, move_type: MoveType) -> Self {
        Self {
            id,
            kind,
            slot,
            fan,
            move_type,
            cards: Vec::new(),
            label: None,
            pos: Point::default(),
            target: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    #[must_use]
    pub fn class(&self) -> PileClass {
        self.kind.class()
    }

    #[must_use]
    pub fn slot(&self) -> Point {
        self.slot
    }

    #[must_use]
    pub fn fan(&self) -> FanType {
        self.fan
    }

    #[must_use]
    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Board position of the pile's slot.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// True while a dragged card overlaps this pile more than any other.
    #[must_use]
    pub fn is_target(&self) -> bool {
        self.target
    }

    /// Piles placed off the board (negative slot) are not shown.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.slot.x < 0
    }

    #[must_use]
    pub fn is_stock(&self) -> bool {
        matches!(self.kind, PileKind::Stock { .. })
    }

    /// Remaining recycles, for a Stock.
    #[must_use]
    pub fn recycles(&self) -> Option<u32> {
        match self.kind {
            PileKind::Stock { recycles } => Some(recycles),
            _ => None,
        }
    }

    // === Contents ===

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card.
    #[must_use]
    pub fn peek(&self) -> Option<CardRef> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<CardRef> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    #[must_use]
    pub fn index_of(&self, card: CardRef) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Number of adjacent pairs.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }
}
