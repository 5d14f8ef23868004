//! Board snapshots.
//!
//! A [`Snapshot`] is a value copy of the board: for every pile, its class
//! and the identity and orientation of each card, bottom to top. It never
//! refers to live cards, so the undo history can be cloned, serialized and
//! handed to a host without aliasing the running game.
//!
//! The history itself is an `im::Vector`, so taking a copy for persistence
//! is O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{CardRef, EngineError, PileId};
use crate::piles::{PileClass, Table};

/// One card as recorded in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub id: CardId,
    pub prone: bool,
}

/// One pile as recorded in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPile {
    pub class: PileClass,
    /// Bottom to top.
    pub cards: Vec<SavedCard>,
}

/// The whole board at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub piles: Vec<SavedPile>,
    /// Undo depth saved with "save position".
    pub bookmark: usize,
    /// Remaining Stock recycles.
    pub recycles: u32,
}

/// Undo history; the first entry is the freshly dealt board.
pub type UndoStack = Vector<Snapshot>;

impl Snapshot {
    /// Record `table` as it stands.
    #[must_use]
    pub fn capture(table: &Table, bookmark: usize) -> Self {
        let piles = table
            .piles()
            .iter()
            .map(|pile| SavedPile {
                class: pile.class(),
                cards: pile
                    .cards()
                    .iter()
                    .map(|&c| {
                        let card = table.card(c);
                        SavedCard {
                            id: card.id(),
                            prone: card.prone(),
                        }
                    })
                    .collect(),
            })
            .collect();
        Self {
            piles,
            bookmark,
            recycles: table.recycles(),
        }
    }

    /// Total cards recorded.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(|p| p.cards.len()).sum()
    }

    /// Same CRC the board would report after restoring this snapshot.
    #[must_use]
    pub fn crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for pile in &self.piles {
            hasher.update(&(pile.cards.len() as u32).to_le_bytes());
        }
        hasher.finalize()
    }

    /// Put every card of `table` where this snapshot says.
    ///
    /// The snapshot is checked against the board first; on error the board
    /// is left untouched.
    pub fn restore(&self, table: &mut Table) -> Result<(), EngineError> {
        let placements = self.resolve(table)?;

        table.clear_piles();
        for (pile, cards) in placements {
            for (card, prone) in cards {
                table.push(pile, card);
                table.card_mut(card).set_prone(prone);
            }
        }
        table.set_recycles(self.recycles);
        table.refan_all();
        Ok(())
    }

    /// Map every recorded card onto a card of `table`.
    fn resolve(&self, table: &Table) -> Result<Vec<(PileId, Vec<(CardRef, bool)>)>, EngineError> {
        if self.piles.len() != table.piles().len() {
            return Err(EngineError::PileCountMismatch {
                expected: table.piles().len(),
                found: self.piles.len(),
            });
        }
        if self.card_count() != table.card_count() {
            return Err(EngineError::CardCountMismatch {
                expected: table.card_count(),
                found: self.card_count(),
            });
        }

        // Identical identities (jokers) are handed out in arena order.
        let mut available: FxHashMap<CardId, Vec<CardRef>> = FxHashMap::default();
        for i in (0..table.card_count()).rev() {
            let card = CardRef::new(i as u16);
            available.entry(table.card(card).id()).or_default().push(card);
        }

        let mut placements = Vec::with_capacity(self.piles.len());
        for (saved, pile) in self.piles.iter().zip(table.piles()) {
            if saved.class != pile.class() {
                return Err(EngineError::PileClassMismatch {
                    pile: pile.id(),
                    expected: pile.class().name(),
                    found: saved.class.name(),
                });
            }
            let mut cards = Vec::with_capacity(saved.cards.len());
            for sc in &saved.cards {
                let card = available
                    .get_mut(&sc.id)
                    .and_then(Vec::pop)
                    .ok_or_else(|| EngineError::UnknownCard(sc.id.to_string()))?;
                cards.push((card, sc.prone));
            }
            placements.push((pile.id(), cards));
        }
        Ok(placements)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Encode a whole undo history.
pub fn encode_stack(stack: &UndoStack) -> Result<Vec<u8>, EngineError> {
    Ok(bincode::serialize(stack)?)
}

/// Decode a history written by [`encode_stack`].
pub fn decode_stack(bytes: &[u8]) -> Result<UndoStack, EngineError> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Point};
    use crate::piles::{DeckSpec, FanType, PileKind};

    fn small_table() -> Table {
        let mut table = Table::default();
        let stock = table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        table.add_pile(PileKind::Foundation, Point::new(1, 0), FanType::None);
        table.gather_and_shuffle(&mut GameRng::new(5));
        for _ in 0..3 {
            table.move_card(stock, t);
        }
        let bottom = table.pile(t).cards()[0];
        table.card_mut(bottom).flip_down();
        table
    }

    fn layout(table: &Table) -> Vec<Vec<(CardId, bool)>> {
        table
            .piles()
            .iter()
            .map(|p| {
                p.cards()
                    .iter()
                    .map(|&c| (table.card(c).id(), table.card(c).prone()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let mut table = small_table();
        table.set_recycles(2);
        let before = layout(&table);
        let crc = table.crc();
        let snap = Snapshot::capture(&table, 0);
        assert_eq!(snap.crc(), crc);

        // Scramble the board
        let stock = table.stock().unwrap();
        let t = table.tableaux()[0];
        table.move_card(stock, t);
        table.move_card(stock, t);
        table.set_recycles(0);

        snap.restore(&mut table).unwrap();
        assert_eq!(layout(&table), before);
        assert_eq!(table.crc(), crc);
        assert_eq!(table.recycles(), 2);
    }

    #[test]
    fn test_restore_rejects_wrong_layout() {
        let mut table = small_table();
        let mut snap = Snapshot::capture(&table, 0);
        snap.piles.pop();
        assert!(matches!(
            snap.restore(&mut table),
            Err(EngineError::PileCountMismatch { expected: 3, found: 2 })
        ));

        let mut snap = Snapshot::capture(&table, 0);
        snap.piles[1].class = PileClass::Reserve;
        assert!(matches!(
            snap.restore(&mut table),
            Err(EngineError::PileClassMismatch { .. })
        ));
    }

    #[test]
    fn test_restore_rejects_duplicate_card() {
        let mut table = small_table();
        let before = layout(&table);
        let mut snap = Snapshot::capture(&table, 0);
        let dup = snap.piles[0].cards[0];
        snap.piles[1].cards[0] = dup;

        let err = snap.restore(&mut table).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCard(_)));
        // Untouched on error
        assert_eq!(layout(&table), before);
    }

    #[test]
    fn test_bytes_round_trip() {
        let table = small_table();
        let snap = Snapshot::capture(&table, 4);
        let bytes = snap.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snap);
    }

    #[test]
    fn test_stack_encoding() {
        let table = small_table();
        let mut stack = UndoStack::new();
        stack.push_back(Snapshot::capture(&table, 0));
        stack.push_back(Snapshot::capture(&table, 1));

        let decoded = decode_stack(&encode_stack(&stack).unwrap()).unwrap();
        assert_eq!(decoded, stack);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let snap = Snapshot::capture(&small_table(), 0);
        let bytes = snap.to_bytes().unwrap();
        assert!(matches!(
            Snapshot::from_bytes(&bytes[..bytes.len() / 2]),
            Err(EngineError::Codec(_))
        ));
    }
}
