//! Spider, four suits: two packs, ten tableaux, runs from King to Ace of
//! one suit are discarded. Tapping the Stock deals one card to every
//! tableau.

use super::{check_pairs, count_unsorted, source_kind, Variant};
use crate::cards::{CardPair, KING};
use crate::core::{CardRef, Legality, MoveError, PileId, Point};
use crate::piles::{behavior, DeckSpec, FanType, PileKind, Table};

#[derive(Clone, Copy, Debug, Default)]
pub struct Spider;

impl Spider {
    fn deal_row(table: &mut Table) -> Legality {
        let Some(stock) = table.stock() else {
            return Ok(());
        };
        if table.pile(stock).is_empty() {
            return Ok(());
        }
        let tableaux = table.tableaux().to_vec();
        if tableaux.iter().any(|&t| table.pile(t).is_empty()) {
            return Err(MoveError::new(
                "All empty tableaux must be filled before dealing a new row",
            ));
        }
        for t in tableaux {
            if table.move_card(stock, t).is_none() {
                break;
            }
        }
        Ok(())
    }
}

impl Variant for Spider {
    fn name(&self) -> &str {
        "Spider"
    }

    fn build_piles(&self, table: &mut Table) {
        table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::packs(2));
        for x in 2..10 {
            table.add_pile(PileKind::Discard, Point::new(x, 0), FanType::None);
        }
        for x in 0..10 {
            table.add_pile(PileKind::Tableau, Point::new(x, 1), FanType::Down);
        }
    }

    fn start_game(&self, table: &mut Table) {
        let Some(stock) = table.stock() else {
            return;
        };
        for (i, t) in table.tableaux().to_vec().into_iter().enumerate() {
            let down = if i < 4 { 5 } else { 4 };
            for _ in 0..down {
                if let Some(card) = table.move_card(stock, t) {
                    table.card_mut(card).flip_down();
                }
            }
            table.move_card(stock, t);
        }
        table.set_recycles(0);
    }

    fn tail_move_error(&self, table: &Table, tail: &[CardRef]) -> Legality {
        match source_kind(table, tail) {
            Some(PileKind::Tableau) => check_pairs(table, tail, |p| p.compare_down_suit()),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, table: &Table, dst: PileId, tail: &[CardRef]) -> Legality {
        let Some(&head) = tail.first() else {
            return Ok(());
        };
        match table.pile(dst).kind() {
            PileKind::Discard => {
                if table.card(head).ordinal() != KING {
                    return Err(MoveError::new("Can only discard a run starting with a King"));
                }
                check_pairs(table, tail, |p| p.compare_down_suit())
            }
            PileKind::Tableau => match table.peek_card(dst) {
                None => Ok(()),
                Some(top) => CardPair::new(top, table.card(head)).compare_down(),
            },
            _ => Ok(()),
        }
    }

    /// Sorted means whatever a tableau would accept: descending, any suit.
    fn unsorted_pairs(&self, table: &Table, pile: PileId) -> usize {
        count_unsorted(table, pile, |p| p.compare_down())
    }

    fn tail_tapped(&self, table: &mut Table, tail: &[CardRef]) -> Legality {
        if matches!(source_kind(table, tail), Some(PileKind::Stock { .. })) {
            return Self::deal_row(table);
        }
        behavior::tail_tapped(table, self, tail)
    }

    fn pile_tapped(&self, table: &mut Table, pile: PileId) -> Legality {
        if table.pile(pile).is_stock() {
            return Self::deal_row(table);
        }
        Ok(())
    }

    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Spider_(solitaire)"
    }
}
