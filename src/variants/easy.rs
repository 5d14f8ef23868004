//! Easy: thirteen tableaux built down in suit, unlimited recycles.

use super::{
    check_pairs, count_unsorted, deal_stock_to_waste, foundation_append_error, recycle_waste,
    source_kind, Variant,
};
use crate::cards::CardPair;
use crate::core::{CardRef, Legality, MoveError, PileId, Point};
use crate::piles::{behavior, DeckSpec, FanType, MoveType, PileKind, Table, UNLIMITED_RECYCLES};

#[derive(Clone, Copy, Debug, Default)]
pub struct Easy;

impl Variant for Easy {
    fn name(&self) -> &str {
        "Easy"
    }

    fn build_piles(&self, table: &mut Table) {
        table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
        table.add_pile(PileKind::Waste, Point::new(1, 0), FanType::Right3);
        for x in 9..13 {
            let f = table.add_pile(PileKind::Foundation, Point::new(x, 0), FanType::None);
            table.set_label(f, "A");
        }
        for x in 0..13 {
            table.add_pile_with(PileKind::Tableau, Point::new(x, 1), FanType::Down, MoveType::Any);
        }
    }

    fn start_game(&self, table: &mut Table) {
        let Some(stock) = table.stock() else {
            return;
        };
        for t in table.tableaux().to_vec() {
            for _ in 0..2 {
                if let Some(card) = table.move_card(stock, t) {
                    table.card_mut(card).flip_down();
                }
            }
            table.move_card(stock, t);
        }
        table.set_recycles(UNLIMITED_RECYCLES);
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
            PileKind::Stock { .. } => Err(MoveError::new("You cannot move cards to the Stock")),
            PileKind::Waste => Err(MoveError::new("Waste can only accept cards from the Stock")),
            PileKind::Foundation => foundation_append_error(table, dst, head),
            PileKind::Tableau => match table.peek_card(dst) {
                None => Ok(()),
                Some(top) => CardPair::new(top, table.card(head)).compare_down_suit(),
            },
            _ => Ok(()),
        }
    }

    fn unsorted_pairs(&self, table: &Table, pile: PileId) -> usize {
        count_unsorted(table, pile, |p| p.compare_down_suit())
    }

    fn tail_tapped(&self, table: &mut Table, tail: &[CardRef]) -> Legality {
        if tail.len() == 1 && matches!(source_kind(table, tail), Some(PileKind::Stock { .. })) {
            deal_stock_to_waste(table);
            return Ok(());
        }
        behavior::tail_tapped(table, self, tail)
    }

    fn pile_tapped(&self, table: &mut Table, pile: PileId) -> Legality {
        if table.pile(pile).is_stock() {
            return recycle_waste(table);
        }
        Ok(())
    }

    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Solitaire"
    }
}
