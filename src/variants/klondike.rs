//! Klondike, draw one: seven tableaux built down in alternating colours,
//! only a King may fill a space, two recycles.

use super::{
    check_pairs, count_unsorted, deal_stock_to_waste, foundation_append_error, recycle_waste,
    source_kind, Variant,
};
use crate::cards::{CardPair, KING};
use crate::core::{CardRef, Legality, MoveError, PileId, Point};
use crate::piles::{behavior, DeckSpec, FanType, PileKind, Table};

const RECYCLES: u32 = 2;

#[derive(Clone, Copy, Debug, Default)]
pub struct Klondike;

impl Variant for Klondike {
    fn name(&self) -> &str {
        "Klondike"
    }

    fn build_piles(&self, table: &mut Table) {
        table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
        table.add_pile(PileKind::Waste, Point::new(1, 0), FanType::Right3);
        for x in 3..7 {
            let f = table.add_pile(PileKind::Foundation, Point::new(x, 0), FanType::None);
            table.set_label(f, "A");
        }
        for x in 0..7 {
            let t = table.add_pile(PileKind::Tableau, Point::new(x, 1), FanType::Down);
            table.set_label(t, "K");
        }
    }

    fn start_game(&self, table: &mut Table) {
        let Some(stock) = table.stock() else {
            return;
        };
        for (i, t) in table.tableaux().to_vec().into_iter().enumerate() {
            for _ in 0..i {
                if let Some(card) = table.move_card(stock, t) {
                    table.card_mut(card).flip_down();
                }
            }
            table.move_card(stock, t);
        }
        table.set_recycles(RECYCLES);
    }

    fn tail_move_error(&self, table: &Table, tail: &[CardRef]) -> Legality {
        match source_kind(table, tail) {
            Some(PileKind::Tableau) => check_pairs(table, tail, |p| p.compare_down_alt_color()),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, table: &Table, dst: PileId, tail: &[CardRef]) -> Legality {
        let Some(&head) = tail.first() else {
            return Ok(());
        };
        match table.pile(dst).kind() {
            PileKind::Foundation => foundation_append_error(table, dst, head),
            PileKind::Tableau => match table.peek_card(dst) {
                None if table.card(head).ordinal() == KING => Ok(()),
                None => Err(MoveError::new("Empty Tableaux can only accept a King")),
                Some(top) => CardPair::new(top, table.card(head)).compare_down_alt_color(),
            },
            _ => Ok(()),
        }
    }

    fn unsorted_pairs(&self, table: &Table, pile: PileId) -> usize {
        count_unsorted(table, pile, |p| p.compare_down_alt_color())
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
        "https://en.wikipedia.org/wiki/Klondike_(solitaire)"
    }
}
