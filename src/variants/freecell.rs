//! FreeCell: every card dealt face up, four cells, tableaux built down in
//! alternating colours.
//!
//! With power moves on, a multi-card tail is accepted when it could have
//! been moved one card at a time through the empty cells and tableaux:
//! at most `(1 + empty cells) * 2^(empty tableaux)`, not counting the
//! destination. With power moves off only single cards move between
//! tableaux.

use super::{check_pairs, count_unsorted, foundation_append_error, source_kind, Variant};
use crate::cards::CardPair;
use crate::core::{CardRef, Legality, MoveError, PileId, Point};
use crate::piles::{DeckSpec, FanType, PileKind, Table};

#[derive(Clone, Copy, Debug)]
pub struct Freecell {
    power_moves: bool,
}

impl Freecell {
    #[must_use]
    pub fn new(power_moves: bool) -> Self {
        Self { power_moves }
    }

    /// Largest tail that may land on `dst`.
    #[must_use]
    pub fn max_move(table: &Table, dst: PileId) -> usize {
        let empty_cells = table
            .cells()
            .iter()
            .filter(|&&c| table.pile(c).is_empty())
            .count();
        let empty_tableaux = table
            .tableaux()
            .iter()
            .filter(|&&t| t != dst && table.pile(t).is_empty())
            .count();
        (1 + empty_cells) << empty_tableaux
    }
}

impl Default for Freecell {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Variant for Freecell {
    fn name(&self) -> &str {
        "Freecell"
    }

    fn build_piles(&self, table: &mut Table) {
        table.add_stock(Point::new(-5, -5), FanType::None, DeckSpec::standard());
        for x in 0..4 {
            table.add_pile(PileKind::Cell, Point::new(x, 0), FanType::None);
        }
        for x in 4..8 {
            let f = table.add_pile(PileKind::Foundation, Point::new(x, 0), FanType::None);
            table.set_label(f, "A");
        }
        for x in 0..8 {
            table.add_pile(PileKind::Tableau, Point::new(x, 1), FanType::Down);
        }
    }

    fn start_game(&self, table: &mut Table) {
        let Some(stock) = table.stock() else {
            return;
        };
        let tableaux = table.tableaux().to_vec();
        for t in tableaux.iter().cycle() {
            if table.move_card(stock, *t).is_none() {
                break;
            }
        }
        table.set_recycles(0);
    }

    fn tail_move_error(&self, table: &Table, tail: &[CardRef]) -> Legality {
        match source_kind(table, tail) {
            Some(PileKind::Tableau) => {
                if tail.len() > 1 && !self.power_moves {
                    return Err(MoveError::new("Can only move one card at a time"));
                }
                check_pairs(table, tail, |p| p.compare_down_alt_color())
            }
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, table: &Table, dst: PileId, tail: &[CardRef]) -> Legality {
        let Some(&head) = tail.first() else {
            return Ok(());
        };
        match table.pile(dst).kind() {
            PileKind::Foundation => foundation_append_error(table, dst, head),
            PileKind::Tableau => {
                if tail.len() > 1 {
                    let max = Self::max_move(table, dst);
                    if tail.len() > max {
                        return Err(MoveError::new(format!(
                            "Only enough space to move {} cards, not {}",
                            max,
                            tail.len()
                        )));
                    }
                }
                match table.peek_card(dst) {
                    None => Ok(()),
                    Some(top) => CardPair::new(top, table.card(head)).compare_down_alt_color(),
                }
            }
            _ => Ok(()),
        }
    }

    fn unsorted_pairs(&self, table: &Table, pile: PileId) -> usize {
        count_unsorted(table, pile, |p| p.compare_down_alt_color())
    }

    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/FreeCell"
    }
}
