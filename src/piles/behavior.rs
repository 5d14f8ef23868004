//! Per-kind pile behavior.
//!
//! Every pile kind answers the same questions: can this tail be lifted,
//! can that tail be dropped here, how sorted is the pile, is it done.
//! Each function below switches on [`PileKind`] and either answers
//! directly or defers to the active [`Variant`], which owns the rules that
//! differ between games.
//!
//! ## Pile kind behavior
//!
//! | Kind       | Lift            | Accept                          | Unsorted pairs | Conformant   | Complete        |
//! |------------|-----------------|---------------------------------|----------------|--------------|-----------------|
//! | Stock      | top card        | never                           | `len - 1`      | empty        | empty           |
//! | Waste      | top card        | one card from the Stock         | `len - 1`      | `len <= 1`   | empty           |
//! | Foundation | never           | one card, then variant          | 0              | always       | 13 cards        |
//! | Tableau    | variant         | variant                         | variant        | no unsorted  | empty           |
//! | Reserve    | top card        | never                           | `len - 1`      | `len <= 1`   | empty           |
//! | Cell       | top card        | one card into an empty cell     | 0              | always       | empty           |
//! | Discard    | never           | a 13-card run, then variant     | 0              | always       | empty or 13     |
//!
//! None of the legality checks mutate anything; calling them repeatedly
//! with the same arguments gives the same answer.

use smallvec::SmallVec;

use super::pile::{MoveType, PileKind};
use super::table::Table;
use crate::cards::{CARDS_PER_SUIT, KING};
use crate::core::{CardRef, Legality, MoveError, PileId};
use crate::variants::Variant;

/// Cards lifted together, bottom to top.
pub type Tail = SmallVec<[CardRef; 16]>;

/// A liftable tail and one pile that would take it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovableTail {
    pub dst: PileId,
    pub tail: Tail,
}

/// Cards that would be lifted by grabbing `card`. Empty when `card` cannot
/// head a tail.
#[must_use]
pub fn make_tail(table: &Table, card: CardRef) -> Tail {
    let Some(owner) = table.card(card).owner() else {
        return Tail::new();
    };
    let pile = table.pile(owner);
    let Some(index) = pile.index_of(card) else {
        return Tail::new();
    };
    if table.card(card).prone() && !pile.is_stock() {
        return Tail::new();
    }
    match pile.move_type() {
        MoveType::None | MoveType::One => {
            if index + 1 == pile.len() {
                SmallVec::from_slice(&[card])
            } else {
                Tail::new()
            }
        }
        MoveType::Any => SmallVec::from_slice(&pile.cards()[index..]),
    }
}

/// Whether `tail` may be lifted from the pile it is in.
pub fn can_move_tail<V: Variant + ?Sized>(table: &Table, script: &V, tail: &[CardRef]) -> Legality {
    let Some(&head) = tail.first() else {
        return Err(MoveError::new("There are no cards to move"));
    };
    let pile = table.pile(table.owner(head));
    match pile.move_type() {
        MoveType::None => {
            return Err(MoveError::new(format!("Cannot move cards from a {}", pile.class())));
        }
        MoveType::One if tail.len() > 1 => {
            return Err(MoveError::new(format!(
                "Can only move one card from a {}",
                pile.class()
            )));
        }
        _ => {}
    }
    if pile.is_stock() {
        return Ok(());
    }
    if tail.iter().any(|&c| table.card(c).prone()) {
        return Err(MoveError::new("Cannot move a face down card"));
    }
    script.tail_move_error(table, tail)
}

/// Whether `dst` would take `tail`.
pub fn can_accept_tail<V: Variant + ?Sized>(
    table: &Table,
    script: &V,
    dst: PileId,
    tail: &[CardRef],
) -> Legality {
    let Some(&head) = tail.first() else {
        return Err(MoveError::new("There are no cards to move"));
    };
    let from_stock = table
        .card(head)
        .owner()
        .is_some_and(|src| table.pile(src).is_stock());
    let pile = table.pile(dst);

    if from_stock && !matches!(pile.kind(), PileKind::Waste | PileKind::Stock { .. }) {
        return Err(MoveError::new("Cards from the Stock can only go to the Waste"));
    }

    match pile.kind() {
        PileKind::Stock { .. } => Err(MoveError::new("Cannot move cards to the Stock")),
        PileKind::Waste => {
            if from_stock && tail.len() == 1 {
                Ok(())
            } else {
                Err(MoveError::new("Waste can only accept cards from the Stock"))
            }
        }
        PileKind::Reserve => Err(MoveError::new("Cannot add a card to a Reserve")),
        PileKind::Cell => {
            if !pile.is_empty() {
                Err(MoveError::new("A Cell can only contain one card"))
            } else if tail.len() > 1 {
                Err(MoveError::new("Cannot move more than one card to a Cell"))
            } else {
                Ok(())
            }
        }
        PileKind::Foundation => {
            if tail.len() > 1 {
                Err(MoveError::new("Cannot move more than one card to a Foundation"))
            } else if pile.len() >= CARDS_PER_SUIT {
                Err(MoveError::new("The Foundation is already complete"))
            } else {
                script.tail_append_error(table, dst, tail)
            }
        }
        PileKind::Discard => {
            if !pile.is_empty() {
                Err(MoveError::new("A Discard pile can only hold one run"))
            } else if tail.len() != CARDS_PER_SUIT {
                Err(MoveError::new("Can only discard a complete run of 13 cards"))
            } else {
                script.tail_append_error(table, dst, tail)
            }
        }
        PileKind::Tableau => script.tail_append_error(table, dst, tail),
    }
}

/// Adjacent pairs in `pile` that are out of order for its kind.
#[must_use]
pub fn unsorted_pairs<V: Variant + ?Sized>(table: &Table, script: &V, pile: PileId) -> usize {
    let p = table.pile(pile);
    match p.kind() {
        PileKind::Stock { .. } | PileKind::Waste | PileKind::Reserve => p.pairs(),
        PileKind::Foundation | PileKind::Cell | PileKind::Discard => 0,
        PileKind::Tableau => script.unsorted_pairs(table, pile),
    }
}

/// Minimal well-formedness, short of complete.
#[must_use]
pub fn conformant<V: Variant + ?Sized>(table: &Table, script: &V, pile: PileId) -> bool {
    let p = table.pile(pile);
    match p.kind() {
        PileKind::Stock { .. } => p.is_empty(),
        PileKind::Waste | PileKind::Reserve => p.len() < 2,
        PileKind::Foundation | PileKind::Cell | PileKind::Discard => true,
        PileKind::Tableau => script.unsorted_pairs(table, pile) == 0,
    }
}

/// True when the pile needs no further play.
#[must_use]
pub fn complete(table: &Table, pile: PileId) -> bool {
    let p = table.pile(pile);
    match p.kind() {
        PileKind::Foundation => p.len() == CARDS_PER_SUIT,
        PileKind::Discard => p.is_empty() || p.len() == CARDS_PER_SUIT,
        _ => p.is_empty(),
    }
}

/// Every pile except the tail's origin that would take `tail`, in pile
/// order. Hidden piles are never homes.
#[must_use]
pub fn find_homes_for_tail<V: Variant + ?Sized>(
    table: &Table,
    script: &V,
    tail: &[CardRef],
) -> Vec<PileId> {
    let Some(&head) = tail.first() else {
        return Vec::new();
    };
    let origin = table.card(head).owner();
    table
        .piles()
        .iter()
        .filter(|p| Some(p.id()) != origin && !p.is_hidden())
        .map(|p| p.id())
        .filter(|&dst| can_accept_tail(table, script, dst, tail).is_ok())
        .collect()
}

/// Every tail that can be lifted from `pile`, paired with each pile that
/// would take it. Moving a whole pile onto an empty pile of the same kind
/// is left out, as it changes nothing.
#[must_use]
pub fn movable_tails<V: Variant + ?Sized>(table: &Table, script: &V, pile: PileId) -> Vec<MovableTail> {
    let p = table.pile(pile);
    let heads: Vec<CardRef> = match p.move_type() {
        MoveType::None => Vec::new(),
        MoveType::One => p.peek().into_iter().collect(),
        MoveType::Any => p.cards().to_vec(),
    };

    let mut out = Vec::new();
    for head in heads {
        let tail = make_tail(table, head);
        if tail.is_empty() || can_move_tail(table, script, &tail).is_err() {
            continue;
        }
        let whole_pile = tail.len() == p.len();
        for dst in find_homes_for_tail(table, script, &tail) {
            let d = table.pile(dst);
            if whole_pile && d.is_empty() && d.class() == p.class() {
                continue;
            }
            out.push(MovableTail {
                dst,
                tail: tail.clone(),
            });
        }
    }
    out
}

/// Lowest top ordinal across the foundations; 0 if any is empty.
fn lowest_foundation_ordinal(table: &Table) -> u8 {
    table
        .foundations()
        .iter()
        .map(|&f| table.peek_card(f).map_or(0, |c| c.ordinal()))
        .min()
        .unwrap_or(KING)
}

/// A card is safe to collect when no card that could still be played on it
/// is more than one rank below the lowest foundation.
#[must_use]
pub fn safe_to_collect(table: &Table, card: CardRef) -> bool {
    table.card(card).ordinal() <= lowest_foundation_ordinal(table) + 2
}

/// Tap on a tail. Foundations, discards and the Stock ignore it; other
/// piles send a single card to the first foundation that takes it, or a
/// full run to the first discard that takes it.
pub fn tail_tapped<V: Variant + ?Sized>(table: &mut Table, script: &V, tail: &[CardRef]) -> Legality {
    let Some(&head) = tail.first() else {
        return Ok(());
    };
    let src = table.owner(head);
    if matches!(
        table.pile(src).kind(),
        PileKind::Stock { .. } | PileKind::Foundation | PileKind::Discard
    ) {
        return Ok(());
    }
    if let Err(err) = can_move_tail(table, script, tail) {
        tracing::debug!(%src, reason = err.reason(), "tapped tail cannot move");
        return Ok(());
    }

    let homes: Vec<PileId> = if tail.len() == 1 {
        table.foundations().to_vec()
    } else {
        table.discards().to_vec()
    };
    let view: &Table = table;
    if let Some(dst) = homes
        .into_iter()
        .find(|&dst| can_accept_tail(view, script, dst, tail).is_ok())
    {
        table.move_tail(head, dst);
    }
    Ok(())
}

/// Try to move the top card of `pile` to a foundation. Returns true if a
/// card moved.
pub fn collect<V: Variant + ?Sized>(table: &mut Table, script: &V, pile: PileId, safe: bool) -> bool {
    if matches!(
        table.pile(pile).kind(),
        PileKind::Stock { .. } | PileKind::Foundation | PileKind::Discard
    ) {
        return false;
    }
    let Some(top) = table.peek(pile) else {
        return false;
    };
    let tail = [top];
    if table.card(top).prone() || can_move_tail(table, script, &tail).is_err() {
        return false;
    }
    if safe && !safe_to_collect(table, top) {
        return false;
    }
    let view: &Table = table;
    let home = view
        .foundations()
        .iter()
        .copied()
        .find(|&f| can_accept_tail(view, script, f, &tail).is_ok());
    match home {
        Some(dst) => {
            table.move_card(pile, dst);
            true
        }
        None => false,
    }
}

/// How much of the game has been played, out of every card on the table.
///
/// Each card still waiting in a Stock, Waste or Reserve counts as unplayed,
/// as does each out-of-order pair elsewhere. Cards at rest in a Foundation,
/// Discard or Cell count as played. No move changes the card count, so an
/// accepted move never lowers the result. 100 for a table with no cards.
#[must_use]
pub fn percent_complete<V: Variant + ?Sized>(table: &Table, script: &V) -> u8 {
    let total = table.card_count();
    if total == 0 {
        return 100;
    }
    let unplayed: usize = table
        .pile_ids()
        .map(|pile| {
            let p = table.pile(pile);
            match p.kind() {
                PileKind::Stock { .. } | PileKind::Waste | PileKind::Reserve => p.len(),
                _ => unsorted_pairs(table, script, pile),
            }
        })
        .sum();
    (100 - unplayed.min(total) * 100 / total) as u8
}
