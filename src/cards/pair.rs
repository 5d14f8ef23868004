//! Pairwise card comparisons.
//!
//! Variants judge sequences by walking adjacent pairs of cards: `c1` is the
//! lower (earlier) card in the pile, `c2` the one placed on it. Every
//! comparison either succeeds or says why it failed; the reason is shown
//! to the player verbatim.
//!
//! Ranks do not wrap unless a variant asks for it with
//! [`CardPair::compare_up_suit_wrap`].

use super::definition::{ACE, KING};
use super::instance::Card;
use crate::core::{Legality, MoveError};

/// Two adjacent cards.
#[derive(Clone, Copy, Debug)]
pub struct CardPair<'a> {
    pub c1: &'a Card,
    pub c2: &'a Card,
}

impl<'a> CardPair<'a> {
    #[must_use]
    pub fn new(c1: &'a Card, c2: &'a Card) -> Self {
        Self { c1, c2 }
    }

    /// Adjacent pairs of a bottom-to-top sequence.
    pub fn windows(cards: &'a [&'a Card]) -> impl Iterator<Item = CardPair<'a>> + 'a {
        cards.windows(2).map(|w| CardPair::new(w[0], w[1]))
    }

    #[must_use]
    pub fn either_prone(&self) -> bool {
        self.c1.prone() || self.c2.prone()
    }

    fn same_suit(&self) -> Legality {
        if self.c1.suit() == self.c2.suit() {
            Ok(())
        } else {
            Err(MoveError::new("Cards must be the same suit"))
        }
    }

    fn alt_color(&self) -> Legality {
        if self.c1.suit().color() != self.c2.suit().color() {
            Ok(())
        } else {
            Err(MoveError::new("Cards must be in alternating colors"))
        }
    }

    /// `c2` is one rank below `c1`.
    pub fn compare_down(&self) -> Legality {
        if self.c1.ordinal() == self.c2.ordinal() + 1 {
            Ok(())
        } else {
            Err(MoveError::new("Cards must be in descending sequence"))
        }
    }

    /// `c2` is one rank above `c1`.
    pub fn compare_up(&self) -> Legality {
        if self.c1.ordinal() + 1 == self.c2.ordinal() {
            Ok(())
        } else {
            Err(MoveError::new("Cards must be in ascending sequence"))
        }
    }

    pub fn compare_down_suit(&self) -> Legality {
        self.same_suit()?;
        self.compare_down()
    }

    pub fn compare_up_suit(&self) -> Legality {
        self.same_suit()?;
        self.compare_up()
    }

    pub fn compare_down_alt_color(&self) -> Legality {
        self.alt_color()?;
        self.compare_down()
    }

    /// Like `compare_up_suit`, but an Ace may follow a King.
    pub fn compare_up_suit_wrap(&self) -> Legality {
        self.same_suit()?;
        if self.c1.ordinal() == KING && self.c2.ordinal() == ACE {
            return Ok(());
        }
        self.compare_up()
    }
}
