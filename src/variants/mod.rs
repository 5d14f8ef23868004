//! Variant scripts: the per-game rules.
//!
//! A variant lays out the piles, deals the opening position and answers
//! the rule questions that differ from game to game. Piles own the
//! kind-wide rules (see [`behavior`](crate::piles::behavior)) and defer to
//! the variant for the rest.
//!
//! ## Implementation Notes
//!
//! - `build_piles`: layout only, the Stock creates the cards but nothing is
//!   dealt yet
//! - `start_game`: called with every card shuffled into the Stock face down
//! - `tail_move_error` / `tail_append_error`: must not mutate anything
//! - `tail_tapped` / `pile_tapped`: return `Err` to have the reason toasted
//!
//! Variants are stateless between games; [`VariantRegistry`] creates a fresh
//! one by name whenever the board switches variant.

mod easy;
mod freecell;
mod klondike;
mod spider;

pub use easy::Easy;
pub use freecell::Freecell;
pub use klondike::Klondike;
pub use spider::Spider;

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardPair, ACE};
use crate::core::{BaizeConfig, CardRef, EngineError, Legality, MoveError, PileId};
use crate::piles::{behavior, PileKind, Table};

/// Rules for one solitaire game.
pub trait Variant {
    /// Name the variant is registered under.
    fn name(&self) -> &str;

    /// Create the piles. The Stock creates the card library.
    fn build_piles(&self, table: &mut Table);

    /// Deal the opening position from a shuffled Stock.
    fn start_game(&self, table: &mut Table);

    /// Housekeeping after each committed move.
    fn after_move(&self, _table: &mut Table) {}

    /// Whether `tail` may be lifted from its pile, wherever it goes.
    fn tail_move_error(&self, table: &Table, tail: &[CardRef]) -> Legality;

    /// Whether `tail` may be appended to `dst`.
    fn tail_append_error(&self, table: &Table, dst: PileId, tail: &[CardRef]) -> Legality;

    /// Out-of-order adjacent pairs in a tableau.
    fn unsorted_pairs(&self, table: &Table, pile: PileId) -> usize;

    /// Tap on a tail. The default sends it home if it has one.
    fn tail_tapped(&self, table: &mut Table, tail: &[CardRef]) -> Legality {
        behavior::tail_tapped(table, self, tail)
    }

    /// Tap on an empty pile or on a pile's background.
    fn pile_tapped(&self, _table: &mut Table, _pile: PileId) -> Legality {
        Ok(())
    }

    fn percent_complete(&self, table: &Table) -> u8 {
        behavior::percent_complete(table, self)
    }

    /// Where to read the rules.
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Patience_(game)"
    }
}

/// Creates a variant for the given board configuration.
pub type VariantFactory = fn(&BaizeConfig) -> Box<dyn Variant>;

/// Variants by name.
///
/// ## Example
///
/// ```
/// use rust_solitaire::core::BaizeConfig;
/// use rust_solitaire::variants::VariantRegistry;
///
/// let registry = VariantRegistry::builtin();
/// let easy = registry.create("Easy", &BaizeConfig::default()).unwrap();
/// assert_eq!(easy.name(), "Easy");
/// assert!(registry.create("Pyramid", &BaizeConfig::default()).is_err());
/// ```
#[derive(Clone, Default)]
pub struct VariantRegistry {
    factories: FxHashMap<String, VariantFactory>,
}

impl VariantRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every variant this crate ships.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("Easy", |_| Box::new(Easy));
        registry.register("Klondike", |_| Box::new(Klondike));
        registry.register("Freecell", |config| Box::new(Freecell::new(config.power_moves)));
        registry.register("Spider", |_| Box::new(Spider));
        registry
    }

    /// Register a variant.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, name: impl Into<String>, factory: VariantFactory) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Variant '{}' already registered", name);
        }
        self.factories.insert(name, factory);
    }

    /// Instantiate the named variant.
    pub fn create(&self, name: &str, config: &BaizeConfig) -> Result<Box<dyn Variant>, EngineError> {
        self.factories
            .get(name)
            .map(|factory| factory(config))
            .ok_or_else(|| EngineError::UnknownVariant(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("names", &self.names())
            .finish()
    }
}

// === Helpers shared by the variants ===

fn card_refs<'t>(table: &'t Table, cards: &[CardRef]) -> Vec<&'t Card> {
    cards.iter().map(|&c| table.card(c)).collect()
}

/// Check every adjacent pair of `cards` with `rule`.
pub(crate) fn check_pairs(
    table: &Table,
    cards: &[CardRef],
    rule: fn(&CardPair<'_>) -> Legality,
) -> Legality {
    let refs = card_refs(table, cards);
    let result = CardPair::windows(&refs).try_for_each(|pair| rule(&pair));
    result
}

/// Adjacent pairs in `pile` that are face down or fail `rule`.
pub(crate) fn count_unsorted(
    table: &Table,
    pile: PileId,
    rule: fn(&CardPair<'_>) -> Legality,
) -> usize {
    let refs = card_refs(table, table.pile(pile).cards());
    let unsorted = CardPair::windows(&refs)
        .filter(|pair| pair.either_prone() || rule(pair).is_err())
        .count();
    unsorted
}

/// Kind of the pile holding the head of `tail`.
pub(crate) fn source_kind(table: &Table, tail: &[CardRef]) -> Option<PileKind> {
    let head = *tail.first()?;
    table.card(head).owner().map(|p| table.pile(p).kind())
}

/// Foundations built up in suit from the Ace.
pub(crate) fn foundation_append_error(table: &Table, dst: PileId, head: CardRef) -> Legality {
    let card = table.card(head);
    match table.peek_card(dst) {
        None if card.ordinal() == ACE => Ok(()),
        None => Err(MoveError::new("Empty Foundations can only accept an Ace")),
        Some(top) => CardPair::new(top, card).compare_up_suit(),
    }
}

/// Turn the top card of the Stock over onto the Waste.
pub(crate) fn deal_stock_to_waste(table: &mut Table) {
    let (Some(stock), Some(waste)) = (table.stock(), table.waste()) else {
        return;
    };
    table.move_card(stock, waste);
}

/// Turn the Waste back over into the Stock, spending one recycle.
pub(crate) fn recycle_waste(table: &mut Table) -> Legality {
    let (Some(stock), Some(waste)) = (table.stock(), table.waste()) else {
        return Ok(());
    };
    let recycles = table.recycles();
    if recycles == 0 {
        return Err(MoveError::new("No more recycles"));
    }
    if table.pile(waste).is_empty() {
        return Ok(());
    }
    while table.move_card(waste, stock).is_some() {}
    table.set_recycles(recycles - 1);
    tracing::debug!(remaining = recycles - 1, "recycled waste");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Suit};
    use crate::core::Point;
    use crate::piles::{DeckSpec, FanType};

    #[test]
    fn test_builtin_names() {
        let registry = VariantRegistry::builtin();
        assert_eq!(registry.names(), vec!["Easy", "Freecell", "Klondike", "Spider"]);
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("Spider"));
    }

    #[test]
    fn test_unknown_variant() {
        let registry = VariantRegistry::builtin();
        let err = registry.create("Nope", &BaizeConfig::default()).err().unwrap();
        assert!(matches!(err, EngineError::UnknownVariant(name) if name == "Nope"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut registry = VariantRegistry::builtin();
        registry.register("Easy", |_| Box::new(Easy));
    }

    fn run_on_tableau(ids: &[(Suit, u8)]) -> (Table, PileId, Vec<CardRef>) {
        let mut table = Table::default();
        table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let cards: Vec<CardRef> = ids
            .iter()
            .map(|&(suit, ordinal)| table.find_card(CardId::new(0, suit, ordinal)).unwrap())
            .collect();
        for &card in &cards {
            table.relocate(card, t);
        }
        (table, t, cards)
    }

    #[test]
    fn test_check_pairs_reports_first_failure() {
        let (table, _, cards) =
            run_on_tableau(&[(Suit::Club, 9), (Suit::Heart, 8), (Suit::Heart, 6)]);
        assert!(check_pairs(&table, &cards[..2], |p| p.compare_down_alt_color()).is_ok());
        let err = check_pairs(&table, &cards, |p| p.compare_down_alt_color()).unwrap_err();
        assert_eq!(err.reason(), "Cards must be in alternating colors");
    }

    #[test]
    fn test_count_unsorted_includes_face_down_pairs() {
        let (mut table, t, cards) =
            run_on_tableau(&[(Suit::Spade, 5), (Suit::Spade, 4), (Suit::Spade, 3), (Suit::Spade, 9)]);
        assert_eq!(count_unsorted(&table, t, |p| p.compare_down_suit()), 1);
        table.card_mut(cards[0]).flip_down();
        assert_eq!(count_unsorted(&table, t, |p| p.compare_down_suit()), 2);
    }

    #[test]
    fn test_register_custom() {
        let mut registry = VariantRegistry::new();
        assert!(registry.is_empty());
        registry.register("Tiny", |_| Box::new(Spider));
        assert_eq!(registry.create("Tiny", &BaizeConfig::default()).unwrap().name(), "Spider");
    }
}
