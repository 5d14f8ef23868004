//! The table: card arena, pile arena and derived pile references.
//!
//! `Table` is the single owner of every [`Card`] and [`Pile`] in a game.
//! Piles hold [`CardRef`] handles into the card arena; cards hold a
//! non-owning [`PileId`] back to their pile. Only the mutators here touch
//! either side, so the two always agree:
//!
//! - every card is in exactly one pile, except for the instant between a
//!   `pop` and the following `push`
//! - the derived references (stock, waste, foundations, ...) only name
//!   piles that exist
//!
//! ## Usage
//!
//! ```
//! use rust_solitaire::core::Point;
//! use rust_solitaire::piles::{DeckSpec, FanType, PileKind, Table};
//!
//! let mut table = Table::default();
//! let stock = table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
//! let tableau = table.add_pile(PileKind::Tableau, Point::new(1, 0), FanType::Down);
//!
//! assert_eq!(table.pile(stock).len(), 52);
//! table.move_card(stock, tableau);
//! assert_eq!(table.pile(tableau).len(), 1);
//! assert!(!table.card(table.pile(tableau).cards()[0]).prone());
//! ```

use rustc_hash::FxHashMap;

use super::pile::{FanType, MoveType, Pile, PileKind};
use crate::cards::{Card, CardId, Suit, CARDS_PER_SUIT};
use crate::core::{CardRef, GameRng, Geometry, PileId, Point, Rect};

/// What cards a Stock creates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckSpec {
    pub packs: u8,
    /// 1 (Spades only), 2 (Hearts and Spades) or 4.
    pub suits: u8,
    pub jokers_per_pack: u8,
}

impl DeckSpec {
    /// One pack of four suits, no jokers.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            packs: 1,
            suits: 4,
            jokers_per_pack: 0,
        }
    }

    #[must_use]
    pub const fn packs(packs: u8) -> Self {
        Self {
            packs,
            suits: 4,
            jokers_per_pack: 0,
        }
    }

    #[must_use]
    pub const fn with_suits(mut self, suits: u8) -> Self {
        self.suits = suits;
        self
    }

    #[must_use]
    pub const fn with_jokers(mut self, jokers_per_pack: u8) -> Self {
        self.jokers_per_pack = jokers_per_pack;
        self
    }

    fn suits_in_use(&self) -> &'static [Suit] {
        match self.suits {
            1 => &[Suit::Spade],
            2 => &[Suit::Heart, Suit::Spade],
            _ => &Suit::ALL,
        }
    }

    /// Number of cards this spec creates.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let per_pack = self.suits_in_use().len() * CARDS_PER_SUIT + self.jokers_per_pack as usize;
        per_pack * self.packs as usize
    }
}

/// Card arena, pile arena and derived pile references.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub(crate) cards: Vec<Card>,
    by_id: FxHashMap<CardId, CardRef>,
    pub(crate) piles: Vec<Pile>,

    stock: Option<PileId>,
    waste: Option<PileId>,
    foundations: Vec<PileId>,
    tableaux: Vec<PileId>,
    discards: Vec<PileId>,
    cells: Vec<PileId>,
    reserves: Vec<PileId>,

    geometry: Geometry,
}

impl Table {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    // === Building ===

    /// Add the Stock and create the card library in it, face down.
    ///
    /// Panics if the table already has a Stock.
    pub fn add_stock(&mut self, slot: Point, fan: FanType, deck: DeckSpec) -> PileId {
        if self.stock.is_some() {
            panic!("Table already has a Stock");
        }
        let stock = self.add_pile(PileKind::Stock { recycles: 0 }, slot, fan);

        for pack in 0..deck.packs {
            for &suit in deck.suits_in_use() {
                for ordinal in 1..=CARDS_PER_SUIT as u8 {
                    self.create_card(CardId::new(pack, suit, ordinal), stock);
                }
            }
            for _ in 0..deck.jokers_per_pack {
                self.create_card(CardId::joker(pack), stock);
            }
        }
        stock
    }

    fn create_card(&mut self, id: CardId, stock: PileId) {
        let card = CardRef::new(self.cards.len() as u16);
        self.cards.push(Card::new(id));
        // Jokers share an id within a pack; the first one is found by lookup.
        self.by_id.entry(id).or_insert(card);
        self.push(stock, card);
    }

    /// Add a pile with its kind's default move type.
    pub fn add_pile(&mut self, kind: PileKind, slot: Point, fan: FanType) -> PileId {
        self.add_pile_with(kind, slot, fan, kind.default_move_type())
    }

    pub fn add_pile_with(
        &mut self,
        kind: PileKind,
        slot: Point,
        fan: FanType,
        move_type: MoveType,
    ) -> PileId {
        let id = PileId::new(self.piles.len() as u16);
        let mut pile = Pile::new(id, kind, slot, fan, move_type);
        pile.pos = self.geometry.slot_origin(slot);
        self.piles.push(pile);
        self.register_aux(id, kind);
        id
    }

    pub fn set_label(&mut self, pile: PileId, label: impl Into<String>) {
        self.pile_mut(pile).set_label(label);
    }

    fn register_aux(&mut self, id: PileId, kind: PileKind) {
        match kind {
            PileKind::Stock { .. } => self.stock = Some(id),
            PileKind::Waste => self.waste = Some(id),
            PileKind::Foundation => self.foundations.push(id),
            PileKind::Tableau => self.tableaux.push(id),
            PileKind::Discard => self.discards.push(id),
            PileKind::Cell => self.cells.push(id),
            PileKind::Reserve => self.reserves.push(id),
        }
    }

    /// Recompute the derived pile references by scanning pile kinds.
    pub fn build_aux_piles(&mut self) {
        self.stock = None;
        self.waste = None;
        self.foundations.clear();
        self.tableaux.clear();
        self.discards.clear();
        self.cells.clear();
        self.reserves.clear();

        let kinds: Vec<(PileId, PileKind)> = self.piles.iter().map(|p| (p.id(), p.kind)).collect();
        for (id, kind) in kinds {
            self.register_aux(id, kind);
        }
    }

    // === Lookup ===

    /// Panics if `card` is not on this table; see [`get_card`](Self::get_card).
    #[must_use]
    pub fn card(&self, card: CardRef) -> &Card {
        &self.cards[card.index()]
    }

    /// Checked lookup, for handles that may come from an earlier layout.
    #[must_use]
    pub fn get_card(&self, card: CardRef) -> Option<&Card> {
        self.cards.get(card.index())
    }

    pub fn card_mut(&mut self, card: CardRef) -> &mut Card {
        &mut self.cards[card.index()]
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Handle of the card with this identity. For duplicated identities
    /// (jokers) the first one created.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<CardRef> {
        self.by_id.get(&id).copied()
    }

    #[must_use]
    pub fn pile(&self, pile: PileId) -> &Pile {
        &self.piles[pile.index()]
    }

    #[must_use]
    pub fn get_pile(&self, pile: PileId) -> Option<&Pile> {
        self.piles.get(pile.index())
    }

    pub(crate) fn pile_mut(&mut self, pile: PileId) -> &mut Pile {
        &mut self.piles[pile.index()]
    }

    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile_ids(&self) -> impl Iterator<Item = PileId> + '_ {
        self.piles.iter().map(Pile::id)
    }

    /// Pile holding `card`. Panics if the card is in transit.
    #[must_use]
    pub fn owner(&self, card: CardRef) -> PileId {
        self.card(card)
            .owner()
            .unwrap_or_else(|| panic!("{} has no owning pile", card))
    }

    #[must_use]
    pub fn stock(&self) -> Option<PileId> {
        self.stock
    }

    #[must_use]
    pub fn waste(&self) -> Option<PileId> {
        self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[PileId] {
        &self.foundations
    }

    #[must_use]
    pub fn tableaux(&self) -> &[PileId] {
        &self.tableaux
    }

    #[must_use]
    pub fn discards(&self) -> &[PileId] {
        &self.discards
    }

    #[must_use]
    pub fn cells(&self) -> &[PileId] {
        &self.cells
    }

    #[must_use]
    pub fn reserves(&self) -> &[PileId] {
        &self.reserves
    }

    #[must_use]
    pub fn peek(&self, pile: PileId) -> Option<CardRef> {
        self.pile(pile).peek()
    }

    /// Top card of `pile`, borrowed.
    #[must_use]
    pub fn peek_card(&self, pile: PileId) -> Option<&Card> {
        self.peek(pile).map(|c| self.card(c))
    }

    // === Stock bookkeeping ===

    /// Remaining recycles of the Stock; 0 when there is no Stock.
    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.stock
            .and_then(|s| self.pile(s).recycles())
            .unwrap_or(0)
    }

    pub fn set_recycles(&mut self, recycles: u32) {
        if let Some(stock) = self.stock {
            self.pile_mut(stock).kind = PileKind::Stock { recycles };
        }
    }

    // === Mutation ===

    /// Put an unowned card on top of `pile`. Cards pushed to a Stock turn
    /// face down, anywhere else face up.
    ///
    /// Panics if the card is already in a pile.
    pub fn push(&mut self, pile: PileId, card: CardRef) {
        if let Some(owner) = self.card(card).owner() {
            panic!("{} is already in {}", card, owner);
        }
        let to_stock = self.pile(pile).is_stock();
        let c = self.card_mut(card);
        c.set_owner(Some(pile));
        c.set_prone(to_stock);
        self.pile_mut(pile).cards.push(card);
        self.refan(pile);
    }

    /// Take the top card off `pile`, leaving it unowned.
    pub fn pop(&mut self, pile: PileId) -> Option<CardRef> {
        let card = self.pile_mut(pile).cards.pop()?;
        self.card_mut(card).set_owner(None);
        self.refan(pile);
        Some(card)
    }

    /// Turn the exposed card of a non-Stock pile face up.
    pub fn flip_up_exposed(&mut self, pile: PileId) {
        if self.pile(pile).is_stock() {
            return;
        }
        if let Some(top) = self.peek(pile) {
            if self.card(top).prone() {
                self.card_mut(top).flip_up();
                self.refan(pile);
            }
        }
    }

    /// Move the top card of `src` to `dst`.
    pub fn move_card(&mut self, src: PileId, dst: PileId) -> Option<CardRef> {
        let card = self.pop(src)?;
        self.push(dst, card);
        self.flip_up_exposed(src);
        Some(card)
    }

    /// Move `head` and every card above it, in order, to `dst`.
    ///
    /// Panics if `head` is not in a pile.
    pub fn move_tail(&mut self, head: CardRef, dst: PileId) {
        let src = self.owner(head);
        let Some(index) = self.pile(src).index_of(head) else {
            panic!("{} claims {} but does not hold it", src, head);
        };
        let moved: Vec<CardRef> = self.pile_mut(src).cards.drain(index..).collect();
        for &card in &moved {
            self.card_mut(card).set_owner(None);
        }
        for card in moved {
            self.push(dst, card);
        }
        self.refan(src);
        self.flip_up_exposed(src);
    }

    /// Move one card, wherever it is, to the top of `dst`. Orientation
    /// follows `push`. For arranging boards outside of play.
    pub fn relocate(&mut self, card: CardRef, dst: PileId) {
        if let Some(src) = self.card(card).owner() {
            self.pile_mut(src).cards.retain(|&c| c != card);
            self.card_mut(card).set_owner(None);
            self.refan(src);
        }
        self.push(dst, card);
    }

    /// Remove every card from every pile.
    pub(crate) fn clear_piles(&mut self) {
        for pile in &mut self.piles {
            pile.cards.clear();
            pile.target = false;
        }
        for card in &mut self.cards {
            card.set_owner(None);
            card.stop_drag();
        }
    }

    /// Gather every card back into the Stock, face down, and shuffle it.
    ///
    /// Panics if there is no Stock.
    pub fn gather_and_shuffle(&mut self, rng: &mut GameRng) {
        let Some(stock) = self.stock else {
            panic!("Table has no Stock to gather cards into");
        };
        self.clear_piles();

        let mut order: Vec<CardRef> = (0..self.cards.len()).map(|i| CardRef::new(i as u16)).collect();
        rng.shuffle(&mut order);
        for card in order {
            self.push(stock, card);
        }
    }

    // === Layout ===

    /// Recompute every pile position from its slot.
    pub fn place_piles(&mut self) {
        let geometry = self.geometry;
        for pile in &mut self.piles {
            pile.pos = geometry.slot_origin(pile.slot);
        }
        self.refan_all();
    }

    /// Reflect the visible piles horizontally and swap fan directions.
    pub fn mirror(&mut self) {
        let xs: Vec<i32> = self
            .piles
            .iter()
            .filter(|p| !p.is_hidden())
            .map(|p| p.slot.x)
            .collect();
        let (Some(&min_x), Some(&max_x)) = (xs.iter().min(), xs.iter().max()) else {
            return;
        };
        for pile in self.piles.iter_mut().filter(|p| !p.is_hidden()) {
            pile.slot.x = max_x - pile.slot.x + min_x;
            pile.fan = pile.fan.mirrored();
        }
        self.place_piles();
    }

    /// Reposition the cards of `pile` according to its fan.
    pub fn refan(&mut self, pile: PileId) {
        let geometry = self.geometry;
        let (origin, fan, cards) = {
            let p = self.pile(pile);
            (p.pos, p.fan, p.cards.clone())
        };
        let across = geometry.fan_across_delta();
        let fan3_start = cards.len().saturating_sub(3);

        let mut down = 0;
        for (i, &card) in cards.iter().enumerate() {
            let pos = match fan {
                FanType::None => origin,
                FanType::Down => Point::new(origin.x, origin.y + down),
                FanType::Right => Point::new(origin.x + across * i as i32, origin.y),
                FanType::Left => Point::new(origin.x - across * i as i32, origin.y),
                FanType::Right3 => {
                    Point::new(origin.x + across * i.saturating_sub(fan3_start) as i32, origin.y)
                }
                FanType::Left3 => {
                    Point::new(origin.x - across * i.saturating_sub(fan3_start) as i32, origin.y)
                }
            };
            let c = &mut self.cards[card.index()];
            down += geometry.fan_down_delta(c.prone());
            if !c.is_dragging() {
                c.set_pos(pos);
            }
        }
    }

    pub fn refan_all(&mut self) {
        for i in 0..self.piles.len() {
            self.refan(PileId::new(i as u16));
        }
    }

    // === Hit testing ===

    /// Rectangle of the pile slot joined with its spread cards.
    #[must_use]
    pub fn fanned_rect(&self, pile: PileId) -> Rect {
        let p = self.pile(pile);
        let base = self.geometry.card_rect(p.pos);
        p.cards
            .iter()
            .map(|&c| self.geometry.card_rect(self.card(c).pos()))
            .fold(base, |acc, r| acc.union(&r))
    }

    /// Rectangle of a card at its current position.
    #[must_use]
    pub fn card_rect(&self, card: CardRef) -> Rect {
        self.geometry.card_rect(self.card(card).pos())
    }

    /// Topmost visible card under `pt`. Later piles win over earlier ones.
    #[must_use]
    pub fn find_card_at(&self, pt: Point) -> Option<CardRef> {
        self.piles
            .iter()
            .rev()
            .filter(|p| !p.is_hidden())
            .flat_map(|p| p.cards.iter().rev())
            .copied()
            .find(|&c| self.card_rect(c).contains(pt))
    }

    /// First visible pile whose fanned rectangle holds `pt`.
    #[must_use]
    pub fn find_pile_at(&self, pt: Point) -> Option<PileId> {
        self.piles
            .iter()
            .filter(|p| !p.is_hidden())
            .map(Pile::id)
            .find(|&id| self.fanned_rect(id).contains(pt))
    }

    /// Pile other than the card's owner that overlaps the card most.
    /// Ties go to the pile registered first.
    #[must_use]
    pub fn largest_intersection(&self, card: CardRef) -> Option<PileId> {
        let owner = self.card(card).owner();
        let card_rect = self.card_rect(card);
        let mut best: Option<(PileId, i32)> = None;
        for pile in self.piles.iter().filter(|p| !p.is_hidden()) {
            if Some(pile.id()) == owner {
                continue;
            }
            let area = self.fanned_rect(pile.id()).intersect(&card_rect).area();
            if area > best.map_or(0, |(_, a)| a) {
                best = Some((pile.id(), area));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn clear_targets(&mut self) {
        for pile in &mut self.piles {
            pile.target = false;
        }
    }

    pub fn set_target(&mut self, pile: PileId) {
        self.pile_mut(pile).target = true;
    }

    // === Fingerprint ===

    /// CRC-32 over the per-pile card counts, in pile order.
    #[must_use]
    pub fn crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for pile in &self.piles {
            hasher.update(&(pile.len() as u32).to_le_bytes());
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_stock() -> (Table, PileId) {
        let mut table = Table::default();
        let stock = table.add_stock(Point::new(0, 0), FanType::None, DeckSpec::standard());
        (table, stock)
    }

    #[test]
    fn test_stock_creates_library() {
        let (table, stock) = table_with_stock();
        assert_eq!(table.card_count(), 52);
        assert_eq!(table.pile(stock).len(), 52);
        assert!(table.cards().iter().all(|c| c.prone() && c.owner() == Some(stock)));
    }

    #[test]
    fn test_deck_spec_counts() {
        assert_eq!(DeckSpec::standard().card_count(), 52);
        assert_eq!(DeckSpec::packs(2).card_count(), 104);
        assert_eq!(DeckSpec::packs(2).with_suits(1).card_count(), 26);
        assert_eq!(DeckSpec::standard().with_jokers(2).card_count(), 54);
    }

    #[test]
    fn test_aux_references() {
        let (mut table, stock) = table_with_stock();
        let waste = table.add_pile(PileKind::Waste, Point::new(1, 0), FanType::Right3);
        let f = table.add_pile(PileKind::Foundation, Point::new(3, 0), FanType::None);
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);

        assert_eq!(table.stock(), Some(stock));
        assert_eq!(table.waste(), Some(waste));
        assert_eq!(table.foundations(), &[f]);
        assert_eq!(table.tableaux(), &[t]);

        table.build_aux_piles();
        assert_eq!(table.stock(), Some(stock));
        assert_eq!(table.foundations(), &[f]);
        assert_eq!(table.tableaux(), &[t]);
        assert!(table.discards().is_empty());
    }

    #[test]
    fn test_move_card_updates_owner_and_orientation() {
        let (mut table, stock) = table_with_stock();
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);

        let card = table.move_card(stock, t).unwrap();
        assert_eq!(table.card(card).owner(), Some(t));
        assert!(!table.card(card).prone());
        assert_eq!(table.pile(stock).len(), 51);
        // Stock cards stay face down
        assert!(table.card(table.peek(stock).unwrap()).prone());
    }

    #[test]
    #[should_panic(expected = "is already in")]
    fn test_push_owned_card_panics() {
        let (mut table, stock) = table_with_stock();
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let card = table.peek(stock).unwrap();
        table.push(t, card);
    }

    #[test]
    fn test_move_tail_flips_exposed_card() {
        let (mut table, stock) = table_with_stock();
        let a = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let b = table.add_pile(PileKind::Tableau, Point::new(1, 1), FanType::Down);

        for _ in 0..4 {
            table.move_card(stock, a);
        }
        let bottom = table.pile(a).cards()[0];
        table.card_mut(bottom).flip_down();
        let head = table.pile(a).cards()[1];

        table.move_tail(head, b);
        assert_eq!(table.pile(a).len(), 1);
        assert_eq!(table.pile(b).len(), 3);
        assert_eq!(table.pile(b).cards()[0], head);
        assert!(!table.card(bottom).prone());
    }

    #[test]
    fn test_relocate_from_middle() {
        let (mut table, stock) = table_with_stock();
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let card = table.find_card(CardId::new(0, Suit::Heart, 7)).unwrap();

        table.relocate(card, t);
        assert_eq!(table.pile(t).cards(), &[card]);
        assert_eq!(table.pile(stock).len(), 51);
        assert!(table.pile(stock).index_of(card).is_none());
    }

    #[test]
    fn test_gather_and_shuffle_is_deterministic() {
        let (mut a, stock) = table_with_stock();
        let (mut b, _) = table_with_stock();
        let t = a.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        b.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        a.move_card(stock, t);

        a.gather_and_shuffle(&mut GameRng::new(9));
        b.gather_and_shuffle(&mut GameRng::new(9));

        assert_eq!(a.pile(stock).cards(), b.pile(stock).cards());
        assert_eq!(a.pile(stock).len(), 52);
        assert!(a.pile(t).is_empty());
        assert!(a.cards().iter().all(Card::prone));
    }

    #[test]
    fn test_crc_tracks_counts_only() {
        let (mut table, stock) = table_with_stock();
        let a = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let b = table.add_pile(PileKind::Tableau, Point::new(1, 1), FanType::Down);
        table.move_card(stock, a);
        table.move_card(stock, b);
        let before = table.crc();

        // Swap the two cards: counts unchanged
        let ca = table.pop(a).unwrap();
        let cb = table.pop(b).unwrap();
        table.push(a, cb);
        table.push(b, ca);
        assert_eq!(table.crc(), before);

        table.move_card(a, b);
        assert_ne!(table.crc(), before);
    }

    #[test]
    fn test_mirror_reflects_visible_slots() {
        let mut table = Table::default();
        table.add_stock(Point::new(-5, -5), FanType::None, DeckSpec::standard());
        let left = table.add_pile(PileKind::Waste, Point::new(1, 0), FanType::Right3);
        let right = table.add_pile(PileKind::Foundation, Point::new(6, 0), FanType::None);
        let mid = table.add_pile(PileKind::Tableau, Point::new(3, 1), FanType::Down);

        table.mirror();

        assert_eq!(table.pile(left).slot(), Point::new(6, 0));
        assert_eq!(table.pile(left).fan(), FanType::Left3);
        assert_eq!(table.pile(right).slot(), Point::new(1, 0));
        assert_eq!(table.pile(mid).slot(), Point::new(4, 1));
        assert_eq!(table.pile(PileId::new(0)).slot(), Point::new(-5, -5));
    }

    #[test]
    fn test_fan_down_positions() {
        let (mut table, stock) = table_with_stock();
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        table.move_card(stock, t);
        table.move_card(stock, t);

        let g = *table.geometry();
        let origin = table.pile(t).pos();
        let cards = table.pile(t).cards().to_vec();
        assert_eq!(table.card(cards[0]).pos(), origin);
        assert_eq!(
            table.card(cards[1]).pos(),
            Point::new(origin.x, origin.y + g.fan_down_delta(false))
        );
    }

    #[test]
    fn test_waste_fans_top_three_only() {
        let (mut table, stock) = table_with_stock();
        let w = table.add_pile(PileKind::Waste, Point::new(1, 0), FanType::Right3);
        for _ in 0..5 {
            table.move_card(stock, w);
        }
        let across = table.geometry().fan_across_delta();
        let origin = table.pile(w).pos();
        let xs: Vec<i32> = table
            .pile(w)
            .cards()
            .iter()
            .map(|&c| table.card(c).pos().x - origin.x)
            .collect();
        assert_eq!(xs, vec![0, 0, 0, across, 2 * across]);
    }

    #[test]
    fn test_hit_testing() {
        let (mut table, stock) = table_with_stock();
        let t = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        table.move_card(stock, t);
        let top = table.move_card(stock, t).unwrap();

        let pos = table.card(top).pos();
        assert_eq!(table.find_card_at(Point::new(pos.x + 5, pos.y + 5)), Some(top));
        assert_eq!(table.find_pile_at(Point::new(pos.x + 5, pos.y + 5)), Some(t));
        assert_eq!(table.find_card_at(Point::new(-100, -100)), None);
    }

    #[test]
    fn test_largest_intersection_skips_owner() {
        let (mut table, stock) = table_with_stock();
        let a = table.add_pile(PileKind::Tableau, Point::new(0, 1), FanType::Down);
        let b = table.add_pile(PileKind::Tableau, Point::new(1, 1), FanType::Down);
        let card = table.move_card(stock, a).unwrap();

        // Sitting on its own pile only
        assert_eq!(table.largest_intersection(card), None);

        let target = table.pile(b).pos();
        table.card_mut(card).set_pos(Point::new(target.x - 10, target.y));
        assert_eq!(table.largest_intersection(card), Some(b));
    }

    #[test]
    fn test_checked_lookups() {
        let (table, stock) = table_with_stock();
        assert!(table.get_card(CardRef::new(51)).is_some());
        assert!(table.get_card(CardRef::new(52)).is_none());
        assert_eq!(table.get_pile(stock).map(Pile::id), Some(stock));
        assert!(table.get_pile(PileId::new(1)).is_none());
    }

    #[test]
    fn test_recycles() {
        let (mut table, _) = table_with_stock();
        assert_eq!(table.recycles(), 0);
        table.set_recycles(2);
        assert_eq!(table.recycles(), 2);
    }
}
