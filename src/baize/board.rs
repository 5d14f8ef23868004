//! The board controller.

use crate::context::{Cue, Fab, GameContext, Status};
use crate::core::{BaizeConfig, CardRef, EngineError, GameRng, GameRngState, PileId, Point};
use crate::piles::{behavior, MovableTail, Table, Tail};
use crate::undo::{Snapshot, UndoStack};
use crate::variants::Variant;

use super::Bound;

/// One game of solitaire in progress.
///
/// Owns the table, the variant script, the undo history and the context
/// it reports to. Every mutation a player can cause goes through here so
/// that the commit rule, the undo stack and the statistics stay in step.
pub struct Baize {
    pub(super) table: Table,
    pub(super) script: Box<dyn Variant>,
    pub(super) ctx: GameContext,
    config: BaizeConfig,
    rng: GameRng,
    pub(super) tail: Tail,
    pub(super) bound: Option<Bound>,
    undo_stack: UndoStack,
    bookmark: usize,
    pub(super) drag_start: Point,
    pub(super) drag_offset: Point,
}

impl Baize {
    /// Build the configured variant and deal the first game.
    pub fn new(config: BaizeConfig, ctx: GameContext) -> Result<Self, EngineError> {
        let script = ctx.registry.create(&config.variant, &config)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut baize = Self {
            table: Table::new(config.geometry),
            script,
            ctx,
            config,
            rng,
            tail: Tail::new(),
            bound: None,
            undo_stack: UndoStack::new(),
            bookmark: 0,
            drag_start: Point::default(),
            drag_offset: Point::default(),
        };
        baize.build();
        Ok(baize)
    }

    // === Games ===

    /// Deal a new game of the current variant.
    ///
    /// An abandoned game that had any moves counts as lost.
    pub fn new_deal(&mut self) {
        self.record_abandoned_game();
        self.reset();
        self.deal();
    }

    /// Switch to the named variant and deal.
    ///
    /// An unknown name leaves the current game untouched.
    pub fn new_variant(&mut self, name: &str) -> Result<(), EngineError> {
        let script = self.ctx.registry.create(name, &self.config)?;
        self.record_abandoned_game();
        self.reset();
        self.script = script;
        self.config.variant = name.to_string();
        self.build();
        Ok(())
    }

    fn record_abandoned_game(&mut self) {
        if self.undo_stack.len() > 1 && !self.complete() {
            let percent = self.percent_complete();
            tracing::debug!(variant = %self.config.variant, percent, "recording lost game");
            self.ctx.stats.record_lost_game(&self.config.variant, percent);
        }
    }

    fn reset(&mut self) {
        self.tail.clear();
        self.bound = None;
        self.undo_stack.clear();
        self.bookmark = 0;
        self.drag_start = Point::default();
        self.drag_offset = Point::default();
        self.table.clear_targets();
    }

    fn build(&mut self) {
        let mut table = Table::new(self.config.geometry);
        self.script.build_piles(&mut table);
        table.build_aux_piles();
        if self.config.mirror_baize {
            table.mirror();
        }
        table.place_piles();
        self.table = table;
        tracing::debug!(
            variant = %self.config.variant,
            piles = self.table.piles().len(),
            cards = self.table.card_count(),
            "piles built"
        );
        self.ctx.ui.set_title(&self.config.variant);
        self.deal();
    }

    fn deal(&mut self) {
        self.table.gather_and_shuffle(&mut self.rng);
        self.script.start_game(&mut self.table);
        self.table.refan_all();
        self.ctx.sound.play(Cue::Fan);
        self.ctx.ui.hide_fab();
        self.undo_push();
        if let Some(message) = self.ctx.stats.welcome_toast(&self.config.variant) {
            self.ctx.ui.toast(&message);
        }
    }

    // === Commit rule ===

    /// Commit the last operation if it changed the board CRC.
    pub(super) fn commit_if_changed(&mut self, crc: u32, slide: bool) -> bool {
        if crc == self.crc() {
            tracing::debug!("board unchanged, nothing committed");
            return false;
        }
        if slide {
            self.ctx.sound.play(Cue::Slide);
        }
        self.after_user_move();
        true
    }

    fn after_user_move(&mut self) {
        self.script.after_move(&mut self.table);
        self.undo_push();
        tracing::debug!(moves = self.moves(), "move committed");

        if self.complete() {
            self.ctx.sound.play(Cue::Complete);
            self.ctx.stats.record_won_game(&self.config.variant);
            if let Some(message) = self.ctx.stats.won_toast(&self.config.variant) {
                self.ctx.ui.toast(&message);
            }
            self.ctx.ui.show_fab(Fab::Star);
        } else if self.conformant() {
            self.ctx.ui.show_fab(Fab::DoneAll);
        } else {
            self.ctx.ui.hide_fab();
        }
    }

    // === Collecting ===

    /// Ask every pile once to send its top card home.
    ///
    /// Returns true if anything moved; all of it is one move.
    pub fn collect(&mut self) -> bool {
        let crc = self.crc();
        self.collect_pass();
        self.commit_if_changed(crc, true)
    }

    /// Collect until a whole pass moves nothing, then commit once.
    pub fn collect_all(&mut self) -> bool {
        let crc = self.crc();
        while self.collect_pass() {}
        self.commit_if_changed(crc, true)
    }

    fn collect_pass(&mut self) -> bool {
        let safe = self.config.safe_collect;
        let piles: Vec<PileId> = self.table.pile_ids().collect();
        let mut moved = false;
        for pile in piles {
            moved |= behavior::collect(&mut self.table, self.script.as_ref(), pile, safe);
        }
        moved
    }

    // === Undo ===

    /// Record the board as the newest undo entry.
    ///
    /// Every commit already pushes; hosts only need this after arranging
    /// the board through [`table_mut`](Self::table_mut).
    pub fn undo_push(&mut self) {
        self.undo_stack
            .push_back(Snapshot::capture(&self.table, self.bookmark));
        self.update_status();
    }

    /// Latest snapshot.
    #[must_use]
    pub fn undo_peek(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Whole undo history, oldest first. Cloning it is cheap.
    #[must_use]
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    /// Replace the history, as when resuming a saved game, and restore its
    /// latest snapshot along with the bookmark it was taken under.
    ///
    /// The stack must fit the current variant; on error nothing changes.
    pub fn set_undo_stack(&mut self, stack: UndoStack) -> Result<(), EngineError> {
        let Some(last) = stack.last() else {
            return Err(EngineError::EmptyUndoStack);
        };
        self.restore(last)?;
        self.bookmark = last.bookmark.min(stack.len());
        self.undo_stack = stack;
        self.update_status();
        Ok(())
    }

    /// Take back the last committed move.
    ///
    /// The freshly dealt board is never undone; trying toasts instead.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        if self.undo_stack.len() < 2 {
            self.ctx.ui.toast("Nothing to undo");
            return Ok(());
        }
        let previous = self.undo_stack[self.undo_stack.len() - 2].clone();
        self.restore(&previous)?;
        self.undo_stack.pop_back();
        self.bookmark = self.bookmark.min(self.undo_stack.len());
        self.ctx.ui.hide_fab();
        self.update_status();
        Ok(())
    }

    /// Go back to the freshly dealt board.
    pub fn restart_deal(&mut self) -> Result<(), EngineError> {
        let Some(first) = self.undo_stack.front().cloned() else {
            return Err(EngineError::EmptyUndoStack);
        };
        self.restore(&first)?;
        self.undo_stack.truncate(1);
        self.bookmark = 0;
        self.ctx.ui.hide_fab();
        self.update_status();
        Ok(())
    }

    /// Bookmark the current position. Snapshots pushed from now on carry
    /// the bookmark; the history already recorded is left alone.
    pub fn save_position(&mut self) {
        self.bookmark = self.undo_stack.len();
        self.ctx.ui.toast("Position bookmarked");
    }

    /// Return to the bookmarked position, dropping later moves.
    pub fn load_position(&mut self) -> Result<(), EngineError> {
        if self.bookmark == 0 || self.bookmark > self.undo_stack.len() {
            self.ctx.ui.toast("No bookmark");
            return Ok(());
        }
        let saved = self.undo_stack[self.bookmark - 1].clone();
        self.restore(&saved)?;
        self.undo_stack.truncate(self.bookmark);
        self.ctx.ui.hide_fab();
        self.update_status();
        Ok(())
    }

    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), EngineError> {
        snapshot.restore(&mut self.table)?;
        self.tail.clear();
        self.bound = None;
        self.table.clear_targets();
        Ok(())
    }

    /// Shuffle state, for persisting alongside the undo history so that
    /// the next deal repeats after a restart.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub fn set_rng_state(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Depth saved by [`save_position`](Self::save_position); 0 if none.
    #[must_use]
    pub fn bookmark(&self) -> usize {
        self.bookmark
    }

    // === Queries ===

    /// Committed moves since the deal.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.undo_stack.len().saturating_sub(1)
    }

    /// Fingerprint of per-pile card counts, in pile order.
    #[must_use]
    pub fn crc(&self) -> u32 {
        self.table.crc()
    }

    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        self.script.percent_complete(&self.table)
    }

    /// True if every pile is well formed for its kind.
    #[must_use]
    pub fn conformant(&self) -> bool {
        self.table
            .pile_ids()
            .all(|p| behavior::conformant(&self.table, self.script.as_ref(), p))
    }

    /// True if no pile needs further play.
    #[must_use]
    pub fn complete(&self) -> bool {
        self.table
            .pile_ids()
            .all(|p| behavior::complete(&self.table, p))
    }

    /// Piles other than its origin that would take `tail`. None for a tail
    /// holding a card that is not on this table.
    #[must_use]
    pub fn find_homes_for_tail(&self, tail: &[CardRef]) -> Vec<PileId> {
        if !tail.iter().all(|&c| self.knows_card(c)) {
            return Vec::new();
        }
        behavior::find_homes_for_tail(&self.table, self.script.as_ref(), tail)
    }

    /// Every legal move on the board.
    #[must_use]
    pub fn movable_tails(&self) -> Vec<MovableTail> {
        self.table
            .pile_ids()
            .flat_map(|p| behavior::movable_tails(&self.table, self.script.as_ref(), p))
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        let stock = self
            .table
            .stock()
            .filter(|&s| !self.table.pile(s).is_hidden())
            .map(|s| self.table.pile(s).len());
        Status {
            stock,
            waste: self.table.waste().map(|w| self.table.pile(w).len()),
            moves: self.moves(),
            percent: self.percent_complete(),
        }
    }

    /// False, with an error logged, for a handle from another layout.
    pub(super) fn knows_card(&self, card: CardRef) -> bool {
        let known = self.table.get_card(card).is_some();
        if !known {
            tracing::error!(%card, variant = %self.config.variant, "card is not on this table");
        }
        known
    }

    pub(super) fn knows_pile(&self, pile: PileId) -> bool {
        let known = self.table.get_pile(pile).is_some();
        if !known {
            tracing::error!(%pile, variant = %self.config.variant, "pile is not on this table");
        }
        known
    }

    fn update_status(&mut self) {
        let status = self.status();
        self.ctx.ui.update_status(&status);
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Direct table access. Changes made here bypass the commit rule and
    /// the undo history.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    #[must_use]
    pub fn script(&self) -> &dyn Variant {
        self.script.as_ref()
    }

    /// Name of the variant being played.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.config.variant
    }

    #[must_use]
    pub fn config(&self) -> &BaizeConfig {
        &self.config
    }

    #[must_use]
    pub fn ctx(&self) -> &GameContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }
}

impl std::fmt::Debug for Baize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Baize")
            .field("variant", &self.config.variant)
            .field("moves", &self.moves())
            .field("bound", &self.bound)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}
