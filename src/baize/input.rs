//! Input state machine.
//!
//! The host turns pointer activity into strokes and forwards each stroke
//! event to [`Baize::notify`]. A stroke starts on exactly one object and
//! stays bound to it until it stops, is cancelled or turns out to be a
//! tap:
//!
//! | Bound to  | Move                         | Stop                    | Tap                  |
//! |-----------|------------------------------|-------------------------|----------------------|
//! | Overlay   | overlay drags                | overlay stops           | ignored              |
//! | Card      | tail follows, target marked  | drop the tail           | variant `tail_tapped`|
//! | Pile      | ignored                      | ignored                 | variant `pile_tapped`|
//! | Board     | board pans                   | pan ends                | host notified        |
//!
//! Start tries the overlay, then card, then pile, then the bare board.
//! Dropping a tail and tapping share one commit rule: the board CRC is
//! taken before and after, and only a change counts as a move.

use serde::{Deserialize, Serialize};

use super::Baize;
use crate::core::{CardRef, EngineError, Legality, MoveError, PileId, Point};
use crate::piles::behavior;
use crate::piles::Tail;

/// Stroke event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    Start,
    Move,
    Stop,
    Cancel,
    Tap,
}

impl StrokeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrokeKind::Start => "start",
            StrokeKind::Move => "move",
            StrokeKind::Stop => "stop",
            StrokeKind::Cancel => "cancel",
            StrokeKind::Tap => "tap",
        }
    }
}

/// One event of a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeEvent {
    pub kind: StrokeKind,
    /// Pointer position in screen coordinates.
    pub position: Point,
    /// Distance moved since the stroke started.
    pub offset: Point,
}

impl StrokeEvent {
    #[must_use]
    pub const fn new(kind: StrokeKind, position: Point, offset: Point) -> Self {
        Self {
            kind,
            position,
            offset,
        }
    }

    #[must_use]
    pub const fn start(position: Point) -> Self {
        Self::new(StrokeKind::Start, position, Point::new(0, 0))
    }

    #[must_use]
    pub const fn moved(position: Point, offset: Point) -> Self {
        Self::new(StrokeKind::Move, position, offset)
    }

    #[must_use]
    pub const fn stop(position: Point, offset: Point) -> Self {
        Self::new(StrokeKind::Stop, position, offset)
    }

    #[must_use]
    pub const fn cancel(position: Point) -> Self {
        Self::new(StrokeKind::Cancel, position, Point::new(0, 0))
    }

    #[must_use]
    pub const fn tap(position: Point) -> Self {
        Self::new(StrokeKind::Tap, position, Point::new(0, 0))
    }
}

/// What the current stroke is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Overlay,
    /// Head of the dragged tail.
    Card(CardRef),
    Pile(PileId),
    Board,
}

impl Baize {
    /// Feed one stroke event to the board.
    ///
    /// Move, stop, cancel and tap need a bound object from an earlier
    /// start; without one the event is refused with
    /// [`EngineError::NoBoundObject`].
    pub fn notify(&mut self, event: StrokeEvent) -> Result<(), EngineError> {
        if event.kind == StrokeKind::Start {
            self.input_start(event.position);
            return Ok(());
        }
        let Some(bound) = self.bound.take() else {
            tracing::error!(event = event.kind.name(), "stroke event with no bound object");
            return Err(EngineError::NoBoundObject(event.kind.name()));
        };
        match event.kind {
            StrokeKind::Move => {
                self.input_move(bound, event.offset);
                self.bound = Some(bound);
            }
            StrokeKind::Stop => self.input_stop(bound),
            StrokeKind::Cancel => self.input_cancel(bound),
            StrokeKind::Tap => self.input_tap(bound, event.position),
            StrokeKind::Start => unreachable!("start handled above"),
        }
        Ok(())
    }

    /// Object the current stroke is bound to.
    #[must_use]
    pub fn bound(&self) -> Option<Bound> {
        self.bound
    }

    fn input_start(&mut self, position: Point) {
        if let Some(previous) = self.bound.take() {
            tracing::warn!(?previous, "stroke started while another was bound");
            self.input_cancel(previous);
        }

        if self.ctx.ui.overlay_at(position) {
            if self.ctx.ui.overlay_start_drag(position) {
                self.bound = Some(Bound::Overlay);
            }
            return;
        }

        let pt = position.sub(self.drag_offset);
        if let Some(card) = self.table.find_card_at(pt) {
            self.start_tail_drag(card);
            self.bound = Some(Bound::Card(card));
        } else if let Some(pile) = self.table.find_pile_at(pt) {
            self.bound = Some(Bound::Pile(pile));
        } else {
            self.drag_start = self.drag_offset;
            self.bound = Some(Bound::Board);
        }
    }

    fn input_move(&mut self, bound: Bound, offset: Point) {
        self.table.clear_targets();
        match bound {
            Bound::Overlay => self.ctx.ui.overlay_drag_by(offset),
            Bound::Card(card) => {
                self.drag_tail_by(offset);
                if !self.tail.is_empty() {
                    if let Some(target) = self.table.largest_intersection(card) {
                        self.table.set_target(target);
                    }
                }
            }
            Bound::Pile(_) => {}
            Bound::Board => self.drag_by(offset),
        }
    }

    fn input_stop(&mut self, bound: Bound) {
        self.table.clear_targets();
        match bound {
            Bound::Overlay => self.ctx.ui.overlay_stop_drag(),
            Bound::Card(card) => self.drop_tail(card),
            Bound::Pile(_) | Bound::Board => {}
        }
    }

    fn input_cancel(&mut self, bound: Bound) {
        self.table.clear_targets();
        match bound {
            Bound::Overlay => self.ctx.ui.overlay_stop_drag(),
            Bound::Card(_) => self.cancel_tail_drag(),
            Bound::Pile(_) | Bound::Board => {}
        }
    }

    fn input_tap(&mut self, bound: Bound, position: Point) {
        match bound {
            Bound::Card(_) => {
                let tail = self.take_tail();
                self.tap_tail(&tail);
            }
            Bound::Pile(pile) => self.tap_pile(pile),
            Bound::Board => self.ctx.ui.board_tapped(position),
            Bound::Overlay => {}
        }
    }

    // === Tails ===

    /// Cards that grabbing `card` would lift.
    #[must_use]
    pub fn make_tail(&self, card: CardRef) -> Tail {
        if !self.knows_card(card) {
            return Tail::new();
        }
        behavior::make_tail(&self.table, card)
    }

    /// The tail being dragged.
    #[must_use]
    pub fn tail(&self) -> &[CardRef] {
        &self.tail
    }

    fn start_tail_drag(&mut self, card: CardRef) {
        self.tail = self.make_tail(card);
        if self.tail.is_empty() {
            tracing::warn!(%card, "card cannot head a tail");
            return;
        }
        tracing::debug!(%card, len = self.tail.len(), "tail formed");
        for &c in &self.tail {
            self.table.card_mut(c).start_drag();
        }
    }

    fn drag_tail_by(&mut self, offset: Point) {
        for &c in &self.tail {
            self.table.card_mut(c).drag_by(offset);
        }
    }

    /// End the drag and hand back the tail, cards left where they are.
    fn take_tail(&mut self) -> Tail {
        let tail = std::mem::take(&mut self.tail);
        for &c in &tail {
            self.table.card_mut(c).stop_drag();
        }
        tail
    }

    /// Send the tail back to where the drag started.
    fn cancel_tail_drag(&mut self) {
        let tail = std::mem::take(&mut self.tail);
        for &c in &tail {
            self.table.card_mut(c).cancel_drag();
        }
    }

    fn drop_tail(&mut self, head: CardRef) {
        if self.tail.is_empty() || !self.table.card(head).was_dragged() {
            tracing::warn!(%head, "stroke stopped without a drag");
            self.cancel_tail_drag();
            return;
        }
        let Some(dst) = self.table.largest_intersection(head) else {
            tracing::debug!(%head, "tail dropped over nothing");
            self.cancel_tail_drag();
            return;
        };
        let tail = self.tail.clone();
        match self.check_move(&tail, dst) {
            Ok(true) => {
                self.take_tail();
                self.commit_move(head, dst, tail.len());
            }
            Ok(false) => self.cancel_tail_drag(),
            Err(err) => {
                self.toast_refusal(&err);
                self.cancel_tail_drag();
            }
        }
    }

    /// `Ok(false)` when the tail would go back where it came from.
    fn check_move(&self, tail: &[CardRef], dst: PileId) -> Result<bool, MoveError> {
        let Some(&head) = tail.first() else {
            return Err(MoveError::new("There are no cards to move"));
        };
        let src = self.table.owner(head);
        behavior::can_move_tail(&self.table, self.script.as_ref(), tail)?;
        if src == dst {
            return Ok(false);
        }
        behavior::can_accept_tail(&self.table, self.script.as_ref(), dst, tail)?;
        Ok(true)
    }

    /// Move the tail and commit it if the board changed.
    fn commit_move(&mut self, head: CardRef, dst: PileId, len: usize) -> bool {
        let crc = self.crc();
        let src = self.table.owner(head);
        if len == 1 {
            self.table.move_card(src, dst);
        } else {
            self.table.move_tail(head, dst);
        }
        self.commit_if_changed(crc, false)
    }

    /// Move `head` and the cards above it to `dst`, as if dragged there.
    ///
    /// Returns `Ok(true)` if the move was committed, `Ok(false)` if it
    /// changed nothing (for instance a tail put back on its own pile).
    /// Refusals are returned, not toasted. Handles that are not on this
    /// table are logged and move nothing.
    pub fn try_move(&mut self, head: CardRef, dst: PileId) -> Result<bool, MoveError> {
        if !self.knows_card(head) || !self.knows_pile(dst) {
            return Ok(false);
        }
        let tail = self.make_tail(head);
        if tail.is_empty() {
            return Err(if self.table.card(head).prone() {
                MoveError::new("Cannot move a face down card")
            } else {
                MoveError::new("Can only move the top card")
            });
        }
        if !self.check_move(&tail, dst)? {
            tracing::debug!(%head, "tail put back on its own pile");
            return Ok(false);
        }
        Ok(self.commit_move(head, dst, tail.len()))
    }

    // === Taps ===

    /// Tap `card`, as if the player tapped it on the board.
    pub fn tap_card(&mut self, card: CardRef) {
        let tail = self.make_tail(card);
        self.tap_tail(&tail);
    }

    fn tap_tail(&mut self, tail: &[CardRef]) {
        if tail.is_empty() {
            return;
        }
        let crc = self.crc();
        let result = self.script.tail_tapped(&mut self.table, tail);
        self.after_tap(crc, result);
    }

    /// Tap `pile` itself, as when tapping an empty Stock to recycle.
    pub fn tap_pile(&mut self, pile: PileId) {
        if !self.knows_pile(pile) {
            return;
        }
        let crc = self.crc();
        let result = self.script.pile_tapped(&mut self.table, pile);
        self.after_tap(crc, result);
    }

    fn after_tap(&mut self, crc: u32, result: Legality) {
        if let Err(err) = result {
            self.toast_refusal(&err);
        }
        self.commit_if_changed(crc, true);
    }

    pub(super) fn toast_refusal(&mut self, err: &MoveError) {
        if err.reason().is_empty() {
            tracing::error!("move refused without a reason");
            return;
        }
        tracing::debug!(reason = err.reason(), "move refused");
        self.ctx.ui.toast(err.reason());
    }

    // === Board panning ===

    /// How far the board is panned; never positive.
    #[must_use]
    pub fn drag_offset(&self) -> Point {
        self.drag_offset
    }

    fn drag_by(&mut self, offset: Point) {
        let target = self.drag_start.add(offset);
        self.drag_offset = Point::new(target.x.min(0), target.y.min(0));
    }
}
