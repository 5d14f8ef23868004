//! The board controller.
//!
//! [`Baize`] owns one game: the table of piles and cards, the variant
//! script, the undo history and the [`GameContext`](crate::context::GameContext)
//! it reports to. Hosts drive it two ways:
//!
//! - stroke events through [`Baize::notify`], the way a pointer would
//! - direct commands: [`Baize::try_move`], [`Baize::tap_card`],
//!   [`Baize::collect_all`], [`Baize::undo`], [`Baize::new_deal`] and so on
//!
//! ## Commit rule
//!
//! Every operation that might move cards takes the board CRC before and
//! after. Only a changed CRC counts as a move: it runs the variant's
//! `after_move`, pushes an undo snapshot, refreshes the status bar and
//! checks for a win. Anything else is absorbed silently.
//!
//! ```
//! use rust_solitaire::baize::Baize;
//! use rust_solitaire::context::GameContext;
//! use rust_solitaire::core::BaizeConfig;
//!
//! let mut baize = Baize::new(BaizeConfig::new("Klondike").with_seed(42), GameContext::default())?;
//! assert_eq!(baize.moves(), 0);
//!
//! let stock = baize.table().stock().expect("Klondike has a Stock");
//! let top = baize.table().peek(stock).expect("cards left to deal");
//! baize.tap_card(top);
//! assert_eq!(baize.moves(), 1);
//!
//! baize.undo()?;
//! assert_eq!(baize.moves(), 0);
//! # Ok::<(), rust_solitaire::core::EngineError>(())
//! ```

mod board;
mod input;

pub use board::Baize;
pub use input::{Bound, StrokeEvent, StrokeKind};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::cards::{CardId, Suit, ACE};
    use crate::context::{Cue, GameContext, Recorder, TallyStatistics};
    use crate::core::{BaizeConfig, CardRef, EngineError, PileId, Point};

    fn easy() -> Baize {
        Baize::new(BaizeConfig::new("Easy").with_seed(7), GameContext::default()).unwrap()
    }

    fn recorded(variant: &str) -> (Baize, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::new()));
        let ctx = GameContext::default()
            .with_ui(Rc::clone(&recorder))
            .with_sound(Rc::clone(&recorder));
        let baize = Baize::new(BaizeConfig::new(variant).with_seed(7), ctx).unwrap();
        (baize, recorder)
    }

    fn spade_ace(baize: &Baize) -> CardRef {
        baize
            .table()
            .find_card(CardId::new(0, Suit::Spade, ACE))
            .unwrap()
    }

    /// A point inside the card, in screen coordinates.
    fn grab_point(baize: &Baize, card: CardRef) -> Point {
        baize
            .table()
            .card(card)
            .pos()
            .add(Point::new(10, 10))
            .add(baize.drag_offset())
    }

    #[test]
    fn test_new_deals() {
        let baize = easy();
        assert_eq!(baize.variant(), "Easy");
        assert_eq!(baize.moves(), 0);
        assert_eq!(baize.undo_stack().len(), 1);
        assert_eq!(baize.table().card_count(), 52);
        assert!(baize.bound().is_none());
        assert!(baize.tail().is_empty());
    }

    #[test]
    fn test_new_unknown_variant() {
        let err = Baize::new(BaizeConfig::new("Pyramid"), GameContext::default()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownVariant(name) if name == "Pyramid"));
    }

    #[test]
    fn test_event_without_bound_object() {
        let mut baize = easy();
        let err = baize
            .notify(StrokeEvent::moved(Point::new(0, 0), Point::new(5, 5)))
            .unwrap_err();
        assert!(matches!(err, EngineError::NoBoundObject("move")));
        assert!(baize.notify(StrokeEvent::tap(Point::new(0, 0))).is_err());
    }

    #[test]
    fn test_board_pan_is_clamped() {
        let mut baize = easy();
        // Row 0 between the Waste and the Foundations is bare board
        let empty = Point::new(600, 100);
        baize.notify(StrokeEvent::start(empty)).unwrap();
        assert_eq!(baize.bound(), Some(Bound::Board));

        baize
            .notify(StrokeEvent::moved(empty, Point::new(-30, 20)))
            .unwrap();
        assert_eq!(baize.drag_offset(), Point::new(-30, 0));

        baize
            .notify(StrokeEvent::stop(empty, Point::new(-30, 20)))
            .unwrap();
        assert!(baize.bound().is_none());
        assert_eq!(baize.drag_offset(), Point::new(-30, 0));
    }

    #[test]
    fn test_tap_stock_commits() {
        let (mut baize, recorder) = recorded("Easy");
        let stock = baize.table().stock().unwrap();
        let waste = baize.table().waste().unwrap();
        let top = baize.table().peek(stock).unwrap();
        let at = grab_point(&baize, top);

        baize.notify(StrokeEvent::start(at)).unwrap();
        assert_eq!(baize.bound(), Some(Bound::Card(top)));
        baize.notify(StrokeEvent::tap(at)).unwrap();

        assert_eq!(baize.moves(), 1);
        assert_eq!(baize.table().peek(waste), Some(top));
        assert!(!baize.table().card(top).prone());
        assert_eq!(recorder.borrow().count(Cue::Slide), 1);
        assert_eq!(recorder.borrow().last_status().unwrap().moves, 1);
    }

    #[test]
    fn test_drag_to_foundation() {
        let mut baize = easy();
        let ace = spade_ace(&baize);
        let tableau = baize.table().tableaux()[0];
        baize.table_mut().relocate(ace, tableau);

        let foundation = baize.table().foundations()[0];
        let from = grab_point(&baize, ace);
        let offset = baize
            .table()
            .pile(foundation)
            .pos()
            .sub(baize.table().card(ace).pos());

        baize.notify(StrokeEvent::start(from)).unwrap();
        assert_eq!(baize.tail(), &[ace]);
        baize
            .notify(StrokeEvent::moved(from.add(offset), offset))
            .unwrap();
        assert!(baize.table().pile(foundation).is_target());

        baize
            .notify(StrokeEvent::stop(from.add(offset), offset))
            .unwrap();
        assert_eq!(baize.table().peek(foundation), Some(ace));
        assert_eq!(baize.moves(), 1);
        assert!(baize.tail().is_empty());
        assert!(!baize.table().pile(foundation).is_target());
        assert_eq!(
            baize.table().card(ace).pos(),
            baize.table().pile(foundation).pos()
        );
    }

    #[test]
    fn test_refused_drop_toasts_and_snaps_back() {
        let (mut baize, recorder) = recorded("Easy");
        let two = baize
            .table()
            .find_card(CardId::new(0, Suit::Spade, 2))
            .unwrap();
        let tableau = baize.table().tableaux()[0];
        baize.table_mut().relocate(two, tableau);
        let home = baize.table().card(two).pos();
        let crc = baize.crc();

        let foundation = baize.table().foundations()[0];
        let from = grab_point(&baize, two);
        let offset = baize.table().pile(foundation).pos().sub(home);
        baize.notify(StrokeEvent::start(from)).unwrap();
        baize
            .notify(StrokeEvent::moved(from.add(offset), offset))
            .unwrap();
        baize
            .notify(StrokeEvent::stop(from.add(offset), offset))
            .unwrap();

        assert_eq!(
            recorder.borrow().last_toast(),
            Some("Empty Foundations can only accept an Ace")
        );
        assert_eq!(baize.table().card(two).pos(), home);
        assert_eq!(baize.table().card(two).owner(), Some(tableau));
        assert_eq!(baize.crc(), crc);
        assert_eq!(baize.moves(), 0);
    }

    #[test]
    fn test_drop_over_nothing_snaps_back() {
        let mut baize = easy();
        let tableau = baize.table().tableaux()[12];
        let top = baize.table().peek(tableau).unwrap();
        let home = baize.table().card(top).pos();
        let from = grab_point(&baize, top);
        let offset = Point::new(400, 600);

        baize.notify(StrokeEvent::start(from)).unwrap();
        baize
            .notify(StrokeEvent::moved(from.add(offset), offset))
            .unwrap();
        assert_ne!(baize.table().card(top).pos(), home);
        baize
            .notify(StrokeEvent::stop(from.add(offset), offset))
            .unwrap();

        assert_eq!(baize.table().card(top).pos(), home);
        assert_eq!(baize.moves(), 0);
    }

    #[test]
    fn test_cancel_unwinds_drag() {
        let mut baize = easy();
        let tableau = baize.table().tableaux()[3];
        let top = baize.table().peek(tableau).unwrap();
        let home = baize.table().card(top).pos();
        let from = grab_point(&baize, top);

        baize.notify(StrokeEvent::start(from)).unwrap();
        baize
            .notify(StrokeEvent::moved(from, Point::new(50, 50)))
            .unwrap();
        baize.notify(StrokeEvent::cancel(from)).unwrap();

        assert!(baize.bound().is_none());
        assert!(baize.tail().is_empty());
        assert_eq!(baize.table().card(top).pos(), home);
        assert!(!baize.table().card(top).is_dragging());
        assert!(baize.table().piles().iter().all(|p| !p.is_target()));
    }

    #[test]
    fn test_try_move_to_own_pile_is_not_committed() {
        let mut baize = easy();
        let tableau = baize.table().tableaux()[0];
        let top = baize.table().peek(tableau).unwrap();
        assert_eq!(baize.try_move(top, tableau), Ok(false));
        assert_eq!(baize.moves(), 0);
    }

    #[test]
    fn test_try_move_face_down_card() {
        let mut baize = easy();
        let tableau = baize.table().tableaux()[0];
        let bottom = baize.table().pile(tableau).card_at(0).unwrap();
        let other: PileId = baize.table().tableaux()[1];
        let err = baize.try_move(bottom, other).unwrap_err();
        assert_eq!(err.reason(), "Cannot move a face down card");
    }

    #[test]
    fn test_undo_and_nothing_to_undo() {
        let (mut baize, recorder) = recorded("Easy");
        baize.undo().unwrap();
        assert_eq!(recorder.borrow().last_toast(), Some("Nothing to undo"));

        let crc = baize.crc();
        let stock = baize.table().stock().unwrap();
        baize.tap_pile(stock);
        let top = baize.table().peek(stock).unwrap();
        baize.tap_card(top);
        assert_eq!(baize.moves(), 1);
        assert_ne!(baize.crc(), crc);

        baize.undo().unwrap();
        assert_eq!(baize.moves(), 0);
        assert_eq!(baize.crc(), crc);
        assert_eq!(baize.table().peek(stock), Some(top));
        assert!(baize.table().card(top).prone());
    }

    #[test]
    fn test_bookmark() {
        let mut baize = easy();
        let stock = baize.table().stock().unwrap();
        for _ in 0..2 {
            let top = baize.table().peek(stock).unwrap();
            baize.tap_card(top);
        }
        baize.save_position();
        assert_eq!(baize.bookmark(), 3);
        let saved = baize.crc();

        for _ in 0..3 {
            let top = baize.table().peek(stock).unwrap();
            baize.tap_card(top);
        }
        assert_eq!(baize.moves(), 5);

        baize.load_position().unwrap();
        assert_eq!(baize.moves(), 2);
        assert_eq!(baize.crc(), saved);
        assert_eq!(baize.bookmark(), 3);

        baize.restart_deal().unwrap();
        assert_eq!(baize.moves(), 0);
        assert_eq!(baize.bookmark(), 0);
    }

    #[test]
    fn test_bookmark_leaves_history_untouched() {
        let mut baize = easy();
        let stock = baize.table().stock().unwrap();
        for _ in 0..2 {
            let top = baize.table().peek(stock).unwrap();
            baize.tap_card(top);
        }
        let history = baize.undo_stack().clone();
        baize.save_position();
        assert_eq!(baize.undo_stack(), &history);
        assert_eq!(baize.undo_peek().unwrap().bookmark, 0);

        // Undoing past the bookmark pulls it back to the newest position
        baize.undo().unwrap();
        assert_eq!(baize.bookmark(), 2);
        baize.load_position().unwrap();
        assert_eq!(baize.moves(), 1);
    }

    #[test]
    fn test_undo_push_records_an_arranged_board() {
        let mut baize = easy();
        let crc = baize.crc();
        let t = baize.table().tableaux()[0];
        let ace = spade_ace(&baize);
        baize.table_mut().relocate(ace, t);
        baize.undo_push();
        assert_eq!(baize.moves(), 1);

        baize.undo().unwrap();
        assert_eq!(baize.moves(), 0);
        assert_eq!(baize.crc(), crc);
    }

    #[test]
    fn test_handles_from_an_earlier_layout_are_ignored() {
        let mut baize =
            Baize::new(BaizeConfig::new("Spider").with_seed(7), GameContext::default()).unwrap();
        let spider_card = CardRef::new(100);
        baize.new_variant("Easy").unwrap();
        let t = baize.table().tableaux()[0];

        baize.tap_card(spider_card);
        assert!(baize.make_tail(spider_card).is_empty());
        assert!(baize.find_homes_for_tail(&[spider_card]).is_empty());
        assert_eq!(baize.try_move(spider_card, t), Ok(false));
        assert_eq!(baize.moves(), 0);

        baize.new_variant("Klondike").unwrap();
        let gone = PileId::new(19);
        baize.tap_pile(gone);
        let top = baize.table().peek(baize.table().tableaux()[6]).unwrap();
        assert_eq!(baize.try_move(top, gone), Ok(false));
        assert_eq!(baize.moves(), 0);
    }

    #[test]
    fn test_new_deal_records_abandoned_game() {
        let stats = Rc::new(RefCell::new(TallyStatistics::new()));
        let ctx = GameContext::default().with_statistics(Rc::clone(&stats));
        let mut baize = Baize::new(BaizeConfig::new("Easy").with_seed(3), ctx).unwrap();

        // Untouched deals are not losses
        baize.new_deal();
        assert_eq!(stats.borrow().total_played(), 0);

        let stock = baize.table().stock().unwrap();
        let top = baize.table().peek(stock).unwrap();
        baize.tap_card(top);
        baize.new_deal();
        assert_eq!(stats.borrow().get("Easy").unwrap().lost, 1);
        assert_eq!(baize.moves(), 0);
        assert_eq!(baize.table().card_count(), 52);
    }

    #[test]
    fn test_new_variant() {
        let (mut baize, recorder) = recorded("Easy");
        baize.new_variant("Spider").unwrap();
        assert_eq!(baize.variant(), "Spider");
        assert_eq!(baize.table().card_count(), 104);
        assert_eq!(baize.table().discards().len(), 8);
        assert_eq!(recorder.borrow().titles.last().map(String::as_str), Some("Spider"));

        assert!(baize.new_variant("Golf").is_err());
        assert_eq!(baize.variant(), "Spider");
        assert_eq!(baize.table().card_count(), 104);
    }

    #[test]
    fn test_rng_state_repeats_next_deal() {
        let mut baize = easy();
        let state = baize.rng_state();
        baize.new_deal();
        let dealt = baize.undo_peek().cloned();

        baize.set_rng_state(&state);
        baize.new_deal();
        assert_eq!(baize.undo_peek().cloned(), dealt);
    }

    #[test]
    fn test_mirrored_layout() {
        let config = BaizeConfig::new("Easy").with_seed(7).mirrored();
        let baize = Baize::new(config, GameContext::default()).unwrap();
        let stock = baize.table().stock().unwrap();
        assert_eq!(baize.table().pile(stock).slot(), Point::new(12, 0));
    }

    #[test]
    fn test_status() {
        let baize = Baize::new(BaizeConfig::new("Freecell").with_seed(1), GameContext::default())
            .unwrap();
        let status = baize.status();
        assert_eq!(status.stock, None);
        assert_eq!(status.waste, None);
        assert_eq!(status.moves, 0);

        let easy = easy();
        let status = easy.status();
        assert_eq!(status.stock, Some(13));
        assert_eq!(status.waste, Some(0));
    }
}
