//! Collaborator traits.
//!
//! The engine never draws, plays audio or keeps score itself. It reports
//! to three collaborators supplied by the host:
//!
//! - [`Ui`]: toasts, the status bar, the floating action button, and any
//!   overlay (drawer, menu) that gets first refusal on input
//! - [`SoundPlayer`]: fire-and-forget cues
//! - [`Statistics`]: won and lost games
//!
//! Every trait is implemented for `Rc<RefCell<T>>`, so a host (or a test)
//! can keep a handle on a collaborator it gave to the board.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// What the status bar shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Cards in the Stock; `None` when the Stock is hidden.
    pub stock: Option<usize>,
    /// Cards in the Waste; `None` when there is no Waste.
    pub waste: Option<usize>,
    /// Committed moves since the deal.
    pub moves: usize,
    pub percent: u8,
}

/// Floating action button icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fab {
    /// Game won: offer a new deal.
    Star,
    /// Every pile conformant: offer to collect everything.
    DoneAll,
}

/// Sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Fan,
    Slide,
    Complete,
}

impl Cue {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Cue::Fan => "Fan",
            Cue::Slide => "Slide",
            Cue::Complete => "Complete",
        }
    }
}

/// User interface collaborator.
pub trait Ui {
    /// Show a short message.
    fn toast(&mut self, message: &str);

    fn update_status(&mut self, status: &Status);

    fn show_fab(&mut self, fab: Fab);

    fn hide_fab(&mut self);

    fn set_title(&mut self, _title: &str) {}

    /// True if an overlay sits under `pt`; overlays see input before cards.
    fn overlay_at(&self, _pt: Point) -> bool {
        false
    }

    /// Start dragging the overlay under `pt`. `false` cancels the stroke.
    fn overlay_start_drag(&mut self, _pt: Point) -> bool {
        false
    }

    /// Cumulative offset since the overlay drag started.
    fn overlay_drag_by(&mut self, _offset: Point) {}

    fn overlay_stop_drag(&mut self) {}

    /// The bare board was tapped, e.g. to close an open drawer.
    fn board_tapped(&mut self, _pt: Point) {}
}

/// Sound collaborator.
pub trait SoundPlayer {
    fn play(&mut self, cue: Cue);
}

/// Statistics collaborator.
pub trait Statistics {
    fn record_won_game(&mut self, variant: &str);

    /// `percent` is how far the abandoned game got.
    fn record_lost_game(&mut self, variant: &str, percent: u8);

    /// Message to greet a new deal with.
    fn welcome_toast(&self, _variant: &str) -> Option<String> {
        None
    }

    /// Message to congratulate a win with.
    fn won_toast(&self, _variant: &str) -> Option<String> {
        None
    }
}

// === Null collaborators ===

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullUi;

impl Ui for NullUi {
    fn toast(&mut self, _message: &str) {}
    fn update_status(&mut self, _status: &Status) {}
    fn show_fab(&mut self, _fab: Fab) {}
    fn hide_fab(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSound;

impl SoundPlayer for NullSound {
    fn play(&mut self, _cue: Cue) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullStatistics;

impl Statistics for NullStatistics {
    fn record_won_game(&mut self, _variant: &str) {}
    fn record_lost_game(&mut self, _variant: &str, _percent: u8) {}
}

// === Shared handles ===

impl<T: Ui + ?Sized> Ui for Rc<RefCell<T>> {
    fn toast(&mut self, message: &str) {
        self.borrow_mut().toast(message);
    }

    fn update_status(&mut self, status: &Status) {
        self.borrow_mut().update_status(status);
    }

    fn show_fab(&mut self, fab: Fab) {
        self.borrow_mut().show_fab(fab);
    }

    fn hide_fab(&mut self) {
        self.borrow_mut().hide_fab();
    }

    fn set_title(&mut self, title: &str) {
        self.borrow_mut().set_title(title);
    }

    fn overlay_at(&self, pt: Point) -> bool {
        self.borrow().overlay_at(pt)
    }

    fn overlay_start_drag(&mut self, pt: Point) -> bool {
        self.borrow_mut().overlay_start_drag(pt)
    }

    fn overlay_drag_by(&mut self, offset: Point) {
        self.borrow_mut().overlay_drag_by(offset);
    }

    fn overlay_stop_drag(&mut self) {
        self.borrow_mut().overlay_stop_drag();
    }

    fn board_tapped(&mut self, pt: Point) {
        self.borrow_mut().board_tapped(pt);
    }
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Rc<RefCell<T>> {
    fn play(&mut self, cue: Cue) {
        self.borrow_mut().play(cue);
    }
}

impl<T: Statistics + ?Sized> Statistics for Rc<RefCell<T>> {
    fn record_won_game(&mut self, variant: &str) {
        self.borrow_mut().record_won_game(variant);
    }

    fn record_lost_game(&mut self, variant: &str, percent: u8) {
        self.borrow_mut().record_lost_game(variant, percent);
    }

    fn welcome_toast(&self, variant: &str) -> Option<String> {
        self.borrow().welcome_toast(variant)
    }

    fn won_toast(&self, variant: &str) -> Option<String> {
        self.borrow().won_toast(variant)
    }
}
