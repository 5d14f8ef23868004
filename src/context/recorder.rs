//! A collaborator that writes everything down.
//!
//! `Recorder` implements both [`Ui`] and [`SoundPlayer`]. Hosts use it for
//! headless play and replays; tests use it to check what the board told
//! the player.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rust_solitaire::context::{Cue, GameContext, Recorder};
//!
//! let recorder = Rc::new(RefCell::new(Recorder::default()));
//! let ctx = GameContext::default()
//!     .with_ui(Rc::clone(&recorder))
//!     .with_sound(Rc::clone(&recorder));
//! # drop(ctx);
//! assert!(recorder.borrow().toasts.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::collaborators::{Cue, Fab, SoundPlayer, Status, Ui};

/// Everything a board reported, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recorder {
    pub toasts: Vec<String>,
    pub statuses: Vec<Status>,
    pub sounds: Vec<Cue>,
    pub titles: Vec<String>,
    /// Currently shown button.
    pub fab: Option<Fab>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_toast(&self) -> Option<&str> {
        self.toasts.last().map(String::as_str)
    }

    #[must_use]
    pub fn last_status(&self) -> Option<&Status> {
        self.statuses.last()
    }

    /// How often `cue` was played.
    #[must_use]
    pub fn count(&self, cue: Cue) -> usize {
        self.sounds.iter().filter(|&&c| c == cue).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Ui for Recorder {
    fn toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }

    fn update_status(&mut self, status: &Status) {
        self.statuses.push(*status);
    }

    fn show_fab(&mut self, fab: Fab) {
        self.fab = Some(fab);
    }

    fn hide_fab(&mut self) {
        self.fab = None;
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}

impl SoundPlayer for Recorder {
    fn play(&mut self, cue: Cue) {
        self.sounds.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut r = Recorder::new();
        r.toast("first");
        r.toast("second");
        r.play(Cue::Slide);
        r.play(Cue::Slide);
        r.play(Cue::Fan);

        assert_eq!(r.last_toast(), Some("second"));
        assert_eq!(r.count(Cue::Slide), 2);
        assert_eq!(r.count(Cue::Complete), 0);
    }

    #[test]
    fn test_fab_show_hide() {
        let mut r = Recorder::new();
        r.show_fab(Fab::DoneAll);
        assert_eq!(r.fab, Some(Fab::DoneAll));
        r.hide_fab();
        assert_eq!(r.fab, None);
    }

    #[test]
    fn test_clear() {
        let mut r = Recorder::new();
        r.update_status(&Status::default());
        r.set_title("Easy");
        r.clear();
        assert_eq!(r, Recorder::default());
    }
}
