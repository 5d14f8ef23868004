//! Everything a board needs from outside: the variant registry and the
//! three collaborators.
//!
//! A [`GameContext`] is handed to [`Baize::new`](crate::baize::Baize::new)
//! and owned by the board from then on. The default context knows every
//! built-in variant and ignores all output.

pub mod collaborators;
pub mod recorder;
pub mod statistics;

pub use collaborators::{
    Cue, Fab, NullSound, NullStatistics, NullUi, SoundPlayer, Statistics, Status, Ui,
};
pub use recorder::Recorder;
pub use statistics::{TallyStatistics, VariantStats};

use crate::variants::VariantRegistry;

/// Registry and collaborators for one board.
pub struct GameContext {
    pub registry: VariantRegistry,
    pub ui: Box<dyn Ui>,
    pub sound: Box<dyn SoundPlayer>,
    pub stats: Box<dyn Statistics>,
}

impl GameContext {
    #[must_use]
    pub fn new(
        registry: VariantRegistry,
        ui: Box<dyn Ui>,
        sound: Box<dyn SoundPlayer>,
        stats: Box<dyn Statistics>,
    ) -> Self {
        Self {
            registry,
            ui,
            sound,
            stats,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: VariantRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_ui(mut self, ui: impl Ui + 'static) -> Self {
        self.ui = Box::new(ui);
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl SoundPlayer + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    #[must_use]
    pub fn with_statistics(mut self, stats: impl Statistics + 'static) -> Self {
        self.stats = Box::new(stats);
        self
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(
            VariantRegistry::builtin(),
            Box::new(NullUi),
            Box::new(NullSound),
            Box::new(NullStatistics),
        )
    }
}

impl std::fmt::Debug for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameContext")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
