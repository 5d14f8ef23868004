//! Board configuration.
//!
//! The host owns the player's preferences and hands the relevant subset to
//! the board as a `BaizeConfig`. The engine never reads or writes
//! preference files itself.

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;

/// Name of the variant played when nothing else is configured.
pub const DEFAULT_VARIANT: &str = "Easy";

/// Complete board configuration.
///
/// ```
/// use rust_solitaire::core::BaizeConfig;
///
/// let config = BaizeConfig::new("Klondike")
///     .with_seed(7)
///     .mirrored()
///     .with_safe_collect();
///
/// assert_eq!(config.variant, "Klondike");
/// assert_eq!(config.seed, Some(7));
/// assert!(config.mirror_baize);
/// assert!(config.safe_collect);
/// assert!(config.power_moves);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaizeConfig {
    /// Variant started by `new_variant` when no name is given.
    pub variant: String,

    /// Seed for deal shuffling. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Reflect the layout left to right.
    pub mirror_baize: bool,

    /// Only auto-collect cards no other pile could still need.
    pub safe_collect: bool,

    /// Allow multi-card moves through free cells and empty columns.
    pub power_moves: bool,

    /// Abstract board dimensions.
    pub geometry: Geometry,
}

impl Default for BaizeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANT)
    }
}

impl BaizeConfig {
    /// Create a configuration for the named variant.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            seed: None,
            mirror_baize: false,
            safe_collect: false,
            power_moves: true,
            geometry: Geometry::default(),
        }
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mirror the layout.
    #[must_use]
    pub fn mirrored(mut self) -> Self {
        self.mirror_baize = true;
        self
    }

    /// Turn on safe collect.
    #[must_use]
    pub fn with_safe_collect(mut self) -> Self {
        self.safe_collect = true;
        self
    }

    /// Turn off power moves.
    #[must_use]
    pub fn without_power_moves(mut self) -> Self {
        self.power_moves = false;
        self
    }

    /// Replace the board geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}
