//! Per-variant win/loss tallies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::collaborators::Statistics;

/// Results for one variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantStats {
    pub won: u32,
    pub lost: u32,
    /// Positive while winning, negative while losing.
    pub current_streak: i32,
    pub best_streak: i32,
    pub worst_streak: i32,
    /// Best percent reached in a lost game.
    pub best_percent: u8,
}

impl VariantStats {
    #[must_use]
    pub fn played(&self) -> u32 {
        self.won + self.lost
    }

    /// Whole percent of games won.
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played() == 0 {
            0
        } else {
            self.won * 100 / self.played()
        }
    }

    fn record_won(&mut self) {
        self.won += 1;
        self.current_streak = self.current_streak.max(0) + 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    fn record_lost(&mut self, percent: u8) {
        self.lost += 1;
        self.current_streak = self.current_streak.min(0) - 1;
        self.worst_streak = self.worst_streak.min(self.current_streak);
        self.best_percent = self.best_percent.max(percent);
    }
}

/// In-memory [`Statistics`], serializable for the host to persist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyStatistics {
    variants: FxHashMap<String, VariantStats>,
}

impl TallyStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, variant: &str) -> Option<&VariantStats> {
        self.variants.get(variant)
    }

    /// Games played across all variants.
    #[must_use]
    pub fn total_played(&self) -> u32 {
        self.variants.values().map(VariantStats::played).sum()
    }
}

impl Statistics for TallyStatistics {
    fn record_won_game(&mut self, variant: &str) {
        self.variants.entry(variant.to_string()).or_default().record_won();
    }

    fn record_lost_game(&mut self, variant: &str, percent: u8) {
        self.variants
            .entry(variant.to_string())
            .or_default()
            .record_lost(percent);
    }

    fn welcome_toast(&self, variant: &str) -> Option<String> {
        match self.get(variant) {
            Some(s) if s.played() > 0 => Some(format!(
                "You have played {} {} times and won {}%",
                variant,
                s.played(),
                s.win_rate()
            )),
            _ => Some(format!("Good luck with your first game of {}", variant)),
        }
    }

    fn won_toast(&self, variant: &str) -> Option<String> {
        let s = self.get(variant)?;
        if s.current_streak > 1 {
            Some(format!("You won {} times in a row", s.current_streak))
        } else {
            Some(format!("You won! {} wins at {}", s.won, variant))
        }
    }
}
