#[cfg(feature = "serde")]
use super::PokerRankError;

/// Which 5 card windows of a value sorted hand get scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WindowStrategy {
    /// Only runs of 5 cards that sit next to each other once the
    /// cards are sorted, 3 windows for 7 cards. This can miss hands,
    /// e.g. a flush whose cards are spread out by value.
    #[default]
    Contiguous,
    /// Every 5 card subset, 21 windows for 7 cards.
    AllCombinations,
}

/// How an ace, which always has value 1, counts in straights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AceRule {
    /// The ace is only below the two. Ten to ace is not a straight.
    #[default]
    LowOnly,
    /// Ten to ace is also a straight and scores 14.
    LowOrHigh,
}

/// How players with identical scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieRule {
    /// Every player gets a distinct position in the descending sort.
    /// Among equal scores the player listed later gets the better position.
    #[default]
    Positional,
    /// Equal scores share a rank and the next distinct score skips
    /// ahead, e.g. `[0, 0, 2]`.
    Competition,
}

/// Knobs for scoring and ranking.
///
/// The default reproduces the reference behaviour: contiguous
/// windows, ace low, positional ranks and duplicate cards rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankConfig {
    pub windows: WindowStrategy,
    pub aces: AceRule,
    pub ties: TieRule,
    /// Skip the check for a card repeated in one player's cards.
    pub allow_duplicate_cards: bool,
}

impl RankConfig {
    pub fn with_windows(mut self, windows: WindowStrategy) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_aces(mut self, aces: AceRule) -> Self {
        self.aces = aces;
        self
    }

    pub fn with_ties(mut self, ties: TieRule) -> Self {
        self.ties = ties;
        self
    }

    pub fn with_duplicate_cards(mut self, allow: bool) -> Self {
        self.allow_duplicate_cards = allow;
        self
    }

    /// Read a config from JSON. Missing fields keep their defaults.
    ///
    /// ```
    /// use poker_rank::core::{RankConfig, TieRule, WindowStrategy};
    ///
    /// let config = RankConfig::from_json(r#"{"ties": "competition"}"#).unwrap();
    /// assert_eq!(TieRule::Competition, config.ties);
    /// assert_eq!(WindowStrategy::Contiguous, config.windows);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, PokerRankError> {
        serde_json::from_str(json).map_err(|e| PokerRankError::InvalidConfig(e.to_string()))
    }
}
