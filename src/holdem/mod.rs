/// Scoring and ranking hole cards against a board.
mod showdown;
/// Export the ranker and the default config shortcuts.
pub use self::showdown::{
    BOARD_CARDS, HOLE_CARDS, HoldemRanker, best_hand_label, format_cards, rank_hand_scores,
    rank_hands, score_hands,
};

/// Dealing random tables for demos.
mod deal;
/// Export `Table`, `deal_table` and `deal_missing`
pub use self::deal::{Table, deal_missing, deal_table};
