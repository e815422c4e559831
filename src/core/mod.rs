//! This is the core module. It exports the parts that
//! work on any set of cards, not only Hold'em hands.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, Suit and the card string parser.
pub use self::card::{Card, Suit, Value, parse_cards};

/// Error type shared by the whole crate.
mod error;
pub use self::error::PokerRankError;

/// Bitset of cards, used to catch repeated cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Flattened deck
mod flat_deck;
pub use self::flat_deck::FlatDeck;

/// We want to be able to iterate over five card subsets.
mod card_iter;
pub use self::card_iter::CardIter;

/// Knobs for windows, aces and ties.
mod config;
pub use self::config::{AceRule, RankConfig, TieRule, WindowStrategy};

/// Grouping cards by value and matching group shapes.
mod group;
pub use self::group::{ValueGroup, match_pattern, sorted_groups, value_groups};

/// Category and full score vectors.
mod score;
pub use self::score::{CategoryScore, FULL_SCORE_LEN, FullScore, MAX_ARITY, compare_prefix};

/// The nine hand categories and their precedence.
mod category;
pub use self::category::{Category, PRECEDENCE};

/// Window scoring and full score composition.
mod scorer;
pub use self::scorer::{HAND_SIZE, Scorer, score_category, windows};

/// Ordering players by score.
mod ranking;
pub use self::ranking::{rank_scores, sorted_descending};
