//! poker_rank ranks Texas Hold'em hole cards against a shared
//! five card board.
//!
//! Every player gets a `FullScore`: the best result of each of the
//! nine hand categories over their 7 cards, laid out strongest
//! category first. Comparing two full scores compares the hands,
//! and sorting them ranks the table.
//!
//! ```
//! use poker_rank::core::parse_cards;
//! use poker_rank::holdem::{best_hand_label, rank_hands, score_hands};
//!
//! let board = parse_cards("5s 2s 4s 7c 8d").unwrap();
//! let hands = vec![
//!     parse_cards("7h Tc").unwrap(),
//!     parse_cards("6s Qd").unwrap(),
//!     parse_cards("2d 5d").unwrap(),
//! ];
//!
//! let scores = score_hands(&hands, &board).unwrap();
//! assert_eq!(Some("Straight"), best_hand_label(&scores[1]));
//! assert_eq!(vec![2, 0, 1], rank_hands(&hands, &board).unwrap());
//! ```

/// Everything in core works on any set of cards.
pub mod core;
/// Hold'em hands against a board.
pub mod holdem;
