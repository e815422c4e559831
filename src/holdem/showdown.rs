use tracing::{event, trace_span};

use crate::core::{Card, FullScore, PokerRankError, RankConfig, Scorer, rank_scores};

/// Cards every player holds.
pub const HOLE_CARDS: usize = 2;
/// Shared community cards.
pub const BOARD_CARDS: usize = 5;

/// Scores and ranks Hold'em hands against a full board.
///
/// ```
/// use poker_rank::core::parse_cards;
/// use poker_rank::holdem::HoldemRanker;
///
/// let board = parse_cards("Ks Qs 4d 4c 9h").unwrap();
/// let hands = vec![parse_cards("As Jh").unwrap(), parse_cards("4s 2c").unwrap()];
///
/// let ranker = HoldemRanker::default();
/// assert_eq!(vec![1, 0], ranker.rank_hands(&hands, &board).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldemRanker {
    scorer: Scorer,
}

impl HoldemRanker {
    pub fn new(config: RankConfig) -> Self {
        Self {
            scorer: Scorer::new(config),
        }
    }

    pub fn config(&self) -> &RankConfig {
        self.scorer.config()
    }

    /// Score one player's 2 hole cards together with the board.
    pub fn score_hand(&self, hand: &[Card], board: &[Card]) -> Result<FullScore, PokerRankError> {
        check_board(board)?;
        self.score_checked_board(hand, board)
    }

    /// One full score per hand, aligned by index.
    pub fn score_hands<H: AsRef<[Card]>>(
        &self,
        hands: &[H],
        board: &[Card],
    ) -> Result<Vec<FullScore>, PokerRankError> {
        check_board(board)?;
        let span = trace_span!("score_hands", num_hands = hands.len());
        let _enter = span.enter();

        hands
            .iter()
            .map(|hand| self.score_checked_board(hand.as_ref(), board))
            .collect()
    }

    /// One 0 based rank per score, 0 is the strongest.
    pub fn rank_scores(&self, scores: &[FullScore]) -> Vec<usize> {
        rank_scores(scores, self.config().ties)
    }

    /// `score_hands` then `rank_scores`.
    pub fn rank_hands<H: AsRef<[Card]>>(
        &self,
        hands: &[H],
        board: &[Card],
    ) -> Result<Vec<usize>, PokerRankError> {
        let scores = self.score_hands(hands, board)?;
        Ok(self.rank_scores(&scores))
    }

    fn score_checked_board(&self, hand: &[Card], board: &[Card]) -> Result<FullScore, PokerRankError> {
        if hand.len() != HOLE_CARDS {
            return Err(PokerRankError::HandSize(hand.len()));
        }

        let combined: Vec<Card> = board.iter().chain(hand).copied().collect();
        let score = self.scorer.score_cards(&combined)?;
        event!(
            tracing::Level::DEBUG,
            hand = %format_cards(hand),
            label = ?score.label(),
            "Scored hand"
        );
        Ok(score)
    }
}

fn check_board(board: &[Card]) -> Result<(), PokerRankError> {
    if board.len() == BOARD_CARDS {
        Ok(())
    } else {
        Err(PokerRankError::BoardSize(board.len()))
    }
}

/// Space separated cards, e.g. `"7h Tc"`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score hands with the default config.
pub fn score_hands<H: AsRef<[Card]>>(
    hands: &[H],
    board: &[Card],
) -> Result<Vec<FullScore>, PokerRankError> {
    HoldemRanker::default().score_hands(hands, board)
}

/// Rank scores with the default (positional) tie rule.
pub fn rank_hand_scores(scores: &[FullScore]) -> Vec<usize> {
    HoldemRanker::default().rank_scores(scores)
}

/// Score and rank hands with the default config.
pub fn rank_hands<H: AsRef<[Card]>>(
    hands: &[H],
    board: &[Card],
) -> Result<Vec<usize>, PokerRankError> {
    HoldemRanker::default().rank_hands(hands, board)
}

/// Name of the strongest category in a score, `None` when
/// nothing was met.
pub fn best_hand_label(score: &FullScore) -> Option<&'static str> {
    score.label()
}
