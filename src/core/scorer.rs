use std::array;

use tracing::{event, trace_span};

use super::{
    AceRule, Card, CardBitSet, CardIter, Category, CategoryScore, FullScore, PRECEDENCE,
    PokerRankError, RankConfig, ValueGroup, WindowStrategy, compare_prefix, sorted_groups,
};

/// Number of cards in a scored window.
pub const HAND_SIZE: usize = 5;

/// The candidate 5 card windows of value sorted cards.
///
/// ```
/// use poker_rank::core::{parse_cards, windows, WindowStrategy};
///
/// let cards = parse_cards("2c 3c 4c 5c 6c 6d 6h").unwrap();
/// assert_eq!(3, windows(&cards, WindowStrategy::Contiguous).len());
/// assert_eq!(21, windows(&cards, WindowStrategy::AllCombinations).len());
/// ```
pub fn windows(sorted: &[Card], strategy: WindowStrategy) -> Vec<[Card; HAND_SIZE]> {
    match strategy {
        WindowStrategy::Contiguous => sorted
            .windows(HAND_SIZE)
            .map(|w| array::from_fn(|i| w[i]))
            .collect(),
        WindowStrategy::AllCombinations => CardIter::new(sorted, HAND_SIZE)
            .map(|w| array::from_fn(|i| w[i]))
            .collect(),
    }
}

/// Score one category over several windows and keep the best.
///
/// `windows` holds each window's `sorted_groups`. The winner is the
/// lexicographically largest score, which is then reversed so the
/// most significant value comes first.
pub fn score_category(
    category: Category,
    windows: &[Vec<ValueGroup<'_>>],
    aces: AceRule,
) -> CategoryScore {
    windows
        .iter()
        .map(|groups| category.evaluate(groups, aces))
        .reduce(|best, next| {
            if compare_prefix(best.as_slice(), next.as_slice()).is_lt() {
                next
            } else {
                best
            }
        })
        .unwrap_or_else(|| CategoryScore::zero(category.arity()))
        .reversed()
}

/// Turns a set of cards into a `FullScore`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    config: RankConfig,
}

impl Scorer {
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Score at least 5 cards.
    ///
    /// The cards are sorted by value (keeping the input order of
    /// equal values), split into windows, and every category in
    /// `PRECEDENCE` keeps its best window.
    ///
    /// ```
    /// use poker_rank::core::{parse_cards, Category, Scorer};
    ///
    /// let scorer = Scorer::default();
    /// let score = scorer.score_cards(&parse_cards("7h 7d 7c 7s 2h").unwrap()).unwrap();
    ///
    /// assert_eq!(Some(Category::FourOfAKind), score.best_category());
    /// assert_eq!(&[7, 2], score.slice(Category::FourOfAKind));
    /// ```
    pub fn score_cards(&self, cards: &[Card]) -> Result<FullScore, PokerRankError> {
        if cards.len() < HAND_SIZE {
            return Err(PokerRankError::TooFewCards(cards.len()));
        }
        if !self.config.allow_duplicate_cards {
            if let Some(card) = CardBitSet::first_duplicate(cards) {
                return Err(PokerRankError::DuplicateCard(card));
            }
        }

        let span = trace_span!("score_cards", num_cards = cards.len());
        let _enter = span.enter();

        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| c.value);

        let windows = windows(&sorted, self.config.windows);
        let grouped: Vec<Vec<ValueGroup<'_>>> = windows.iter().map(|w| sorted_groups(w)).collect();

        let parts = PRECEDENCE.map(|category| {
            let best = score_category(category, &grouped, self.config.aces);
            event!(
                tracing::Level::TRACE,
                category = category.name(),
                score = ?best.as_slice(),
                "Best window"
            );
            best
        });

        Ok(FullScore::from_parts(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FULL_SCORE_LEN, parse_cards};

    fn score(cards: &str) -> FullScore {
        score_with(RankConfig::default(), cards)
    }

    fn score_with(config: RankConfig, cards: &str) -> FullScore {
        Scorer::new(config)
            .score_cards(&parse_cards(cards).unwrap())
            .unwrap()
    }

    fn full(values: &[(usize, &[u8])]) -> FullScore {
        let mut out = [0; FULL_SCORE_LEN];
        for (start, v) in values {
            out[*start..*start + v.len()].copy_from_slice(v);
        }
        FullScore::from(out)
    }

    #[test]
    fn test_contiguous_windows() {
        let cards = parse_cards("2c 3d 4h 5s 6c 7d 8h").unwrap();
        let windows = windows(&cards, WindowStrategy::Contiguous);
        assert_eq!(3, windows.len());
        assert_eq!(&cards[0..5], windows[0].as_slice());
        assert_eq!(&cards[1..6], windows[1].as_slice());
        assert_eq!(&cards[2..7], windows[2].as_slice());
    }

    #[test]
    fn test_five_cards_is_one_window() {
        let cards = parse_cards("2c 3d 4h 5s 6c").unwrap();
        assert_eq!(1, windows(&cards, WindowStrategy::Contiguous).len());
        assert_eq!(1, windows(&cards, WindowStrategy::AllCombinations).len());
    }

    #[test]
    fn test_score_category_picks_best_window() {
        let cards = parse_cards("2c 2d 5h 5s 5c 9c Kd").unwrap();
        let windows = windows(&cards, WindowStrategy::Contiguous);
        let grouped: Vec<Vec<ValueGroup<'_>>> = windows.iter().map(|w| sorted_groups(w)).collect();

        // [2 2 5 5 5] is the only full house window.
        let full_house = score_category(Category::FullHouse, &grouped, AceRule::LowOnly);
        assert_eq!(&[5, 2], full_house.as_slice());

        // [5 5 5 9 K] beats [2 5 5 5 9] as three of a kind.
        let trips = score_category(Category::ThreeOfAKind, &grouped, AceRule::LowOnly);
        assert_eq!(&[5, 13, 9], trips.as_slice());

        let quads = score_category(Category::FourOfAKind, &grouped, AceRule::LowOnly);
        assert!(!quads.is_met());
    }

    #[test]
    fn test_score_category_without_windows() {
        let none = score_category(Category::OnePair, &[], AceRule::LowOnly);
        assert_eq!(&[0, 0, 0, 0], none.as_slice());
    }

    #[test]
    fn test_four_of_a_kind_kicker_decides() {
        let low = score("7h 7d 7c 7s 2h");
        let high = score("7h 7d 7c 7s 3h");
        assert_eq!(full(&[(1, &[7, 2])]), low);
        assert_eq!(full(&[(1, &[7, 3])]), high);
        assert!(high > low);
    }

    #[test]
    fn test_single_categories() {
        assert_eq!(full(&[(3, &[5, 2])]), score("2c 2d 5h 5s 5c"));
        assert_eq!(full(&[(14, &[5, 2, 9])]), score("2c 2d 5h 5s 9c"));
        assert_eq!(full(&[(17, &[5, 9, 3, 2])]), score("2c 3d 5h 5s 9c"));
        assert_eq!(full(&[(11, &[2, 9, 5])]), score("2c 2d 2h 5s 9c"));
    }

    #[test]
    fn test_straight_is_also_high_card() {
        let straight = score("Ah 2d 3c 4s 5h");
        assert_eq!(full(&[(10, &[5]), (21, &[5, 4, 3, 2, 1])]), straight);
        assert_eq!(Some(Category::Straight), straight.best_category());
    }

    #[test]
    fn test_straight_flush_fills_three_slices() {
        let sf = score("4s 5s 6s 7s 8s");
        assert_eq!(
            full(&[
                (0, &[8]),
                (5, &[8, 7, 6, 5, 4]),
                (10, &[8]),
                (21, &[8, 7, 6, 5, 4])
            ]),
            sf
        );
        assert_eq!(Some("Straight Flush"), sf.label());
    }

    #[test]
    fn test_one_slice_without_five_distinct_values() {
        for cards in [
            "7h 7d 7c 7s 2h",
            "2c 2d 5h 5s 5c",
            "2c 2d 5h 5s 9c",
            "2c 3d 5h 5s 9c",
            "2c 2d 2h 5s 9c",
        ] {
            let s = score(cards);
            let met = FullScore::layout()
                .filter(|(_, range)| s.as_slice()[range.clone()].iter().any(|v| *v != 0))
                .count();
            assert_eq!(1, met, "{cards}");
        }
    }

    #[test]
    fn test_broadway_is_high_card_by_default() {
        let broadway = "Th Jd Qc Ks Ah";
        assert_eq!(full(&[(21, &[13, 12, 11, 10, 1])]), score(broadway));

        let ace_high = score_with(RankConfig::default().with_aces(AceRule::LowOrHigh), broadway);
        assert_eq!(Some(Category::Straight), ace_high.best_category());
        assert_eq!(&[14], ace_high.slice(Category::Straight));
    }

    #[test]
    fn test_contiguous_windows_miss_spread_flush() {
        let cards = "2h 3c 5h 7h 9d Jh Kh";
        assert_eq!(full(&[(21, &[13, 11, 9, 7, 5])]), score(cards));

        let all = score_with(
            RankConfig::default().with_windows(WindowStrategy::AllCombinations),
            cards,
        );
        assert_eq!(
            full(&[(5, &[13, 11, 7, 5, 2]), (21, &[13, 11, 9, 7, 5])]),
            all
        );
        assert_eq!(Some("Flush"), all.label());
    }

    #[test]
    fn test_all_combinations_never_scores_lower() {
        let contiguous = Scorer::default();
        let all = Scorer::new(RankConfig::default().with_windows(WindowStrategy::AllCombinations));
        for cards in [
            "Kd Kh Ks Kc Qh Qd 2c",
            "2h 3c 5h 7h 9d Jh Kh",
            "5s 2s 4s 7c 8d 2d 5d",
            "2c 3c 4c 5c 6c 6d 6h",
        ] {
            let cards = parse_cards(cards).unwrap();
            assert!(all.score_cards(&cards).unwrap() >= contiguous.score_cards(&cards).unwrap());
        }
    }

    #[test]
    fn test_seven_cards() {
        // Sorted: 2c Qh Qd Kd Kh Ks Kc
        let s = score("Kd Kh Ks Kc Qh Qd 2c");
        assert_eq!(
            full(&[(1, &[13, 12]), (3, &[13, 12]), (14, &[13, 12, 2])]),
            s
        );
        assert_eq!(Some(Category::FourOfAKind), s.best_category());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = score("5s 2s 4s 7c 8d 2d 5d");
        let b = score("2d 5d 8d 7c 4s 2s 5s");
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent() {
        let scorer = Scorer::default();
        let cards = parse_cards("5s 2s 4s 7c 8d 6s Qd").unwrap();
        assert_eq!(
            scorer.score_cards(&cards).unwrap(),
            scorer.score_cards(&cards).unwrap()
        );
    }

    #[test]
    fn test_too_few_cards() {
        let cards = parse_cards("2c 3c 4c 5c").unwrap();
        assert_eq!(
            Err(PokerRankError::TooFewCards(4)),
            Scorer::default().score_cards(&cards)
        );
    }

    #[test]
    fn test_duplicates() {
        let cards = parse_cards("2c 3c 4c 5c 2c").unwrap();
        let err = Scorer::default().score_cards(&cards).unwrap_err();
        assert_eq!(PokerRankError::DuplicateCard(cards[0]), err);
        assert!(err.is_invalid_input());

        let lenient = Scorer::new(RankConfig::default().with_duplicate_cards(true));
        let s = lenient.score_cards(&cards).unwrap();
        assert_eq!(Some(Category::OnePair), s.best_category());
    }

    #[test]
    fn test_five_of_a_kind_has_no_category() {
        // Only possible with repeated cards.
        let lenient = Scorer::new(RankConfig::default().with_duplicate_cards(true));
        let cards = parse_cards("7h 7h 7d 7c 7s").unwrap();
        assert_eq!(None, lenient.score_cards(&cards).unwrap().label());
    }

    #[test]
    fn test_suited_pair_scores_one_pair() {
        let lenient = Scorer::new(RankConfig::default().with_duplicate_cards(true));
        let s = lenient
            .score_cards(&parse_cards("5h 5h 7h Jh Kh").unwrap())
            .unwrap();
        assert_eq!(Some("One Pair"), s.label());
        assert_eq!(&[0; 5], s.slice(Category::Flush));
        assert_eq!(&[0], s.slice(Category::StraightFlush));
        assert_eq!(&[5, 13, 11, 7], s.slice(Category::OnePair));
    }

    #[test_log::test]
    fn test_scoring_logs() {
        let s = score("5s 2s 4s 7c 8d 6s Qd");
        assert_eq!(Some("Straight"), s.label());
        assert_eq!(&[8], s.slice(Category::Straight));
    }
}
