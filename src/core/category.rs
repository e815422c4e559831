use std::ops::Range;

use super::{AceRule, CategoryScore, ValueGroup, match_pattern};

/// The nine standard poker hand classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Four of the same value.
    FourOfAKind,
    /// Three of one value and two of another value
    FullHouse,
    /// Five cards of the same suit
    Flush,
    /// Five cards in a sequence
    Straight,
    /// Three of the same value.
    ThreeOfAKind,
    /// Two different pairs of matching cards.
    TwoPair,
    /// One card matches another.
    OnePair,
    /// No matches
    HighCard,
}

/// Every category, strongest first. A `FullScore` is laid out in this order.
pub const PRECEDENCE: [Category; 9] = [
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::OnePair,
    Category::HighCard,
];

struct CategoryInfo {
    name: &'static str,
    arity: usize,
    offset: usize,
}

/// Indexed by `Category as usize`.
static CATEGORY_TABLE: [CategoryInfo; 9] = [
    CategoryInfo {
        name: "Straight Flush",
        arity: 1,
        offset: 0,
    },
    CategoryInfo {
        name: "Four of a Kind",
        arity: 2,
        offset: 1,
    },
    CategoryInfo {
        name: "Full House",
        arity: 2,
        offset: 3,
    },
    CategoryInfo {
        name: "Flush",
        arity: 5,
        offset: 5,
    },
    CategoryInfo {
        name: "Straight",
        arity: 1,
        offset: 10,
    },
    CategoryInfo {
        name: "Three of a Kind",
        arity: 3,
        offset: 11,
    },
    CategoryInfo {
        name: "Two Pair",
        arity: 3,
        offset: 14,
    },
    CategoryInfo {
        name: "One Pair",
        arity: 4,
        offset: 17,
    },
    CategoryInfo {
        name: "High Card",
        arity: 5,
        offset: 21,
    },
];

/// Value list of a broadway straight once sorted, with the ace low.
const BROADWAY: [u8; 5] = [1, 10, 11, 12, 13];

/// What a broadway straight scores when aces may play high.
const ACE_HIGH: u8 = 14;

impl Category {
    fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self as usize]
    }

    /// Human readable name, e.g. `"Four of a Kind"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// How many values this category scores.
    pub fn arity(self) -> usize {
        self.info().arity
    }

    /// Where this category starts inside a `FullScore`.
    pub fn offset(self) -> usize {
        self.info().offset
    }

    pub fn range(self) -> Range<usize> {
        self.offset()..self.offset() + self.arity()
    }

    /// Score one 5 card window that was already grouped with
    /// `sorted_groups`.
    ///
    /// Values come back least significant first; a score of all
    /// zeros means the window isn't this category.
    ///
    /// ```
    /// use poker_rank::core::{parse_cards, sorted_groups, AceRule, Category};
    ///
    /// let cards = parse_cards("2h 7h 7d 7c 7s").unwrap();
    /// let groups = sorted_groups(&cards);
    ///
    /// let quads = Category::FourOfAKind.evaluate(&groups, AceRule::LowOnly);
    /// assert_eq!(&[2, 7], quads.as_slice());
    ///
    /// let flush = Category::Flush.evaluate(&groups, AceRule::LowOnly);
    /// assert!(!flush.is_met());
    /// ```
    pub fn evaluate(self, groups: &[ValueGroup<'_>], aces: AceRule) -> CategoryScore {
        match self {
            Category::StraightFlush => {
                if flush(groups).is_met() {
                    straight(groups, aces)
                } else {
                    CategoryScore::zero(1)
                }
            }
            Category::FourOfAKind => match_pattern(groups, &[1, 4]),
            Category::FullHouse => match_pattern(groups, &[2, 3]),
            Category::Flush => flush(groups),
            Category::Straight => straight(groups, aces),
            Category::ThreeOfAKind => match_pattern(groups, &[1, 1, 3]),
            Category::TwoPair => match_pattern(groups, &[1, 2, 2]),
            Category::OnePair => match_pattern(groups, &[1, 1, 1, 2]),
            Category::HighCard => match_pattern(groups, &[1, 1, 1, 1, 1]),
        }
    }
}

/// Five distinct values each one more than the last. There's no
/// wrap around, the ace is only high under `AceRule::LowOrHigh`.
fn straight(groups: &[ValueGroup<'_>], aces: AceRule) -> CategoryScore {
    if groups.len() != 5 {
        return CategoryScore::zero(1);
    }

    let consecutive = groups
        .windows(2)
        .all(|pair| pair[1].value().get() == pair[0].value().get() + 1);
    if consecutive {
        return groups.last().map(|g| g.value().get()).into_iter().collect();
    }

    let broadway = groups.iter().map(|g| g.value().get()).eq(BROADWAY);
    if aces == AceRule::LowOrHigh && broadway {
        return [ACE_HIGH].into_iter().collect();
    }

    CategoryScore::zero(1)
}

/// Five distinct values sharing one suit.
fn flush(groups: &[ValueGroup<'_>]) -> CategoryScore {
    let suited = groups.len() == 5 && groups.iter().all(|g| g.suit() == groups[0].suit());
    if suited {
        groups.iter().map(|g| g.value().get()).collect()
    } else {
        CategoryScore::zero(5)
    }
}
