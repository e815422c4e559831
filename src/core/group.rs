use super::{Card, CategoryScore, Suit, Value};

/// A maximal run of equal value cards taken from a
/// value sorted slice.
///
/// Groups borrow the cards they were built from and are never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueGroup<'a> {
    cards: &'a [Card],
}

impl<'a> ValueGroup<'a> {
    /// The value every card in this group shares.
    pub fn value(&self) -> Value {
        self.cards[0].value
    }

    /// The suit of the first card of the group.
    pub fn suit(&self) -> Suit {
        self.cards[0].suit
    }

    /// How many cards are in the group.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }
}

/// Split value sorted cards into runs of equal value, keeping
/// the order they arrived in.
///
/// Unsorted input is not rejected, equal values that are not
/// next to each other simply end up in different groups.
pub fn value_groups(cards: &[Card]) -> Vec<ValueGroup<'_>> {
    cards
        .chunk_by(|a, b| a.value == b.value)
        .map(|cards| ValueGroup { cards })
        .collect()
}

/// Group value sorted cards and then order the groups by
/// size and then by value, smallest first.
///
/// ```
/// use poker_rank::core::{parse_cards, sorted_groups, Value};
///
/// let cards = parse_cards("8d 8c Js Jd Qh").unwrap();
/// let groups = sorted_groups(&cards);
///
/// let shape: Vec<(usize, Value)> = groups.iter().map(|g| (g.size(), g.value())).collect();
/// assert_eq!(vec![(1, Value::QUEEN), (2, Value::EIGHT), (2, Value::JACK)], shape);
/// ```
pub fn sorted_groups(cards: &[Card]) -> Vec<ValueGroup<'_>> {
    debug_assert!(
        cards.is_sorted_by_key(|c| c.value),
        "cards must be sorted by value before grouping"
    );
    let mut groups = value_groups(cards);
    groups.sort_by_key(|g| (g.size(), g.value()));
    groups
}

/// Check that sorted groups have exactly the sizes in `pattern`,
/// position by position.
///
/// On a match the value of every group is returned, in the same
/// order as the groups. Otherwise the result is all zeros with one
/// entry per pattern element.
///
/// ```
/// use poker_rank::core::{match_pattern, parse_cards, sorted_groups};
///
/// let cards = parse_cards("8d 8c Js Jd Qh").unwrap();
/// let groups = sorted_groups(&cards);
///
/// // Two pair
/// assert_eq!(&[12, 8, 11], match_pattern(&groups, &[1, 2, 2]).as_slice());
/// // Full house
/// assert_eq!(&[0, 0], match_pattern(&groups, &[2, 3]).as_slice());
/// ```
pub fn match_pattern(groups: &[ValueGroup<'_>], pattern: &[usize]) -> CategoryScore {
    let matches = groups.len() == pattern.len()
        && groups
            .iter()
            .zip(pattern)
            .all(|(group, size)| group.size() == *size);

    if matches {
        groups.iter().map(|g| g.value().get()).collect()
    } else {
        CategoryScore::zero(pattern.len())
    }
}
