use std::cmp::Ordering;
use std::ops::Range;

use super::{Category, PRECEDENCE};

/// The widest category score, flushes and high cards use all five.
pub const MAX_ARITY: usize = 5;

/// Length of a `FullScore`, the sum of every category's arity.
pub const FULL_SCORE_LEN: usize = 26;

/// Compare two value lists over the indices they share,
/// earlier elements first.
///
/// ```
/// use std::cmp::Ordering;
/// use poker_rank::core::compare_prefix;
///
/// assert_eq!(Ordering::Less, compare_prefix(&[1, 2, 3, 4], &[1, 2, 3, 7]));
/// assert_eq!(Ordering::Equal, compare_prefix(&[0, 0, 1, 2], &[0, 0, 1, 2, 3]));
/// assert_eq!(Ordering::Greater, compare_prefix(&[1, 2, 3, 4], &[0, 2, 3, 7]));
/// ```
pub fn compare_prefix(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// The values one category produced for one hand.
///
/// An all zero score means the category was not met. Card values
/// start at 1 so a real match is never all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryScore {
    values: [u8; MAX_ARITY],
    arity: usize,
}

impl CategoryScore {
    /// The "not met" score with `arity` zeros.
    pub fn zero(arity: usize) -> Self {
        debug_assert!(arity <= MAX_ARITY);
        Self {
            values: [0; MAX_ARITY],
            arity: arity.min(MAX_ARITY),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.arity]
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Was the category met?
    pub fn is_met(&self) -> bool {
        self.as_slice().iter().any(|v| *v != 0)
    }

    /// Flip the score so the most significant value comes first.
    pub fn reversed(mut self) -> Self {
        self.values[..self.arity].reverse();
        self
    }
}

impl FromIterator<u8> for CategoryScore {
    /// Collect at most `MAX_ARITY` values.
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut score = Self::zero(0);
        for (slot, v) in score.values.iter_mut().zip(iter) {
            *slot = v;
            score.arity += 1;
        }
        score
    }
}

/// Every category's best score for one player, concatenated in
/// precedence order (straight flush first, high card last).
///
/// Comparing two full scores is comparing hand strength, the
/// derived `Ord` is the lexicographic order of the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FullScore([u8; FULL_SCORE_LEN]);

impl FullScore {
    /// Lay out one score per category, in `PRECEDENCE` order.
    ///
    /// Every score has to have the arity of its category.
    pub(crate) fn from_parts(parts: &[CategoryScore; 9]) -> Self {
        let mut values = [0; FULL_SCORE_LEN];
        for (category, part) in PRECEDENCE.iter().zip(parts) {
            debug_assert_eq!(category.arity(), part.arity());
            values[category.range()].copy_from_slice(part.as_slice());
        }
        Self(values)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The part of the score that belongs to `category`.
    pub fn slice(&self, category: Category) -> &[u8] {
        &self.0[category.range()]
    }

    /// The first category, in precedence order, with a non zero slice.
    pub fn best_category(&self) -> Option<Category> {
        PRECEDENCE
            .iter()
            .copied()
            .find(|c| self.slice(*c).iter().any(|v| *v != 0))
    }

    /// Name of the best category, `None` for an all zero score.
    pub fn label(&self) -> Option<&'static str> {
        self.best_category().map(Category::name)
    }

    /// Index range of every category inside the score.
    pub fn layout() -> impl Iterator<Item = (Category, Range<usize>)> {
        PRECEDENCE.iter().map(|c| (*c, c.range()))
    }
}

impl From<[u8; FULL_SCORE_LEN]> for FullScore {
    fn from(values: [u8; FULL_SCORE_LEN]) -> Self {
        Self(values)
    }
}

impl From<FullScore> for [u8; FULL_SCORE_LEN] {
    fn from(score: FullScore) -> Self {
        score.0
    }
}
