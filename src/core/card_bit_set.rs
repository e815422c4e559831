use std::fmt::Debug;
use std::ops::BitOrAssign;

use super::{Card, FlatDeck};

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// The scorer uses it to spot repeated cards, and the
/// full set is where every `FlatDeck` starts.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use poker_rank::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Insert a card into the bitset.
    ///
    /// Returns `false` when the card was already there.
    ///
    /// ```
    /// use poker_rank::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// assert!(cards.insert(Card::new(Value::SIX, Suit::Club)));
    /// assert!(cards.insert(Card::new(Value::KING, Suit::Club)));
    /// assert!(!cards.insert(Card::new(Value::SIX, Suit::Club)));
    /// assert_eq!(2, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let added = !self.contains(card);
        self.cards |= 1 << card.index();
        added
    }

    /// Remove a card from the bitset
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << card.index());
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << card.index())) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Find the first card that shows up more than once.
    ///
    /// ```
    /// use poker_rank::core::{parse_cards, CardBitSet};
    ///
    /// let cards = parse_cards("5s 2s 7c 5s").unwrap();
    /// assert_eq!(Some(cards[0]), CardBitSet::first_duplicate(&cards));
    /// assert_eq!(None, CardBitSet::first_duplicate(&cards[..3]));
    /// ```
    pub fn first_duplicate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Card> {
        let mut seen = Self::new();
        cards.into_iter().copied().find(|card| !seen.insert(*card))
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use poker_rank::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// assert!(!cards.is_empty());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

// Trait for converting a CardBitSet into a FlatDeck
// Create the vec for storage and then return the flatdeck
impl From<CardBitSet> for FlatDeck {
    fn from(value: CardBitSet) -> Self {
        value.into_iter().collect::<Vec<Card>>().into()
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl BitOrAssign<Card> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.cards |= 1 << rhs.index();
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set |= card;
        }
        set
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset, lowest value first
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from_index(card as u8))
    }
}
