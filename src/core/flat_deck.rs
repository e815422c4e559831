use std::ops::Index;

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use super::{Card, CardBitSet, PokerRankError};

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards and dealing from the top.
/// It does not provide contains methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// The full 52 card deck in a fixed order, lowest value first.
    ///
    /// ```
    /// use poker_rank::core::FlatDeck;
    ///
    /// assert_eq!(52, FlatDeck::new().len());
    /// ```
    pub fn new() -> Self {
        CardBitSet::default().into()
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the flat deck.
    /// This will ensure the there's no order to the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal exactly `n` cards or none at all.
    ///
    /// ```
    /// use poker_rank::core::FlatDeck;
    ///
    /// let mut deck = FlatDeck::new();
    /// assert_eq!(5, deck.deal_n(5).unwrap().len());
    /// assert_eq!(47, deck.len());
    /// assert!(deck.deal_n(48).is_err());
    /// assert_eq!(47, deck.len());
    /// ```
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, PokerRankError> {
        let remaining = self
            .cards
            .len()
            .checked_sub(n)
            .ok_or(PokerRankError::DeckExhausted)?;
        let mut dealt = self.cards.split_off(remaining);
        // Top of the deck is the end of the vec.
        dealt.reverse();
        Ok(dealt)
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

impl Default for FlatDeck {
    /// A freshly shuffled 52 card deck.
    fn default() -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut rng());
        deck
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_new_is_full() {
        let fd = FlatDeck::new();
        assert_eq!(52, fd.len());
        assert_eq!(Card::new(Value::ACE, Suit::Club), fd[0]);
        assert_eq!(Card::new(Value::KING, Suit::Spade), fd[51]);
    }

    #[test]
    fn test_from_vec() {
        let c = Card::new(Value::NINE, Suit::Heart);
        let mut flat_deck: FlatDeck = vec![c].into();

        assert_eq!(1, flat_deck.len());
        assert_eq!(Some(c), flat_deck.deal());
        assert!(flat_deck.is_empty());
        assert_eq!(None, flat_deck.deal());
    }

    #[test]
    fn test_deal_n_matches_deal() {
        let mut one = FlatDeck::new();
        let mut two = FlatDeck::new();

        let dealt = one.deal_n(3).unwrap();
        let singles: Vec<Card> = (0..3).filter_map(|_| two.deal()).collect();

        assert_eq!(singles, dealt);
        assert_eq!(one, two);
    }

    #[test]
    fn test_shuffle_rng() {
        let mut fd_one = FlatDeck::new();
        let mut fd_two = FlatDeck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        fd_one.shuffle(&mut rng_one);
        fd_two.shuffle(&mut rng_two);

        assert_eq!(fd_one, fd_two);
        assert_ne!(FlatDeck::new(), fd_one);
    }

    #[test]
    fn test_default_is_shuffled_full_deck() {
        let fd = FlatDeck::default();
        assert_eq!(52, fd.len());
        let mut cards: Vec<Card> = (0..52).map(|i| fd[i]).collect();
        cards.sort();
        let mut ordered: Vec<Card> = (0..52).map(|i| FlatDeck::new()[i]).collect();
        ordered.sort();
        assert_eq!(ordered, cards);
    }
}
