use super::Card;

/// Iterate over every `num_cards` sized subset of some cards.
///
/// Subsets come out in lexicographic order of their positions and
/// keep the input order inside each subset, so subsets of value
/// sorted cards are themselves value sorted.
///
/// ```
/// use poker_rank::core::{parse_cards, CardIter};
///
/// let cards = parse_cards("2c 3c 4c 5c 6c 6d 6h").unwrap();
/// assert_eq!(21, CardIter::new(&cards, 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Set once the last subset has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most offset that can still move forward,
        // then pack every offset after it right behind it.
        let num_cards = self.idx.len();
        let max_start = self.possible_cards.len() - num_cards;
        match (0..num_cards).rev().find(|&level| self.idx[level] < max_start + level) {
            Some(level) => {
                self.idx[level] += 1;
                for next in level + 1..num_cards {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_cards;

    #[test]
    fn test_iter_one() {
        let cards = parse_cards("2c").unwrap();
        let subsets: Vec<Vec<Card>> = CardIter::new(&cards, 1).collect();
        assert_eq!(vec![cards], subsets);
    }

    #[test]
    fn test_iter_two() {
        let cards = parse_cards("2c 3d 4h").unwrap();
        let subsets: Vec<String> = CardIter::new(&cards, 2)
            .map(|cv| cv.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(vec!["2c3d", "2c4h", "3d4h"], subsets);
    }

    #[test]
    fn test_iter_five_of_seven() {
        let cards = parse_cards("2c 3c 4c 5c 6c 6d 6h").unwrap();
        let subsets: Vec<Vec<Card>> = CardIter::new(&cards, 5).collect();

        assert_eq!(21, subsets.len());
        // The first subset is the first contiguous window.
        assert_eq!(&cards[..5], subsets[0].as_slice());
        assert_eq!(&cards[2..], subsets[20].as_slice());
        for subset in &subsets {
            assert_eq!(5, subset.len());
            assert!(subset.is_sorted_by_key(|c| c.value));
        }
    }

    #[test]
    fn test_iter_too_many() {
        let cards = parse_cards("2c 3c").unwrap();
        assert_eq!(0, CardIter::new(&cards, 3).count());
    }
}
