use rand::Rng;

use crate::core::{Card, CardBitSet, FlatDeck, PokerRankError};

use super::{BOARD_CARDS, HOLE_CARDS};

/// Hole cards for every player plus a full board, all dealt
/// from one deck so no card repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub hands: Vec<[Card; HOLE_CARDS]>,
    pub board: [Card; BOARD_CARDS],
}

/// Shuffle a fresh deck and deal `players` hands, then the board.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_rank::holdem::{deal_table, rank_hands};
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let table = deal_table(&mut rng, 5).unwrap();
///
/// assert_eq!(5, table.hands.len());
/// assert_eq!(5, rank_hands(&table.hands, &table.board).unwrap().len());
/// ```
pub fn deal_table<R: Rng>(rng: &mut R, players: usize) -> Result<Table, PokerRankError> {
    let mut deck = FlatDeck::new();
    deck.shuffle(rng);

    let hands = (0..players)
        .map(|_| deal_array::<HOLE_CARDS>(&mut deck))
        .collect::<Result<Vec<_>, _>>()?;
    let board = deal_array::<BOARD_CARDS>(&mut deck)?;

    Ok(Table { hands, board })
}

/// Deal only what the caller didn't fix.
///
/// Fixed cards are taken out of the deck first, so nothing dealt
/// collides with them. `players` hands are dealt only when `hands`
/// is empty, and a board only when `board` is `None`. Fixed cards are
/// returned as given; their sizes are checked when they are scored.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_rank::core::parse_cards;
/// use poker_rank::holdem::deal_missing;
///
/// let board = parse_cards("As Ks Qs Js Ts").unwrap();
/// let mut rng = StdRng::seed_from_u64(3);
/// let (hands, dealt_board) = deal_missing(&mut rng, 4, Vec::new(), Some(board.clone())).unwrap();
///
/// assert_eq!(4, hands.len());
/// assert_eq!(board, dealt_board);
/// ```
pub fn deal_missing<R: Rng>(
    rng: &mut R,
    players: usize,
    hands: Vec<Vec<Card>>,
    board: Option<Vec<Card>>,
) -> Result<(Vec<Vec<Card>>, Vec<Card>), PokerRankError> {
    let mut remaining = CardBitSet::default();
    for card in hands.iter().flatten().chain(board.iter().flatten()) {
        remaining.remove(*card);
    }
    let mut deck = FlatDeck::from(remaining);
    deck.shuffle(rng);

    let hands = if hands.is_empty() {
        (0..players)
            .map(|_| deck.deal_n(HOLE_CARDS))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        hands
    };
    let board = match board {
        Some(board) => board,
        None => deck.deal_n(BOARD_CARDS)?,
    };
    Ok((hands, board))
}

fn deal_array<const N: usize>(deck: &mut FlatDeck) -> Result<[Card; N], PokerRankError> {
    deck.deal_n(N)?
        .try_into()
        .map_err(|_| PokerRankError::DeckExhausted)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::parse_cards;

    #[test]
    fn test_no_card_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = deal_table(&mut rng, 23).unwrap();

        let all: Vec<Card> = table
            .hands
            .iter()
            .flatten()
            .chain(table.board.iter())
            .copied()
            .collect();
        assert_eq!(51, all.len());
        assert_eq!(None, CardBitSet::first_duplicate(&all));
    }

    #[test]
    fn test_seeded_deal_is_repeatable() {
        let one = deal_table(&mut StdRng::seed_from_u64(420), 5).unwrap();
        let two = deal_table(&mut StdRng::seed_from_u64(420), 5).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn test_too_many_players() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Err(PokerRankError::DeckExhausted), deal_table(&mut rng, 24));
    }

    fn assert_no_repeats(hands: &[Vec<Card>], board: &[Card]) {
        let all: Vec<Card> = hands.iter().flatten().chain(board).copied().collect();
        assert_eq!(None, CardBitSet::first_duplicate(&all));
    }

    #[test]
    fn test_deal_around_fixed_board() {
        let board = parse_cards("As Ks Qs Js Ts").unwrap();
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (hands, dealt_board) =
                deal_missing(&mut rng, 5, Vec::new(), Some(board.clone())).unwrap();

            assert_eq!(board, dealt_board);
            assert_eq!(5, hands.len());
            assert!(hands.iter().all(|h| h.len() == HOLE_CARDS));
            assert_no_repeats(&hands, &dealt_board);
        }
    }

    #[test]
    fn test_deal_board_around_fixed_hands() {
        let hands = vec![parse_cards("7h Tc").unwrap(), parse_cards("6s Qd").unwrap()];
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (dealt_hands, board) = deal_missing(&mut rng, 5, hands.clone(), None).unwrap();

            assert_eq!(hands, dealt_hands);
            assert_eq!(BOARD_CARDS, board.len());
            assert_no_repeats(&dealt_hands, &board);
        }
    }

    #[test]
    fn test_fixed_cards_ignore_players() {
        let hands = vec![parse_cards("7h Tc").unwrap(), parse_cards("6s Qd").unwrap()];
        let board = parse_cards("5s 2s 4s 7c 8d").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let (dealt_hands, dealt_board) =
            deal_missing(&mut rng, 30, hands.clone(), Some(board.clone())).unwrap();
        assert_eq!(hands, dealt_hands);
        assert_eq!(board, dealt_board);
    }

    #[test]
    fn test_deal_missing_too_many_players() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Err(PokerRankError::DeckExhausted),
            deal_missing(&mut rng, 24, Vec::new(), None)
        );
        let board = parse_cards("5s 2s 4s 7c 8d").unwrap();
        assert!(deal_missing(&mut rng, 23, Vec::new(), Some(board)).is_ok());
    }

    #[test]
    fn test_no_players() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = deal_table(&mut rng, 0).unwrap();
        assert!(table.hands.is_empty());
    }
}
