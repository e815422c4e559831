use std::fmt;
use std::str::FromStr;

use super::PokerRankError;

/// Card rank or value.
///
/// This is the face value with the ace counted as 1, so the
/// valid range is `1..=13`. There is no separate ace-high value;
/// see `AceRule` for how straights treat the ace.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Value(u8);

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::ACE,
    Value::TWO,
    Value::THREE,
    Value::FOUR,
    Value::FIVE,
    Value::SIX,
    Value::SEVEN,
    Value::EIGHT,
    Value::NINE,
    Value::TEN,
    Value::JACK,
    Value::QUEEN,
    Value::KING,
];

impl Value {
    pub const ACE: Value = Value(1);
    pub const TWO: Value = Value(2);
    pub const THREE: Value = Value(3);
    pub const FOUR: Value = Value(4);
    pub const FIVE: Value = Value(5);
    pub const SIX: Value = Value(6);
    pub const SEVEN: Value = Value(7);
    pub const EIGHT: Value = Value(8);
    pub const NINE: Value = Value(9);
    pub const TEN: Value = Value(10);
    pub const JACK: Value = Value(11);
    pub const QUEEN: Value = Value(12);
    pub const KING: Value = Value(13);

    /// Create a value from its face number.
    ///
    /// ```
    /// use poker_rank::core::Value;
    ///
    /// assert_eq!(Value::QUEEN, Value::new(12).unwrap());
    /// assert!(Value::new(0).is_err());
    /// assert!(Value::new(14).is_err());
    /// ```
    pub fn new(v: u8) -> Result<Self, PokerRankError> {
        if (1..=13).contains(&v) {
            Ok(Self(v))
        } else {
            Err(PokerRankError::ValueOutOfRange(v))
        }
    }

    /// The face number, `1..=13`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::ACE),
            'K' => Some(Value::KING),
            'Q' => Some(Value::QUEEN),
            'J' => Some(Value::JACK),
            'T' => Some(Value::TEN),
            '9' => Some(Value::NINE),
            '8' => Some(Value::EIGHT),
            '7' => Some(Value::SEVEN),
            '6' => Some(Value::SIX),
            '5' => Some(Value::FIVE),
            '4' => Some(Value::FOUR),
            '3' => Some(Value::THREE),
            '2' => Some(Value::TWO),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self.0 {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            v => char::from(b'0' + v),
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = PokerRankError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Value> for u8 {
    fn from(v: Value) -> Self {
        v.0
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self(u.int_in_range(1..=13)?))
    }
}

/// Enum for the four different suits.
///
/// Suits are never compared for strength, the ordering
/// is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    Club = 0,
    /// Diamonds
    #[cfg_attr(feature = "serde", serde(rename = "d"))]
    Diamond = 1,
    /// Hearts
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    Heart = 2,
    /// Spades
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Position of this card in a 52 card deck, used as the bit
    /// index of `CardBitSet`.
    pub(crate) fn index(self) -> u8 {
        (self.value.get() - 1) * 4 + self.suit as u8
    }

    /// Inverse of `index`. Callers keep `idx` below 52.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self {
            value: Value(idx / 4 + 1),
            suit: SUITS[usize::from(idx % 4)],
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PokerRankError;

    /// ```
    /// use poker_rank::core::{Card, Suit, Value};
    ///
    /// let card: Card = "Tc".parse().unwrap();
    /// assert_eq!(Card::new(Value::TEN, Suit::Club), card);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards.as_slice() {
            [card] => Ok(*card),
            [] => Err(PokerRankError::TooFewChars),
            _ => Err(PokerRankError::UnparsedCharsRemaining),
        }
    }
}

/// Parse a run of cards such as `"5s 2s 4s7c 8d"`.
///
/// Every card is a value char followed by a suit char. Whitespace
/// between cards is ignored. Duplicates are not rejected here, that
/// is left to the scorer.
///
/// ```
/// use poker_rank::core::{parse_cards, Card, Suit, Value};
///
/// let cards = parse_cards("Ah Kd").unwrap();
/// assert_eq!(
///     vec![Card::new(Value::ACE, Suit::Heart), Card::new(Value::KING, Suit::Diamond)],
///     cards
/// );
/// assert!(parse_cards("Ax").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, PokerRankError> {
    let mut chars = s.chars().filter(|c| !c.is_whitespace());
    let mut cards = Vec::new();

    // A value char then a suit char for every card
    while let Some(vc) = chars.next() {
        let value = Value::from_char(vc).ok_or(PokerRankError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(PokerRankError::TooFewChars)
            .and_then(|sc| Suit::from_char(sc).ok_or(PokerRankError::UnexpectedSuitChar))?;
        cards.push(Card::new(value, suit));
    }
    Ok(cards)
}
