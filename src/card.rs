//! Card types: suits, values, facing, and stable card identifiers.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck generation order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the lowercase name used in card ids and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Returns the HTML entity that renders the suit glyph.
    #[must_use]
    pub const fn html_entity(self) -> &'static str {
        match self {
            Self::Clubs => "&clubs;",
            Self::Diamonds => "&#9830;",
            Self::Hearts => "&hearts;",
            Self::Spades => "&spades;",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card value (rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    /// Ace.
    #[serde(rename = "A")]
    Ace,
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "J")]
    Jack,
    /// Queen.
    #[serde(rename = "Q")]
    Queen,
    /// King.
    #[serde(rename = "K")]
    King,
}

impl Value {
    /// All values in deck generation order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the short symbol printed on the card (`"A"`, `"10"`, `"K"`, ...).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the pip count: 1 for an ace, 2 through 10 for numerals, and
    /// 11 to 13 for court cards.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Returns whether the value is a jack, queen, or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Value {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.symbol() == s)
            .ok_or(CardError::InvalidId)
    }
}

/// Card orientation. Also decides which end of a deck is its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Face down. The top of a face-down deck is its first card.
    #[default]
    Down,
    /// Face up. The top of a face-up deck is its last card.
    Up,
}

impl Facing {
    /// Returns the opposite orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

/// Identifier of a physical card within a multi-deck set.
///
/// Formats as deck number, suit, and value, e.g. `1clubsA` or `3hearts10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId {
    deck: u8,
    suit: Suit,
    value: Value,
}

impl CardId {
    /// Creates an identifier for the given deck number, suit, and value.
    #[must_use]
    pub const fn new(deck: u8, suit: Suit, value: Value) -> Self {
        Self { deck, suit, value }
    }

    /// Returns the 1-based deck number.
    #[must_use]
    pub const fn deck(&self) -> u8 {
        self.deck
    }

    /// Returns the suit encoded in the id.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the value encoded in the id.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.deck, self.suit, self.value)
    }
}

impl FromStr for CardId {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, rest) = s.split_at(split);
        let deck = digits.parse::<u8>().map_err(|_| CardError::InvalidId)?;

        let suit = Suit::ALL
            .into_iter()
            .find(|suit| rest.starts_with(suit.name()))
            .ok_or(CardError::InvalidId)?;
        let value = rest[suit.name().len()..].parse::<Value>()?;

        Ok(Self::new(deck, suit, value))
    }
}

impl TryFrom<String> for CardId {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

/// A playing card.
///
/// The suit, value, and id are fixed at creation; only the facing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    value: Value,
    suit: Suit,
    facing: Facing,
    id: CardId,
}

impl Card {
    /// Creates a card belonging to the given 1-based deck number.
    #[must_use]
    pub const fn new(deck: u8, suit: Suit, value: Value, facing: Facing) -> Self {
        Self {
            value,
            suit,
            facing,
            id: CardId::new(deck, suit, value),
        }
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Returns the card's identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.value, Value::Ace)
    }

    /// Sets the facing.
    pub const fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.facing = self.facing.flipped();
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Wire form of a card, checked before it becomes a [`Card`].
#[derive(Deserialize)]
struct CardRecord {
    value: Value,
    suit: Suit,
    facing: Facing,
    id: CardId,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        if record.id.suit() != record.suit || record.id.value() != record.value {
            return Err(CardError::IdMismatch);
        }
        Ok(Self::new(record.id.deck(), record.suit, record.value, record.facing))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Value::ALL.len();
