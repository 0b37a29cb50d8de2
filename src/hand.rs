//! Hand scoring.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Value};
use crate::error::HandError;

/// The best possible total; anything above it is a bust.
pub const BLACKJACK: u16 = 21;

/// The total of a hand.
///
/// Serializes as a bare number for a hard total and as `[high, low]` for a
/// soft total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandTotal {
    /// A single, unambiguous total.
    Hard(u16),
    /// Two valid totals: one ace counted as 11, and every ace counted as 1.
    /// The first is always the greater.
    Soft(u16, u16),
}

impl HandTotal {
    /// Returns the highest total.
    #[must_use]
    pub const fn best(self) -> u16 {
        match self {
            Self::Hard(total) | Self::Soft(total, _) => total,
        }
    }

    /// Returns the lowest total.
    #[must_use]
    pub const fn lowest(self) -> u16 {
        match self {
            Self::Hard(total) | Self::Soft(_, total) => total,
        }
    }

    /// Returns whether the total is soft.
    #[must_use]
    pub const fn is_soft(self) -> bool {
        matches!(self, Self::Soft(..))
    }

    /// Returns whether every candidate total exceeds [`BLACKJACK`].
    #[must_use]
    pub const fn is_bust(self) -> bool {
        match self {
            Self::Hard(total) => total > BLACKJACK,
            Self::Soft(high, low) => high > BLACKJACK && low > BLACKJACK,
        }
    }
}

/// Scoring rules for a card game built on a standard deck.
pub trait HandScorer {
    /// Returns the value a single card contributes, without hand context.
    fn card_value(&self, card: &Card) -> u8;

    /// Totals a hand.
    fn total_hand(&self, hand: &[Card]) -> HandTotal;

    /// Totals a hand and keeps only the best candidate.
    fn best_total(&self, hand: &[Card]) -> u16 {
        self.total_hand(hand).best()
    }
}

/// Blackjack scoring.
///
/// Aces count 1 per card; at most one ace per hand is lifted to 11, since a
/// second would always bust.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blackjack;

impl Blackjack {
    /// Creates the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether the hand is a natural: two cards totalling exactly 21.
    #[must_use]
    pub fn has_blackjack(&self, hand: &[Card]) -> bool {
        hand.len() == 2 && self.total_hand(hand) == HandTotal::Hard(BLACKJACK)
    }

    /// Returns whether the hand has no total at or below 21.
    #[must_use]
    pub fn is_bust(&self, hand: &[Card]) -> bool {
        self.total_hand(hand).is_bust()
    }

    /// Totals an untyped hand, such as one read back from storage.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidInput`] if the value is not an array of
    /// well-formed cards.
    pub fn total_json(&self, hand: &serde_json::Value) -> Result<HandTotal, HandError> {
        let cards = parse_hand(hand)?;
        Ok(self.total_hand(&cards))
    }

    fn evaluate(&self, hand: &[Card], best_only: bool) -> HandTotal {
        let (aces, others): (Vec<&Card>, Vec<&Card>) = hand.iter().partition(|card| card.is_ace());

        let hard = others.iter().fold(0u16, |total, card| {
            total.saturating_add(u16::from(self.card_value(card)))
        });

        if aces.is_empty() {
            return HandTotal::Hard(hard);
        }

        let extra = u16::try_from(aces.len() - 1).unwrap_or(u16::MAX);
        let high = hard.saturating_add(11).saturating_add(extra);
        let low = hard.saturating_add(1).saturating_add(extra);

        let natural = hand.len() == 2 && high == BLACKJACK;
        if high > BLACKJACK {
            HandTotal::Hard(low)
        } else if natural || best_only {
            HandTotal::Hard(high)
        } else {
            HandTotal::Soft(high, low)
        }
    }
}

impl HandScorer for Blackjack {
    fn card_value(&self, card: &Card) -> u8 {
        match card.value() {
            // the eleven is decided per hand
            Value::Ace => 1,
            Value::Jack | Value::Queen | Value::King => 10,
            value => value.rank(),
        }
    }

    fn total_hand(&self, hand: &[Card]) -> HandTotal {
        self.evaluate(hand, false)
    }

    fn best_total(&self, hand: &[Card]) -> u16 {
        self.evaluate(hand, true).best()
    }
}

/// Reads a hand out of an untyped JSON value.
///
/// # Errors
///
/// Returns [`HandError::InvalidInput`] if the value is not an array, or if any
/// element is not a well-formed card.
pub fn parse_hand(hand: &serde_json::Value) -> Result<Vec<Card>, HandError> {
    let Some(items) = hand.as_array() else {
        log::debug!("rejected hand that is not an array");
        return Err(HandError::InvalidInput);
    };

    items
        .iter()
        .map(|item| Card::deserialize(item).map_err(|_| HandError::InvalidInput))
        .collect()
}
