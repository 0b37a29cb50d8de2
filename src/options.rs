//! Deck generation options.

use crate::card::Facing;

/// Configuration options for generating a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcards::{DeckOptions, Facing};
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_facing(Facing::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Facing applied to every generated card.
    pub facing: Facing,
    /// Number of 52-card decks.
    pub decks: u8,
    /// Number of jokers. Reserved: anything other than 0 is rejected.
    pub jokers: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            decks: 1,
            jokers: 0,
        }
    }
}

impl DeckOptions {
    /// Sets the facing of generated cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{DeckOptions, Facing};
    ///
    /// let options = DeckOptions::default().with_facing(Facing::Up);
    /// assert_eq!(options.facing, Facing::Up);
    /// ```
    #[must_use]
    pub const fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// Jokers are not implemented; generation fails when this is non-zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{Deck, DeckError, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(Deck::generate(&options).unwrap_err(), DeckError::JokersUnsupported);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }
}
