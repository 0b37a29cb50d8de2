//! Decks: generation, shuffling, and drawing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Facing, Suit, Value};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// An ordered sequence of cards.
///
/// Which end is the top depends on the facing passed to [`Deck::draw`]: a
/// face-down deck is drawn from the front, a face-up deck from the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Generates `52 * options.decks` cards in a fixed order: deck number,
    /// then suit, then value.
    ///
    /// # Errors
    ///
    /// Returns an error if no decks are requested or if jokers are requested.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{Deck, DeckOptions};
    ///
    /// let deck = Deck::generate(&DeckOptions::default().with_decks(2)).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn generate(options: &DeckOptions) -> Result<Self, DeckError> {
        if options.jokers > 0 {
            return Err(DeckError::JokersUnsupported);
        }
        if options.decks == 0 {
            return Err(DeckError::NoDecks);
        }

        let mut cards = Vec::with_capacity(options.decks as usize * DECK_SIZE);
        for deck in 1..=options.decks {
            for suit in Suit::ALL {
                for value in Value::ALL {
                    cards.push(Card::new(deck, suit, value, options.facing));
                }
            }
        }

        log::debug!(
            "generated {} cards from {} deck(s), facing {:?}",
            cards.len(),
            options.decks,
            options.facing
        );
        Ok(Self { cards })
    }

    /// Returns a uniformly shuffled copy of the deck, leaving `self` untouched.
    ///
    /// When `facing` is given, every card in the copy is turned to it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R, facing: Option<Facing>) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);

        if let Some(facing) = facing {
            for card in &mut cards {
                card.set_facing(facing);
            }
        }

        log::trace!("shuffled {} cards", cards.len());
        Self { cards }
    }

    /// Returns a shuffled copy of the deck using a seeded generator.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcards::{Deck, DeckOptions};
    ///
    /// let deck = Deck::generate(&DeckOptions::default()).unwrap();
    /// assert_eq!(deck.shuffled_with_seed(7, None), deck.shuffled_with_seed(7, None));
    /// ```
    #[must_use]
    pub fn shuffled_with_seed(&self, seed: u64, facing: Option<Facing>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled(&mut rng, facing)
    }

    /// Removes and returns the top card for the given facing.
    ///
    /// Face down draws the first card; face up draws the last. Returns `None`
    /// once the deck is empty.
    pub fn draw(&mut self, facing: Facing) -> Option<Card> {
        let card = match facing {
            Facing::Down if self.cards.is_empty() => None,
            Facing::Down => Some(self.cards.remove(0)),
            Facing::Up => self.cards.pop(),
        };
        log::trace!("drew {card:?} facing {facing:?}, {} left", self.cards.len());
        card
    }

    /// Removes and returns the top card of a face-down deck.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.draw(Facing::default())
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card to the back of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns how many remaining cards have the given value.
    #[must_use]
    pub fn count_of(&self, value: Value) -> usize {
        self.cards.iter().filter(|card| card.value() == value).count()
    }

    /// Returns the fraction of remaining cards that have the given value.
    ///
    /// An empty deck yields 0.
    #[must_use]
    pub fn share_of(&self, value: Value) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let share = self.count_of(value) as f64 / self.cards.len() as f64;
        share
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
