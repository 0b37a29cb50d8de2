//! Playing-card decks and blackjack hand scoring with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type for generating, shuffling, and drawing
//! cards, a [`Blackjack`] scorer that totals hands with soft and hard aces,
//! and a [`Session`] handle that persists a [`Snapshot`] through any
//! [`KeyValueStore`].
//!
//! # Example
//!
//! ```
//! use bjcards::{Blackjack, Deck, DeckOptions, HandScorer};
//!
//! let deck = Deck::generate(&DeckOptions::default()).unwrap();
//! let mut shoe = deck.shuffled_with_seed(42, None);
//!
//! let hand: Vec<_> = (0..2).filter_map(|_| shoe.draw_top()).collect();
//! let total = Blackjack.total_hand(&hand);
//! assert!(total.best() <= 21);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod session;

// Re-export main types
pub use card::{Card, CardId, Color, DECK_SIZE, Facing, Suit, Value};
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError, SessionError};
pub use hand::{BLACKJACK, Blackjack, HandScorer, HandTotal, parse_hand};
pub use options::DeckOptions;
pub use session::{KeyValueStore, MemoryStore, Player, PlayerGroup, STORAGE_NAME, Session, Snapshot};
