//! Error types for deck, card, hand, and session operations.

use thiserror::Error;

/// Errors that can occur while generating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Zero decks were requested.
    #[error("at least one deck is required")]
    NoDecks,
    /// Jokers were requested; they are not supported yet.
    #[error("jokers are not supported")]
    JokersUnsupported,
}

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card id or value symbol could not be parsed.
    #[error("invalid card id")]
    InvalidId,
    /// The card id disagrees with the card's suit or value.
    #[error("card id does not match its suit and value")]
    IdMismatch,
}

/// Errors that can occur while reading a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand is not a sequence of well-formed cards.
    #[error("hand is not a sequence of cards")]
    InvalidInput,
}

/// Errors that can occur while loading or saving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The key-value store rejected the read or write.
    #[error("session storage is unavailable")]
    Storage,
    /// The snapshot could not be encoded.
    #[error("failed to encode session snapshot")]
    Encode,
    /// The stored snapshot could not be decoded.
    #[error("failed to decode session snapshot")]
    Decode,
}
