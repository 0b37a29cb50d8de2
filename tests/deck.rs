//! Deck integration tests.

use std::collections::{HashMap, HashSet};

use bjcards::{
    Card, CardError, CardId, Color, DECK_SIZE, Deck, DeckError, DeckOptions, Facing, Suit, Value,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn single_deck() -> Deck {
    Deck::generate(&DeckOptions::default()).unwrap()
}

fn ids(deck: &Deck) -> HashSet<CardId> {
    deck.iter().map(Card::id).collect()
}

#[test]
fn generates_one_deck_in_suit_then_value_order() {
    let deck = single_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(ids(&deck).len(), DECK_SIZE);

    let cards = deck.cards();
    assert_eq!(cards[0].id().to_string(), "1clubsA");
    assert_eq!(cards[12].id().to_string(), "1clubsK");
    assert_eq!(cards[13].id().to_string(), "1diamondsA");
    assert_eq!(cards[51].id().to_string(), "1spadesK");
    assert!(cards.iter().all(|card| card.facing() == Facing::Down));
}

#[test]
fn generates_unique_ids_across_decks() {
    for decks in 1..=8u8 {
        let deck = Deck::generate(&DeckOptions::default().with_decks(decks)).unwrap();
        assert_eq!(deck.len(), DECK_SIZE * decks as usize);
        assert_eq!(ids(&deck).len(), DECK_SIZE * decks as usize);

        for number in 1..=decks {
            let pairs: HashSet<(Suit, Value)> = deck
                .iter()
                .filter(|card| card.id().deck() == number)
                .map(|card| (card.suit(), card.value()))
                .collect();
            assert_eq!(pairs.len(), DECK_SIZE);
        }
    }
}

#[test]
fn generate_rejects_jokers_and_zero_decks() {
    assert_eq!(
        Deck::generate(&DeckOptions::default().with_jokers(1)).unwrap_err(),
        DeckError::JokersUnsupported
    );
    assert_eq!(
        Deck::generate(&DeckOptions::default().with_decks(0)).unwrap_err(),
        DeckError::NoDecks
    );
}

#[test]
fn generate_applies_facing_and_cards_are_independent() {
    let options = DeckOptions::default().with_decks(2).with_facing(Facing::Up);
    let mut deck = Deck::generate(&options).unwrap().into_cards();
    assert!(deck.iter().all(|card| card.facing() == Facing::Up));

    deck[0].flip();
    assert_eq!(deck[0].facing(), Facing::Down);
    assert_eq!(deck[DECK_SIZE].id().to_string(), "2clubsA");
    assert_eq!(deck[DECK_SIZE].facing(), Facing::Up);
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let deck = Deck::generate(&DeckOptions::default().with_decks(2)).unwrap();
    let before = deck.clone();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shuffled = deck.shuffled(&mut rng, None);

    assert_eq!(deck, before);
    assert_eq!(shuffled.len(), deck.len());
    assert_eq!(ids(&shuffled), ids(&deck));
    assert_ne!(shuffled, deck);
}

#[test]
fn shuffle_restamps_facing_when_asked() {
    let deck = single_deck();

    let up = deck.shuffled_with_seed(1, Some(Facing::Up));
    assert!(up.iter().all(|card| card.facing() == Facing::Up));

    let kept = deck.shuffled_with_seed(1, None);
    assert!(kept.iter().all(|card| card.facing() == Facing::Down));
}

#[test]
fn shuffle_with_seed_is_deterministic() {
    let deck = single_deck();
    assert_eq!(deck.shuffled_with_seed(42, None), deck.shuffled_with_seed(42, None));
    assert_ne!(deck.shuffled_with_seed(1, None), deck.shuffled_with_seed(2, None));
}

#[test]
fn shuffle_visits_every_permutation_evenly() {
    let deck: Deck = single_deck().iter().take(4).copied().collect();
    let trials = 24_000u32;
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut counts: HashMap<Vec<CardId>, u32> = HashMap::new();
    for _ in 0..trials {
        let order = deck.shuffled(&mut rng, None).iter().map(Card::id).collect();
        *counts.entry(order).or_default() += 1;
    }

    assert_eq!(counts.len(), 24);
    let expected = f64::from(trials) / 24.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| (f64::from(observed) - expected).powi(2) / expected)
        .sum();
    // 23 degrees of freedom; a biased shuffle lands in the hundreds.
    assert!(chi_square < 80.0, "chi-square {chi_square}");
}

#[test]
fn shuffle_spreads_every_card_to_the_top() {
    let deck = single_deck();
    let trials = 26_000u32;
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let mut counts: HashMap<CardId, u32> = HashMap::new();
    for _ in 0..trials {
        let top = deck.shuffled(&mut rng, None).cards()[0].id();
        *counts.entry(top).or_default() += 1;
    }

    assert_eq!(counts.len(), DECK_SIZE);
    let expected = f64::from(trials) / DECK_SIZE as f64;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| (f64::from(observed) - expected).powi(2) / expected)
        .sum();
    // 51 degrees of freedom.
    assert!(chi_square < 120.0, "chi-square {chi_square}");
}

#[test]
fn draw_respects_facing() {
    let mut deck = single_deck();

    let down = deck.draw(Facing::Down).unwrap();
    assert_eq!(down.id().to_string(), "1clubsA");

    let up = deck.draw(Facing::Up).unwrap();
    assert_eq!(up.id().to_string(), "1spadesK");

    let top = deck.draw_top().unwrap();
    assert_eq!(top.id().to_string(), "1clubs2");
    assert_eq!(deck.len(), DECK_SIZE - 3);
}

#[test]
fn draw_from_empty_deck_returns_none() {
    let mut deck = Deck::new();
    assert!(deck.is_empty());
    assert_eq!(deck.draw(Facing::Down), None);
    assert_eq!(deck.draw(Facing::Up), None);
    assert_eq!(deck.draw_top(), None);

    let mut one: Deck = vec![Card::new(1, Suit::Hearts, Value::Five, Facing::Down)].into();
    assert!(one.draw_top().is_some());
    assert_eq!(one.draw_top(), None);
}

#[test]
fn composition_counts_remaining_values() {
    let mut deck = single_deck();
    assert_eq!(deck.count_of(Value::Ace), 4);
    assert!((deck.share_of(Value::Ace) - 4.0 / 52.0).abs() < f64::EPSILON);

    deck.draw_top();
    assert_eq!(deck.count_of(Value::Ace), 3);
    assert!((deck.share_of(Value::Ace) - 3.0 / 51.0).abs() < f64::EPSILON);

    assert!(Deck::new().share_of(Value::King).abs() < f64::EPSILON);
}

#[test]
fn suits_map_to_colors_and_entities() {
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Spades.color(), Color::Black);

    assert_eq!(Suit::Clubs.html_entity(), "&clubs;");
    assert_eq!(Suit::Diamonds.html_entity(), "&#9830;");
    assert_eq!(Suit::Hearts.html_entity(), "&hearts;");
    assert_eq!(Suit::Spades.html_entity(), "&spades;");
}

#[test]
fn card_ids_parse_back() {
    let id: CardId = "12hearts10".parse().unwrap();
    assert_eq!(id.deck(), 12);
    assert_eq!(id.suit(), Suit::Hearts);
    assert_eq!(id.value(), Value::Ten);

    assert_eq!("hearts10".parse::<CardId>(), Err(CardError::InvalidId));
    assert_eq!("1stars10".parse::<CardId>(), Err(CardError::InvalidId));
    assert_eq!("1hearts11".parse::<CardId>(), Err(CardError::InvalidId));
}

#[test]
fn card_serializes_as_plain_object() {
    let card = Card::new(1, Suit::Clubs, Value::Ace, Facing::Down);
    assert_eq!(
        serde_json::to_value(card).unwrap(),
        serde_json::json!({"value": "A", "suit": "clubs", "facing": "down", "id": "1clubsA"})
    );

    let mismatched = serde_json::json!({"value": "K", "suit": "clubs", "facing": "up", "id": "1clubsA"});
    assert!(serde_json::from_value::<Card>(mismatched).is_err());
}

#[test]
fn deck_survives_json_round_trip() {
    let deck = Deck::generate(&DeckOptions::default().with_decks(2))
        .unwrap()
        .shuffled_with_seed(5, Some(Facing::Up));

    let json = serde_json::to_string(&deck).unwrap();
    assert!(json.starts_with('['));
    assert_eq!(serde_json::from_str::<Deck>(&json).unwrap(), deck);
}
