//! CLI hand example: deal from a shuffled shoe, hit or stand, watch the total.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcards::{
    Blackjack, Card, Color, Deck, DeckOptions, Facing, HandScorer, HandTotal, MemoryStore,
    Session, Snapshot,
};

const NUM_DECKS: u8 = 1;

fn main() {
    env_logger::init();
    println!("Blackjack hand example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DeckOptions::default().with_decks(NUM_DECKS);
    let Ok(deck) = Deck::generate(&options) else {
        println!("Could not generate a deck.");
        return;
    };

    let mut session = Session::new(MemoryStore::new());
    let mut round_seed = seed;
    let mut shoe = deck.shuffled_with_seed(round_seed, Some(Facing::Down));
    let scorer = Blackjack::new();

    loop {
        if shoe.len() < 10 {
            println!("Shoe reshuffled.");
            round_seed = round_seed.wrapping_add(1);
            shoe = deck.shuffled_with_seed(round_seed, Some(Facing::Down));
        }

        let mut hand: Vec<Card> = Vec::new();
        for _ in 0..2 {
            if let Some(mut card) = shoe.draw_top() {
                card.set_facing(Facing::Up);
                hand.push(card);
            }
        }

        loop {
            print_hand(&scorer, &hand, &shoe);

            if scorer.has_blackjack(&hand) {
                println!("Blackjack!");
                break;
            }
            if scorer.is_bust(&hand) {
                println!("Bust.");
                break;
            }

            match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => match shoe.draw_top() {
                    Some(mut card) => {
                        card.set_facing(Facing::Up);
                        hand.push(card);
                    }
                    None => {
                        println!("The shoe is empty.");
                        break;
                    }
                },
                "s" | "stand" => {
                    println!("Standing on {}.", scorer.best_total(&hand));
                    break;
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        let patch = Snapshot {
            draw_deck: Some(shoe.clone()),
            players: None,
        };
        if let Err(err) = session.save(patch) {
            println!("Session error: {err}");
        }

        if prompt_line("Deal again? (y/n): ") != "y" {
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_hand(scorer: &Blackjack, hand: &[Card], shoe: &Deck) {
    let cards = hand.iter().map(format_card).collect::<Vec<_>>().join(" ");
    let total = match scorer.total_hand(hand) {
        HandTotal::Hard(total) => total.to_string(),
        HandTotal::Soft(high, low) => format!("{high} / {low}"),
    };
    println!("\nShoe: {} cards remaining", shoe.len());
    println!("Hand: {cards} | total {total}\n");
}

fn format_card(card: &Card) -> String {
    let glyph = match card.suit() {
        bjcards::Suit::Clubs => '\u{2663}',
        bjcards::Suit::Diamonds => '\u{2666}',
        bjcards::Suit::Hearts => '\u{2665}',
        bjcards::Suit::Spades => '\u{2660}',
    };
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    format!("\u{1b}[{code}m{}{glyph}\u{1b}[0m", card.value())
}
