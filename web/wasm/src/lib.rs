use bjcards::{
    Blackjack, Card, Color, Deck, DeckOptions, Facing, HandScorer, KeyValueStore, Session,
    SessionError, Snapshot, Suit, Value,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    deck: Deck,
    shoe: Deck,
    hand: Vec<Card>,
    seed: u64,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(decks: u8, seed: u32) -> Result<WasmTable, JsValue> {
        let deck = Deck::generate(&DeckOptions::default().with_decks(decks)).map_err(js_err)?;
        let seed = seed as u64;
        let shoe = deck.shuffled_with_seed(seed, Some(Facing::Down));

        Ok(Self {
            deck,
            shoe,
            hand: Vec::new(),
            seed,
        })
    }

    pub fn shuffle(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.shoe = self.deck.shuffled_with_seed(self.seed, Some(Facing::Down));
        self.hand.clear();
    }

    /// Draws the top card into the hand. Returns `null` once the shoe is empty.
    pub fn draw(&mut self, face_up: bool) -> Result<JsValue, JsValue> {
        let Some(mut card) = self.shoe.draw_top() else {
            return Ok(JsValue::NULL);
        };
        if face_up {
            card.set_facing(Facing::Up);
        }
        self.hand.push(card);
        to_js_value(&JsCard::from(card))
    }

    pub fn hand(&self) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self.hand.iter().copied().map(JsCard::from).collect();
        to_js_value(&cards)
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub fn total(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Blackjack.total_hand(&self.hand))
    }

    pub fn best_total(&self) -> u16 {
        Blackjack.best_total(&self.hand)
    }

    pub fn has_blackjack(&self) -> bool {
        Blackjack.has_blackjack(&self.hand)
    }

    pub fn is_bust(&self) -> bool {
        Blackjack.is_bust(&self.hand)
    }

    pub fn cards_remaining(&self) -> u32 {
        self.shoe.len() as u32
    }

    pub fn share_of(&self, value: &str) -> Result<f64, JsValue> {
        let value = value.parse::<Value>().map_err(js_err)?;
        Ok(self.shoe.share_of(value))
    }

    pub fn save_session(&self) -> Result<(), JsValue> {
        let mut session = Session::new(LocalStore::open()?);
        session.load().map_err(js_err)?;
        session
            .save(Snapshot {
                draw_deck: Some(self.shoe.clone()),
                players: None,
            })
            .map_err(js_err)?;
        Ok(())
    }

    /// Restores the shoe from local storage. Returns whether one was found.
    pub fn load_session(&mut self) -> Result<bool, JsValue> {
        let mut session = Session::new(LocalStore::open()?);
        let Some(shoe) = session.load().map_err(js_err)?.draw_deck.clone() else {
            return Ok(false);
        };
        self.shoe = shoe;
        self.hand.clear();
        Ok(true)
    }
}

#[wasm_bindgen]
pub fn suit_color(suit: &str) -> Result<String, JsValue> {
    let color = match parse_suit(suit)?.color() {
        Color::Red => "red",
        Color::Black => "black",
    };
    Ok(color.to_string())
}

#[wasm_bindgen]
pub fn suit_entity(suit: &str) -> Result<String, JsValue> {
    Ok(parse_suit(suit)?.html_entity().to_string())
}

/// `window.localStorage` as a [`KeyValueStore`].
struct LocalStore(web_sys::Storage);

impl LocalStore {
    fn open() -> Result<Self, JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .local_storage()?
            .map(Self)
            .ok_or_else(|| JsValue::from_str("local storage is unavailable"))
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.0.get_item(key).map_err(|_| SessionError::Storage)
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), SessionError> {
        self.0.set_item(key, &value).map_err(|_| SessionError::Storage)
    }
}

#[derive(Serialize)]
struct JsCard {
    value: &'static str,
    suit: &'static str,
    facing: Facing,
    id: String,
    color: Color,
    entity: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            value: card.value().symbol(),
            suit: card.suit().name(),
            facing: card.facing(),
            id: card.id().to_string(),
            color: card.color(),
            entity: card.suit().html_entity(),
        }
    }
}

fn parse_suit(name: &str) -> Result<Suit, JsValue> {
    Suit::ALL
        .into_iter()
        .find(|suit| suit.name() == name)
        .ok_or_else(|| JsValue::from_str("unknown suit"))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
