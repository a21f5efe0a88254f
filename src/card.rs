use crate::global::{CHANCE_CARDS, CHEST_CARDS, SPACES};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeckKind {
    Chance,
    Chest,
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckKind::Chance => write!(f, "chance"),
            DeckKind::Chest => write!(f, "community chest"),
        }
    }
}

#[derive(Debug)]
pub enum CardError {
    UnknownCode(DeckKind, i8),
    EmptyDeck(DeckKind),
}

impl Error for CardError {}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardError::UnknownCode(kind, code) => {
                write!(f, "Card code {} is not valid in the {} deck", code, kind)
            }
            CardError::EmptyDeck(kind) => write!(f, "The {} deck has no cards", kind),
        }
    }
}

/// What drawing a card does to the player
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Card {
    /// Code -1
    NoEffect,
    /// Code -3, chance only
    BackThree,
    /// Code -5, chance only
    NearestRailroad,
    /// Codes 0 through 39. GoTo(10) is a trip to jail.
    GoTo(u8),
}

impl Card {
    pub fn from_code(kind: DeckKind, code: i8) -> Result<Card, CardError> {
        match (kind, code) {
            (_, -1) => Ok(Card::NoEffect),
            (DeckKind::Chance, -3) => Ok(Card::BackThree),
            (DeckKind::Chance, -5) => Ok(Card::NearestRailroad),
            (_, c) if c >= 0 && (c as u8) < SPACES => Ok(Card::GoTo(c as u8)),
            (k, c) => Err(CardError::UnknownCode(k, c)),
        }
    }

    pub fn code(self) -> i8 {
        match self {
            Card::NoEffect => -1,
            Card::BackThree => -3,
            Card::NearestRailroad => -5,
            Card::GoTo(p) => p as i8,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::NoEffect => write!(f, "Card<none>"),
            Card::BackThree => write!(f, "Card<back 3>"),
            Card::NearestRailroad => write!(f, "Card<railroad>"),
            Card::GoTo(p) => write!(f, "Card<go to {}>", p),
        }
    }
}

/// A fixed-size pile used as a ring: the top card is drawn and goes back on the bottom.
///
/// The canonical order given at construction is kept so each game can start from it again.
#[derive(Debug, Clone)]
pub struct Deck {
    canonical: Vec<Card>,
    cards: Vec<Card>,
    top: usize,
}

impl Deck {
    pub fn new(kind: DeckKind, codes: &[i8]) -> Result<Self, CardError> {
        if codes.is_empty() {
            return Err(CardError::EmptyDeck(kind));
        }
        let canonical = codes
            .iter()
            .map(|c| Card::from_code(kind, *c))
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Self {
            cards: canonical.clone(),
            canonical,
            top: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Card {
        let c = self.cards[self.top];
        self.top = (self.top + 1) % self.cards.len();
        c
    }

    /// Put the deck back in its canonical order
    pub fn reset(&mut self) {
        self.cards.copy_from_slice(&self.canonical);
        self.top = 0;
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.top = 0;
    }

    /// The cards in draw order, top first
    pub fn order(&self) -> Vec<Card> {
        self.cards[self.top..]
            .iter()
            .chain(self.cards[..self.top].iter())
            .copied()
            .collect()
    }
}

/// The two decks a game draws from
#[derive(Debug, Clone)]
pub struct Decks {
    pub chance: Deck,
    pub chest: Deck,
}

impl Decks {
    pub fn new(chance_codes: &[i8], chest_codes: &[i8]) -> Result<Self, CardError> {
        Ok(Self {
            chance: Deck::new(DeckKind::Chance, chance_codes)?,
            chest: Deck::new(DeckKind::Chest, chest_codes)?,
        })
    }

    pub fn standard() -> Self {
        // unwrap ok: the built-in decks only hold valid codes
        Self::new(&CHANCE_CARDS, &CHEST_CARDS).unwrap()
    }

    pub fn reset(&mut self) {
        self.chance.reset();
        self.chest.reset();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.chance.shuffle(rng);
        self.chest.shuffle(rng);
    }
}
