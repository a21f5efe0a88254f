use crate::card::Decks;
use crate::player::PlayerState;
use crate::randroll::RollGen;
use crate::spacecounts::SpaceCounts;
use crate::turn::{resolve_turn, Turn};
use log::{debug, trace};
use rand::Rng;

/// One game: a fresh player, its own decks and dice, and the counts it has produced so far
pub struct Game {
    state: PlayerState,
    decks: Decks,
    roll_gen: Box<dyn RollGen>,
    counts: SpaceCounts,
}

impl Game {
    /// The decks are put back in canonical order before the first turn
    pub fn new(roll_gen: Box<dyn RollGen>, mut decks: Decks) -> Self {
        decks.reset();
        Game {
            state: PlayerState::new(),
            decks,
            roll_gen,
            counts: Default::default(),
        }
    }

    pub fn shuffle_decks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.decks.shuffle(rng);
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn decks(&self) -> &Decks {
        &self.decks
    }

    pub fn counts(&self) -> &SpaceCounts {
        &self.counts
    }

    pub fn loop_once(&mut self) -> Turn {
        let r = self.roll_gen.gen();
        let turn = resolve_turn(&mut self.state, r, &mut self.decks, &mut self.counts);
        trace!("{} now {}", turn, self.state);
        turn
    }

    /// Play `moves` turns and hand back this game's counts
    pub fn run(mut self, moves: u32) -> SpaceCounts {
        for _ in 0..moves {
            self.loop_once();
        }
        debug!("Game done at {}", self.state);
        self.counts
    }
}
