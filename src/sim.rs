use crate::card::{CardError, Decks};
use crate::game::Game;
use crate::global::{CHANCE_CARDS, CHEST_CARDS};
use crate::randroll::{FairDice, RollGen, ScriptError, ScriptedRolls};
use crate::roll::Roll;
use crate::rolliter::RollIter;
use crate::spacecounts::SpaceCounts;
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::io::{self, Read};

/// Mixed into a game's seed to get its shuffle seed, so dice and shuffles don't share a stream
const SHUFFLE_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug)]
pub enum ConfigError {
    NoGames(),
    NoMoves(),
    Card(CardError),
    Script(ScriptError),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoGames() => write!(f, "Must simulate at least one game"),
            ConfigError::NoMoves() => write!(f, "Games must be at least one move long"),
            ConfigError::Card(e) => write!(f, "Bad deck: {}", e),
            ConfigError::Script(e) => write!(f, "Bad rolls: {}", e),
            ConfigError::Io(e) => write!(f, "Error reading input: {}", e),
            ConfigError::Parse(e) => write!(f, "Error parsing config: {}", e),
        }
    }
}

impl From<CardError> for ConfigError {
    fn from(e: CardError) -> Self {
        ConfigError::Card(e)
    }
}

impl From<ScriptError> for ConfigError {
    fn from(e: ScriptError) -> Self {
        ConfigError::Script(e)
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub games: u32,
    pub moves: u32,
    /// Drawn at random when not given
    pub seed: Option<u64>,
    /// Shuffle both decks at the start of every game instead of using their fixed order
    pub shuffle: bool,
    pub chance_cards: Vec<i8>,
    pub chest_cards: Vec<i8>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 10_000,
            moves: 40,
            seed: None,
            shuffle: false,
            chance_cards: CHANCE_CARDS.to_vec(),
            chest_cards: CHEST_CARDS.to_vec(),
        }
    }
}

impl SimConfig {
    /// Read a JSON config. Fields left out keep their defaults.
    pub fn from_reader<R: Read>(r: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Check everything the simulation needs and build the canonical decks
    pub fn validate(&self) -> Result<Decks, ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames());
        }
        if self.moves == 0 {
            return Err(ConfigError::NoMoves());
        }
        Ok(Decks::new(&self.chance_cards, &self.chest_cards)?)
    }
}

/// Read every recorded roll, failing on a read error or when there are none
pub fn load_rolls<R: Read>(input: R) -> Result<Vec<Roll>, ConfigError> {
    let rolls = RollIter::new(input).collect::<io::Result<Vec<Roll>>>()?;
    if rolls.is_empty() {
        return Err(ScriptError::Empty().into());
    }
    Ok(rolls)
}

#[derive(Debug, Clone)]
pub struct SimReport {
    pub games: u32,
    pub moves: u32,
    /// The seed the dice were derived from, None when rolls were scripted
    pub seed: Option<u64>,
    pub shuffled: bool,
    pub counts: SpaceCounts,
}

/// Run every game in parallel, each with its own dice from `make_dice(game_index)` and its own
/// copy of the decks, and sum up their counts.
fn run_games<F>(config: &SimConfig, decks: &Decks, shuffle_seed: u64, make_dice: F) -> SpaceCounts
where
    F: Fn(u32) -> Box<dyn RollGen> + Sync,
{
    let moves = config.moves;
    let shuffle = config.shuffle;
    (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut game = Game::new(make_dice(i), decks.clone());
            if shuffle {
                let mut rng = StdRng::seed_from_u64(shuffle_seed.wrapping_add(i as u64));
                game.shuffle_decks(&mut rng);
            }
            game.run(moves)
        })
        .reduce(SpaceCounts::default, |mut a, b| {
            a.merge(&b);
            a
        })
}

/// Simulate with fair dice. Game `i` rolls from a generator seeded with `seed + i`, so a given
/// seed always produces the same counts no matter how many threads run.
pub fn simulate(config: &SimConfig) -> Result<SimReport, ConfigError> {
    let decks = config.validate()?;
    let seed = match config.seed {
        Some(s) => s,
        None => thread_rng().gen(),
    };
    info!(
        "Simulating {} games of {} moves with seed {} (shuffle: {})",
        config.games, config.moves, seed, config.shuffle
    );
    let counts = run_games(config, &decks, seed ^ SHUFFLE_SEED_MIX, |i| {
        Box::new(FairDice::from_seed(seed.wrapping_add(i as u64))) as Box<dyn RollGen>
    });
    Ok(SimReport {
        games: config.games,
        moves: config.moves,
        seed: Some(seed),
        shuffled: config.shuffle,
        counts,
    })
}

/// Simulate with recorded rolls. The games use the script back to back as if played one after
/// another, game `i` starting at roll `i * moves`, wrapping around when the script runs out.
pub fn simulate_scripted(config: &SimConfig, rolls: Vec<Roll>) -> Result<SimReport, ConfigError> {
    let decks = config.validate()?;
    let num_rolls = rolls.len();
    let script = ScriptedRolls::new(rolls)?;
    info!(
        "Replaying {} rolls over {} games of {} moves (shuffle: {})",
        num_rolls, config.games, config.moves, config.shuffle
    );
    let shuffle_seed = config.seed.unwrap_or(0) ^ SHUFFLE_SEED_MIX;
    let moves = config.moves as u64;
    let counts = run_games(config, &decks, shuffle_seed, |i| {
        Box::new(script.clone().advanced(i as u64 * moves)) as Box<dyn RollGen>
    });
    Ok(SimReport {
        games: config.games,
        moves: config.moves,
        seed: None,
        shuffled: config.shuffle,
        counts,
    })
}
