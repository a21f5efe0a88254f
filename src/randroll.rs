use crate::roll::{Roll, RollError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;

/// A source of dice rolls. Each game owns its own.
pub trait RollGen {
    fn gen(&mut self) -> Roll;
}

/// Two fair dice driven by a seeded generator
#[derive(Debug, Clone)]
pub struct FairDice {
    rng: StdRng,
}

impl FairDice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RollGen for FairDice {
    fn gen(&mut self) -> Roll {
        let d1: u8 = self.rng.gen_range(1, 7);
        let d2: u8 = self.rng.gen_range(1, 7);
        // unwrap ok: gen_range is exclusive of the upper bound
        Roll::new([d1, d2]).unwrap()
    }
}

#[derive(Debug)]
pub enum ScriptError {
    Empty(),
    BadRoll(RollError),
}

impl Error for ScriptError {}
impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScriptError::Empty() => write!(f, "a roll script needs at least one roll"),
            ScriptError::BadRoll(e) => write!(f, "bad roll in script: {}", e),
        }
    }
}

impl From<RollError> for ScriptError {
    fn from(e: RollError) -> Self {
        ScriptError::BadRoll(e)
    }
}

/// Replays a fixed list of rolls, starting over from the top once it runs out
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: Vec<Roll>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: Vec<Roll>) -> Result<Self, ScriptError> {
        if rolls.is_empty() {
            return Err(ScriptError::Empty());
        }
        Ok(Self { rolls, next: 0 })
    }

    /// Skip ahead `n` rolls, wrapping around the script as needed
    pub fn advanced(mut self, n: u64) -> Self {
        let len = self.rolls.len() as u64;
        self.next = ((self.next as u64 + n % len) % len) as usize;
        self
    }

    /// Convenience for building a script out of plain die pairs
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, ScriptError> {
        let rolls = pairs
            .iter()
            .map(|(d1, d2)| Roll::new([*d1, *d2]))
            .collect::<Result<Vec<Roll>, _>>()?;
        Self::new(rolls)
    }
}

impl RollGen for ScriptedRolls {
    fn gen(&mut self) -> Roll {
        let r = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        r
    }
}

#[cfg(test)]
mod fairdice_tests {
    use super::FairDice;
    use super::RollGen;

    #[test]
    fn always_valid() {
        let mut w = FairDice::from_seed(1);
        for _ in 0..1000 {
            let r = w.gen();
            assert!(r.value() >= 2 && r.value() <= 12);
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = FairDice::from_seed(42);
        let mut b = FairDice::from_seed(42);
        for _ in 0..1000 {
            assert_eq!(a.gen(), b.gen());
        }
    }

    #[test]
    fn roughly_uniform() {
        let mut w = FairDice::from_seed(7);
        let n = 60_000;
        let mut faces = [0u32; 6];
        let mut doubles = 0;
        for _ in 0..n {
            let r = w.gen();
            faces[r.dice()[0] as usize - 1] += 1;
            faces[r.dice()[1] as usize - 1] += 1;
            if r.is_doubles() {
                doubles += 1;
            }
        }
        for f in faces.iter() {
            let frac = *f as f64 / (2 * n) as f64;
            assert!(frac > 0.15 && frac < 0.18, "face frac {}", frac);
        }
        let frac = doubles as f64 / n as f64;
        assert!(frac > 0.15 && frac < 0.18, "doubles frac {}", frac);
    }
}
