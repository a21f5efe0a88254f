use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// A die showed something other than 1 through 6
#[derive(Debug)]
pub struct RollError(pub u8);

impl Error for RollError {}
impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no die face {}", self.0)
    }
}

/// Both dice of one throw. Doubles get the player out of jail, three in a row put them in.
#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug)]
pub struct Roll([u8; 2]);

impl Roll {
    pub fn new(dice: [u8; 2]) -> Result<Self, RollError> {
        match dice.iter().find(|d| !(1..=6).contains(*d)) {
            Some(bad) => Err(RollError(*bad)),
            None => Ok(Self(dice)),
        }
    }

    /// Spaces to move
    pub fn value(self) -> u8 {
        self.0[0] + self.0[1]
    }

    pub fn dice(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn is_doubles(self) -> bool {
        self.0[0] == self.0[1]
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
pub(crate) fn all_pairs() -> Vec<(u8, u8)> {
    let mut v = vec![];
    for d1 in [1, 2, 3, 4, 5, 6].iter() {
        for d2 in [1, 2, 3, 4, 5, 6].iter() {
            v.push((*d1, *d2));
        }
    }
    v
}
