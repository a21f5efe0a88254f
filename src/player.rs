use crate::global::SPACES;
use std::fmt;

/// Everything we track about the single player in a game. No money, no property.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Always in 0..SPACES
    pub position: u8,
    /// Non-doubles turns left to sit out in jail
    pub jail_turns: u8,
    /// Doubles rolled in a row, reset once it sends the player to jail
    pub doubles: u8,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    pub fn at(position: u8) -> Self {
        assert!(position < SPACES);
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn in_jail(&self) -> bool {
        self.jail_turns > 0
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player<pos {}, jail {}, dbl {}>",
            self.position, self.jail_turns, self.doubles
        )
    }
}
