pub mod card;
pub mod game;
pub mod global;
pub mod player;
pub mod randroll;
pub mod report;
pub mod roll;
pub mod rolliter;
pub mod sim;
pub mod spacecounts;
pub mod turn;
