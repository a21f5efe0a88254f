pub const SPACES: u8 = 40;
pub const CHANCE_SPOTS: [u8; 3] = [7, 22, 36];
pub const CHEST_SPOTS: [u8; 3] = [2, 17, 33];
pub const GO_TO_JAIL: u8 = 30;
pub const JAIL: u8 = 10;
/// How many non-doubles turns a freshly jailed player sits out
pub const JAIL_TURNS: u8 = 2;
/// Consecutive doubles that send the player to jail
pub const MAX_DOUBLES: u8 = 3;

/// Where the chance cards send the player. See card::Card for the meaning of the codes.
pub const CHANCE_CARDS: [i8; 15] = [-1, -1, -1, -1, -1, -1, -5, -5, -3, 0, 5, 10, 11, 24, 39];
/// Where the community chest cards send the player.
pub const CHEST_CARDS: [i8; 15] = [0, -1, -1, -1, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1];

pub const SPACE_NAMES: [&str; SPACES as usize] = [
    "GO",
    "Mediterranean Avenue",
    "Community Chest 1",
    "Baltic Avenue",
    "Income Tax",
    "Reading Railroad",
    "Oriental Avenue",
    "Chance 1",
    "Vermont Avenue",
    "Connecticut Avenue",
    "Jail",
    "St. Charles Place",
    "Electric Company",
    "States Avenue",
    "Virginia Avenue",
    "Pennsylvania Railroad",
    "St. James Place",
    "Community Chest 2",
    "Tennessee Avenue",
    "New York Avenue",
    "Free Parking",
    "Kentucky Avenue",
    "Chance 2",
    "Indiana Avenue",
    "Illinois Avenue",
    "B&O Railroad",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Water Works",
    "Marvin Gardens",
    "Go To Jail",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Community Chest 3",
    "Pennsylvania Avenue",
    "Short Line",
    "Chance 3",
    "Park Place",
    "Luxury Tax",
    "Boardwalk",
];

pub mod conf_def {
    pub const NUM_GAMES: &str = "10000";
    pub const NUM_MOVES: &str = "40";
}
