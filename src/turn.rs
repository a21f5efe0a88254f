use crate::card::{Card, Decks};
use crate::global::{
    CHANCE_SPOTS, CHEST_SPOTS, GO_TO_JAIL, JAIL, JAIL_TURNS, MAX_DOUBLES, SPACES,
};
use crate::player::PlayerState;
use crate::roll::Roll;
use crate::spacecounts::SpaceCounts;
use std::fmt;

/// What happened during one resolved turn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Turn {
    pub roll: Roll,
    /// True if the player sat in jail instead of moving
    pub stayed: bool,
    pub landed: u8,
    pub chance: Option<Card>,
    pub chest: Option<Card>,
    pub ended: u8,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rolled {} landed {} ended {}", self.roll, self.landed, self.ended)?;
        if self.stayed {
            write!(f, " (in jail)")?;
        }
        if let Some(c) = self.chance {
            write!(f, " chance {}", c)?;
        }
        if let Some(c) = self.chest {
            write!(f, " chest {}", c)?;
        }
        Ok(())
    }
}

pub fn advance(pos: u8, by: u8) -> u8 {
    ((pos as u16 + by as u16) % SPACES as u16) as u8
}

pub fn back(pos: u8, by: u8) -> u8 {
    advance(pos, SPACES - by % SPACES)
}

/// Railroads sit at 5, 15, 25 and 35. This rounds pos to the nearest ten (halves go up) and
/// adds five, so it isn't always the closest one ahead: from 7 it goes to 15.
pub fn nearest_railroad(pos: u8) -> u8 {
    ((pos + 5) / 10 * 10 + 5) % SPACES
}

fn send_to_jail(state: &mut PlayerState) {
    state.position = JAIL;
    state.jail_turns = JAIL_TURNS;
}

fn apply_card(state: &mut PlayerState, card: Card) {
    match card {
        Card::NoEffect => {}
        Card::BackThree => state.position = back(state.position, 3),
        Card::NearestRailroad => state.position = nearest_railroad(state.position),
        Card::GoTo(p) => {
            if p == JAIL {
                send_to_jail(state);
            } else {
                state.position = p;
            }
        }
    }
}

/// Play one turn with the given roll, updating the player, the decks, and the counts.
///
/// A jailed player only moves on doubles, otherwise they burn one jail turn. After moving, a
/// chance spot draws a chance card, then if the player is (now) on a chest spot a chest card is
/// drawn, then the go to jail space is checked. Neither card is drawn twice in a turn. Three
/// doubles in a row send the player to jail no matter where all that left them.
pub fn resolve_turn(
    state: &mut PlayerState,
    roll: Roll,
    decks: &mut Decks,
    counts: &mut SpaceCounts,
) -> Turn {
    let mut turn = Turn {
        roll,
        stayed: false,
        landed: state.position,
        chance: None,
        chest: None,
        ended: state.position,
    };
    // doubles get you out of jail right away, but leave jail_turns alone
    if !state.in_jail() || roll.is_doubles() {
        state.position = advance(state.position, roll.value());
        turn.landed = state.position;
        counts.add_land(state.position);
        if CHANCE_SPOTS.contains(&state.position) {
            let card = decks.chance.draw();
            apply_card(state, card);
            turn.chance = Some(card);
        }
        if CHEST_SPOTS.contains(&state.position) {
            let card = decks.chest.draw();
            apply_card(state, card);
            turn.chest = Some(card);
        }
        if state.position == GO_TO_JAIL {
            send_to_jail(state);
        }
    } else {
        turn.stayed = true;
        counts.add_land(state.position);
        state.jail_turns -= 1;
    }

    if roll.is_doubles() {
        state.doubles += 1;
        if state.doubles >= MAX_DOUBLES {
            send_to_jail(state);
            state.doubles = 0;
        }
    } else {
        state.doubles = 0;
    }
    debug_assert!(state.position < SPACES);
    counts.add_end(state.position);
    turn.ended = state.position;
    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global::{CHANCE_CARDS, CHEST_CARDS};
    use crate::roll::all_pairs;

    fn r(d1: u8, d2: u8) -> Roll {
        Roll::new([d1, d2]).unwrap()
    }

    fn decks_with_chance(chance: &[i8]) -> Decks {
        Decks::new(chance, &CHEST_CARDS).unwrap()
    }

    #[test]
    fn position_math() {
        assert_eq!(advance(38, 5), 3);
        assert_eq!(advance(0, 12), 12);
        assert_eq!(back(1, 3), 38);
        assert_eq!(back(7, 3), 4);
        assert_eq!(back(0, 3), 37);
    }

    #[test]
    fn railroad_targets() {
        assert_eq!(nearest_railroad(3), 5);
        assert_eq!(nearest_railroad(24), 25);
        assert_eq!(nearest_railroad(37), 5);
        assert_eq!(nearest_railroad(7), 15);
        assert_eq!(nearest_railroad(22), 25);
        assert_eq!(nearest_railroad(36), 5);
        for pos in 0..SPACES {
            assert_eq!(nearest_railroad(pos) % 10, 5);
        }
    }

    #[test]
    fn always_on_board() {
        // every start, every roll, every jail and doubles count, every chance deck rotation
        for rotation in 0..CHANCE_CARDS.len() {
            for pos in 0..SPACES {
                for jail in 0..=JAIL_TURNS {
                    for doubles in 0..MAX_DOUBLES {
                        for (d1, d2) in all_pairs() {
                            let mut decks = Decks::standard();
                            for _ in 0..rotation {
                                decks.chance.draw();
                                decks.chest.draw();
                            }
                            let mut counts = SpaceCounts::default();
                            let mut state = PlayerState {
                                position: pos,
                                jail_turns: jail,
                                doubles,
                            };
                            let t = resolve_turn(&mut state, r(d1, d2), &mut decks, &mut counts);
                            assert!(state.position < SPACES);
                            assert!(state.doubles < MAX_DOUBLES);
                            assert!(state.jail_turns <= JAIL_TURNS);
                            assert_eq!(t.ended, state.position);
                            assert_eq!(counts.total_lands(), 1);
                            assert_eq!(counts.total_ends(), 1);
                            assert_eq!(counts.ends()[state.position as usize], 1);
                            assert_eq!(counts.lands()[t.landed as usize], 1);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn plain_move() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(3);
        let t = resolve_turn(&mut state, r(5, 6), &mut decks, &mut counts);
        assert_eq!(state.position, 14);
        assert_eq!(t.landed, 14);
        assert_eq!(t.chance, None);
        assert_eq!(t.chest, None);
        assert_eq!(counts.lands()[14], 1);
        assert_eq!(counts.ends()[14], 1);
    }

    #[test]
    fn wraps_past_go() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(35);
        resolve_turn(&mut state, r(4, 5), &mut decks, &mut counts);
        assert_eq!(state.position, 4);
    }

    #[test]
    fn three_doubles_to_jail() {
        for start in 0..SPACES {
            for d in 1..=6 {
                let mut decks = Decks::standard();
                let mut counts = SpaceCounts::default();
                let mut state = PlayerState::at(start);
                resolve_turn(&mut state, r(d, d), &mut decks, &mut counts);
                assert_eq!(state.doubles, 1);
                resolve_turn(&mut state, r(d, d), &mut decks, &mut counts);
                assert_eq!(state.doubles, 2);
                resolve_turn(&mut state, r(d, d), &mut decks, &mut counts);
                assert_eq!(state.position, JAIL);
                assert_eq!(state.jail_turns, JAIL_TURNS);
                assert_eq!(state.doubles, 0);
                assert!(counts.ends()[JAIL as usize] >= 1);
            }
        }
    }

    #[test]
    fn three_doubles_override_card_move() {
        // the third double lands on chance 7, and the chance card would send us to GO
        let mut decks = decks_with_chance(&[0]);
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState {
            position: 5,
            jail_turns: 0,
            doubles: 2,
        };
        let t = resolve_turn(&mut state, r(1, 1), &mut decks, &mut counts);
        assert_eq!(t.landed, 7);
        assert_eq!(t.chance, Some(Card::GoTo(0)));
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);
        assert_eq!(counts.lands()[7], 1);
        assert_eq!(counts.ends()[JAIL as usize], 1);
    }

    #[test]
    fn non_doubles_reset_streak() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(0);
        resolve_turn(&mut state, r(2, 2), &mut decks, &mut counts);
        resolve_turn(&mut state, r(3, 3), &mut decks, &mut counts);
        assert_eq!(state.doubles, 2);
        resolve_turn(&mut state, r(1, 2), &mut decks, &mut counts);
        assert_eq!(state.doubles, 0);
        resolve_turn(&mut state, r(4, 4), &mut decks, &mut counts);
        assert_eq!(state.doubles, 1);
        assert_ne!(state.position, JAIL);
    }

    #[test]
    fn jail_stay_on_non_doubles() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState {
            position: JAIL,
            jail_turns: 2,
            doubles: 0,
        };
        let t = resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert!(t.stayed);
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, 1);
        assert_eq!(counts.lands()[JAIL as usize], 1);
        assert_eq!(counts.ends()[JAIL as usize], 1);
        resolve_turn(&mut state, r(1, 2), &mut decks, &mut counts);
        assert_eq!(state.jail_turns, 0);
        assert_eq!(state.position, JAIL);
        // sentence served, next roll moves
        resolve_turn(&mut state, r(1, 2), &mut decks, &mut counts);
        assert_eq!(state.position, 13);
    }

    #[test]
    fn jail_release_on_doubles() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState {
            position: JAIL,
            jail_turns: 2,
            doubles: 0,
        };
        let t = resolve_turn(&mut state, r(2, 2), &mut decks, &mut counts);
        assert!(!t.stayed);
        assert_eq!(state.position, 14);
        assert_eq!(state.jail_turns, 2);
        assert_eq!(counts.lands()[14], 1);
        assert_eq!(counts.lands()[JAIL as usize], 0);
    }

    #[test]
    fn go_to_jail_space() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(25);
        let t = resolve_turn(&mut state, r(2, 3), &mut decks, &mut counts);
        assert_eq!(t.landed, GO_TO_JAIL);
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);
        assert_eq!(counts.lands()[GO_TO_JAIL as usize], 1);
        assert_eq!(counts.ends()[JAIL as usize], 1);
        assert_eq!(counts.ends()[GO_TO_JAIL as usize], 0);
    }

    #[test]
    fn go_to_jail_after_cards() {
        // a chance card and a chest card that both point at the go to jail space
        let mut decks = Decks::new(&[30], &[30]).unwrap();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(15);
        resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);

        let mut state = PlayerState::at(12);
        let t = resolve_turn(&mut state, r(2, 3), &mut decks, &mut counts);
        assert_eq!(t.chest, Some(Card::GoTo(30)));
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);
    }

    #[test]
    fn railroad_card() {
        let mut decks = decks_with_chance(&[-5]);
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(15);
        resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert_eq!(state.position, 25);
        assert_eq!(counts.lands()[22], 1);
        assert_eq!(counts.ends()[25], 1);

        let mut state = PlayerState::at(29);
        resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert_eq!(state.position, 5);
    }

    #[test]
    fn chance_jail_card() {
        let mut decks = decks_with_chance(&[10]);
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(0);
        resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);
        assert_eq!(counts.lands()[7], 1);
    }

    #[test]
    fn chest_jail_card() {
        let mut decks = Decks::new(&CHANCE_CARDS, &[10]).unwrap();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(0);
        resolve_turn(&mut state, r(1, 1), &mut decks, &mut counts);
        assert_eq!(state.position, JAIL);
        assert_eq!(state.jail_turns, JAIL_TURNS);
    }

    #[test]
    fn back_three_into_chest() {
        // 36 is chance, back three is 33 which is chest, whose top card goes to GO
        let mut decks = decks_with_chance(&[-3]);
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(31);
        let t = resolve_turn(&mut state, r(2, 3), &mut decks, &mut counts);
        assert_eq!(t.landed, 36);
        assert_eq!(t.chance, Some(Card::BackThree));
        assert_eq!(t.chest, Some(Card::GoTo(0)));
        assert_eq!(state.position, 0);
        assert_eq!(counts.lands()[36], 1);
        assert_eq!(counts.lands()[33], 0);
        assert_eq!(counts.ends()[0], 1);
        assert_eq!(decks.chance.order(), vec![Card::BackThree]);
    }

    #[test]
    fn back_three_no_second_chance_draw() {
        // back three from 7 is 4: no card spot, only one chance card drawn
        let mut decks = decks_with_chance(&[-3, 0]);
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::at(2);
        resolve_turn(&mut state, r(2, 3), &mut decks, &mut counts);
        assert_eq!(state.position, 4);
        assert_eq!(decks.chance.draw(), Card::GoTo(0));
    }

    #[test]
    fn standard_first_chance_is_blank() {
        let mut decks = Decks::standard();
        let mut counts = SpaceCounts::default();
        let mut state = PlayerState::new();
        let t = resolve_turn(&mut state, r(3, 4), &mut decks, &mut counts);
        assert_eq!(t.chance, Some(Card::NoEffect));
        assert_eq!(state.position, 7);
    }
}
