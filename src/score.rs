//! Scoring utilities for finished games.
//!
//! Card values: number cards score their rank, skip/reverse/draw-two score 20 and both
//! wild kinds score 50. The winner collects the value of every card left in the other hands.

use crate::card::{Card, Face};
use crate::state::{GameState, SeatIndex};

pub const ACTION_POINTS: u32 = 20;
pub const WILD_POINTS: u32 = 50;

pub fn card_points(card: &Card) -> u32 {
    match card.face {
        Face::Number { rank, .. } => u32::from(rank),
        Face::Action { .. } => ACTION_POINTS,
        Face::Wild { .. } => WILD_POINTS,
    }
}

pub fn hand_points(hand: &[Card]) -> u32 {
    hand.iter().map(card_points).sum()
}

/// Points for `winner`: the total of all opponents' remaining hands.
pub fn winner_points(state: &GameState, winner: SeatIndex) -> u32 {
    state
        .participants
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat != winner)
        .map(|(_, participant)| hand_points(&participant.hand))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ActionKind, Color, WildKind};
    use crate::state::{Direction, GameStatus, Participant};

    fn finished_state(hands: Vec<Vec<Card>>, winner: SeatIndex) -> GameState {
        let participants = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Participant {
                id: format!("p{i}"),
                name: format!("Player {i}"),
                is_ai: false,
                hand,
            })
            .collect();
        GameState {
            participants,
            current_index: winner,
            direction: Direction::Clockwise,
            pending_skip: false,
            attack_stack: 0,
            draw_pile: Vec::new(),
            discard_pile: vec![Card::number(99, Color::Red, 1)],
            status: GameStatus::Finished,
            winner_index: Some(winner),
            version: 0,
        }
    }

    #[test]
    fn test_card_points() {
        assert_eq!(card_points(&Card::number(0, Color::Red, 7)), 7);
        assert_eq!(card_points(&Card::action(1, Color::Red, ActionKind::Skip)), 20);
        assert_eq!(card_points(&Card::wild(2, WildKind::WildDrawFour)), 50);
    }

    #[test]
    fn test_winner_points_three_players() {
        // Opponents hold 9 + 20 and 50 => 79
        let state = finished_state(
            vec![
                vec![
                    Card::number(0, Color::Blue, 9),
                    Card::action(1, Color::Green, ActionKind::Reverse),
                ],
                vec![],
                vec![Card::wild(2, WildKind::Wild)],
            ],
            1,
        );
        assert_eq!(winner_points(&state, 1), 79);
    }

    #[test]
    fn test_winner_points_all_opponents_empty() {
        let state = finished_state(vec![vec![], vec![]], 0);
        assert_eq!(winner_points(&state, 0), 0);
    }
}
