use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::rules::legal_moves;

/// Zero-based seat index within the game.
pub type SeatIndex = usize;

/// A seat as requested by the lobby before the game starts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub name: String,
    pub is_ai: bool,
}

impl Seat {
    pub fn human(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_ai: false,
        }
    }

    pub fn ai(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_ai: true,
        }
    }
}

/// A seated participant together with their hand.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub is_ai: bool,
    pub hand: Vec<Card>,
}

/// Turn order: `+1` follows seating order, `-1` runs against it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.step() as i8
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            other => Err(format!("direction must be 1 or -1, got {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// The authoritative game record. Every transition reads and writes only this value, so it
/// can be persisted and broadcast as-is between actions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub participants: Vec<Participant>,
    pub current_index: SeatIndex,
    pub direction: Direction,
    pub pending_skip: bool,
    pub attack_stack: u32,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_index: Option<SeatIndex>,
    /// Bumped by every accepted transition.
    #[serde(default)]
    pub version: u64,
}

/// Notifications emitted by a transition for the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum GameEvent {
    CardPlayed { seat: SeatIndex, card: Card },
    CardsDrawn { seat: SeatIndex, count: usize },
    /// A hand is down to its last card.
    UnoCall { seat: SeatIndex },
    AttackStackChanged { from: u32, to: u32 },
    #[serde(rename_all = "camelCase")]
    TurnAdvanced { current_index: SeatIndex },
    #[serde(rename_all = "camelCase")]
    GameFinished { winner_index: SeatIndex },
}

/// Public information about one seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat: SeatIndex,
    pub name: String,
    pub is_ai: bool,
    pub hand_size: usize,
    pub is_current: bool,
}

/// What one seat is allowed to see. Bots decide from this alone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub self_seat: SeatIndex,
    pub current_index: SeatIndex,
    pub direction: Direction,
    pub attack_stack: u32,
    pub active_card: Card,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub status: GameStatus,
    pub winner_index: Option<SeatIndex>,
    pub seats: Vec<SeatView>,
    pub hand: Vec<Card>,
}

impl PlayerView {
    pub fn legal_moves(&self) -> Vec<Card> {
        legal_moves(&self.hand, &self.active_card, self.attack_stack)
    }

    pub fn is_my_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_index == self.self_seat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serializes_as_sign() {
        assert_eq!(i8::from(Direction::Clockwise), 1);
        assert_eq!(i8::from(Direction::CounterClockwise), -1);
        assert_eq!(Direction::try_from(-1i8), Ok(Direction::CounterClockwise));
        assert!(Direction::try_from(0i8).is_err());
        assert_eq!(Direction::Clockwise.reversed().reversed(), Direction::Clockwise);
    }
}
