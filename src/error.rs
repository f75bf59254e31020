use thiserror::Error;

use crate::card::{Card, CardId};
use crate::state::SeatIndex;

/// Reasons an operation on the game state was rejected. A rejected operation leaves the
/// state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("seat index {0} is out of range")]
    InvalidSeat(SeatIndex),
    #[error("participant {0:?} is not seated in this game")]
    UnknownParticipant(String),
    #[error("it is not {0:?}'s turn")]
    NotYourTurn(String),
    #[error("card {0} is not held by the acting participant")]
    CardNotHeld(CardId),
    #[error("{card} cannot be played on {active}")]
    IllegalPlay { card: Card, active: Card },
    #[error("a color must be chosen when playing {0}")]
    ColorRequired(Card),
    #[error("cannot draw {requested} card(s): only {available} left in draw and discard piles")]
    DeckExhausted { requested: usize, available: usize },
    #[error("deck cannot deal {hand_size} cards to {participants} participants plus a starting card")]
    InsufficientDeck {
        participants: usize,
        hand_size: usize,
    },
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
