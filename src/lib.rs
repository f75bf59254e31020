//! Rules and turn-state engine for an UNO-style shedding card game, with computer opponents.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod effect;
pub mod error;
pub mod game;
pub mod policy;
pub mod rules;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::Decision;
pub use crate::bot::Bot;
pub use crate::bots::registry::{bot_for_difficulty, create_bot_from_spec, label_for_spec};
pub use crate::bots::{HeuristicBot, HumanBot, RandomBot};
pub use crate::card::{ActionKind, Card, CardId, CardKind, Color, Face, WildKind, build_deck};
pub use crate::error::GameError;
pub use crate::game::{GameBuilder, GameConfig, initialize};
pub use crate::policy::{Difficulty, choose_color, decide};
pub use crate::rules::{can_play, check_win, legal_moves};
pub use crate::score::{hand_points, winner_points};
pub use crate::state::{
    Direction, GameEvent, GameState, GameStatus, Participant, PlayerView, Seat, SeatIndex,
    SeatView,
};
pub use crate::visualize::{describe_decision, render_view};
