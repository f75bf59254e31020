//! Card and color selection for computer-controlled seats.
//!
//! Every function here is a pure function of the deciding seat's hand and the table. No
//! other hand is ever consulted.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::action::Decision;
use crate::card::{Card, CardId, CardKind, Color};
use crate::rules::legal_moves;

/// Strength of a computer opponent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Uniformly random among legal moves.
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Picks a move for `hand` against the table. Returns [`Decision::Draw`] exactly when no
/// card in `hand` is playable.
///
/// `rng` is only consulted on [`Difficulty::Easy`].
pub fn decide<R: Rng + ?Sized>(
    hand: &[Card],
    active: &Card,
    attack_stack: u32,
    difficulty: Difficulty,
    rng: &mut R,
) -> Decision {
    match difficulty {
        Difficulty::Easy => decide_random(hand, active, attack_stack, rng),
        Difficulty::Medium | Difficulty::Hard => decide_heuristic(hand, active, attack_stack),
    }
}

/// Uniform choice among the legal moves.
pub fn decide_random<R: Rng + ?Sized>(
    hand: &[Card],
    active: &Card,
    attack_stack: u32,
    rng: &mut R,
) -> Decision {
    let moves = legal_moves(hand, active, attack_stack);
    match moves.choose(rng) {
        Some(card) => play(hand, *card),
        None => Decision::Draw,
    }
}

/// Priority play:
/// 1. answer a pending attack with an attack card,
/// 2. action cards, draw-two before skip before reverse,
/// 3. the highest number card,
/// 4. a wild as the last resort.
///
/// Ties go to the card that comes first in the hand.
pub fn decide_heuristic(hand: &[Card], active: &Card, attack_stack: u32) -> Decision {
    let moves = legal_moves(hand, active, attack_stack);
    match preferred_card(&moves, attack_stack) {
        Some(card) => play(hand, card),
        None => Decision::Draw,
    }
}

fn preferred_card(moves: &[Card], attack_stack: u32) -> Option<Card> {
    let first_of = |kind: CardKind| moves.iter().find(|card| card.kind() == kind).copied();

    if attack_stack > 0 {
        if let Some(card) = moves.iter().find(|card| card.kind().is_attack()) {
            return Some(*card);
        }
    }
    for kind in [CardKind::DrawTwo, CardKind::Skip, CardKind::Reverse] {
        if let Some(card) = first_of(kind) {
            return Some(card);
        }
    }
    moves
        .iter()
        .filter(|card| card.is_number())
        .min_by_key(|card| Reverse(card.rank()))
        .or_else(|| moves.first())
        .copied()
}

fn play(hand: &[Card], card: Card) -> Decision {
    if card.is_wild() {
        Decision::play_wild(card.id, choose_color(hand, card.id))
    } else {
        Decision::play(card.id)
    }
}

/// Most common color among the cards left after `played` leaves the hand. Ties, and a
/// hand with no colored cards, resolve in [`Color::ALL`] order.
pub fn choose_color(hand: &[Card], played: CardId) -> Color {
    let mut counts = [0usize; Color::ALL.len()];
    for color in hand
        .iter()
        .filter(|card| card.id != played)
        .filter_map(Card::color)
    {
        if let Some(slot) = Color::ALL.iter().position(|candidate| *candidate == color) {
            counts[slot] += 1;
        }
    }
    let mut best = 0;
    for (slot, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = slot;
        }
    }
    Color::ALL[best]
}
