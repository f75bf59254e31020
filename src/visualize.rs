use std::fmt::Write;

use crate::action::Decision;
use crate::state::{Direction, GameStatus, PlayerView};

/// Customize view rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hand_indices: bool,
    pub show_pile_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand_indices: true,
            show_pile_sizes: true,
        }
    }
}

pub fn render_view(view: &PlayerView) -> String {
    render_view_with_options(view, VisualOptions::default())
}

pub fn render_view_with_options(view: &PlayerView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match (view.status, view.winner_index) {
        (GameStatus::Finished, Some(winner)) => format!("Finished (winner: seat {winner})"),
        (GameStatus::Finished, None) => String::from("Finished"),
        (GameStatus::InProgress, _) => String::from("In progress"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let direction = match view.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(
        out,
        "Current seat: {}{}  |  Direction: {direction}",
        view.current_index,
        if view.current_index == view.self_seat {
            " (You)"
        } else {
            ""
        }
    );
    let _ = writeln!(out, "Active card: {}", view.active_card);
    if view.attack_stack > 0 {
        let _ = writeln!(out, "Attack stack: +{}", view.attack_stack);
    }
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            view.draw_pile_count, view.discard_pile_count
        );
    }
    let _ = writeln!(out, "Seats:");
    for seat in &view.seats {
        let label_you = if seat.seat == view.self_seat {
            " (You)"
        } else {
            ""
        };
        let ai_tag = if seat.is_ai { " [AI]" } else { "" };
        let current_tag = if seat.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  Seat {} {}{}{} - {} card(s){}",
            seat.seat, seat.name, ai_tag, label_you, seat.hand_size, current_tag
        );
    }
    if view.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = view
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if options.show_hand_indices {
                    format!("{idx}:{card}")
                } else {
                    card.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_decision(view: &PlayerView, decision: &Decision) -> String {
    match decision {
        Decision::Play { card_id, color } => {
            let card = view
                .hand
                .iter()
                .find(|card| card.id == *card_id)
                .map(|card| card.to_string())
                .unwrap_or_else(|| format!("card #{card_id}"));
            match color {
                Some(color) => format!("Play {card} and call {color}"),
                None => format!("Play {card}"),
            }
        }
        Decision::Draw if view.attack_stack > 0 => {
            format!("Draw {} cards (attack)", view.attack_stack)
        }
        Decision::Draw => String::from("Draw a card"),
    }
}
