use std::io::{self, Write};

use crate::action::Decision;
use crate::bot::Bot;
use crate::card::Color;
use crate::state::PlayerView;
use crate::visualize::{describe_decision, render_view};

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt(label: &str) -> Option<String> {
        print!("{label}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            eprintln!("failed to read input");
            return None;
        }
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            println!("Exiting game at user's request.");
            std::process::exit(0);
        }
        Some(trimmed.to_string())
    }

    fn ask_color() -> Color {
        loop {
            let Some(answer) = Self::prompt("Pick a color (red/yellow/green/blue): ") else {
                continue;
            };
            let picked = Color::ALL
                .into_iter()
                .find(|color| color.to_string().starts_with(&answer.to_ascii_lowercase()));
            match picked {
                Some(color) if !answer.is_empty() => return color,
                _ => println!("Unknown color '{answer}'."),
            }
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn decide(&mut self, view: &PlayerView) -> Decision {
        let moves = view.legal_moves();
        loop {
            println!("\n=== {}'s turn (seat {}) ===", self.name, view.self_seat);
            println!("{}", render_view(view));
            println!("Available actions:");
            for (index, card) in moves.iter().enumerate() {
                println!("  [{index}] play {card}");
            }
            println!("  [d] {}", describe_decision(view, &Decision::Draw));
            println!("Type the action index, 'd' to draw, 'help' or 'q' to quit.");
            let Some(answer) = Self::prompt("Selection: ") else {
                continue;
            };
            if answer.eq_ignore_ascii_case("help") {
                println!("Enter the number listed next to the card you wish to play.");
                println!("Wild cards ask for a color afterwards.");
                continue;
            }
            if answer.eq_ignore_ascii_case("d") {
                return Decision::Draw;
            }
            let Ok(choice) = answer.parse::<usize>() else {
                println!("Invalid input: '{answer}'. Please enter a number.");
                continue;
            };
            let Some(card) = moves.get(choice) else {
                println!("Index out of range. Please choose a valid option.");
                continue;
            };
            let decision = if card.is_wild() {
                Decision::play_wild(card.id, Self::ask_color())
            } else {
                Decision::play(card.id)
            };
            println!("You selected: {}", describe_decision(view, &decision));
            return decision;
        }
    }
}
