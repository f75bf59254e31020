use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::{
    Bot, GameBuilder, GameError, GameEvent, Seat, create_bot_from_spec, describe_decision,
    label_for_spec, render_view, winner_points,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;
const MAX_SEATS: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a game between bots and/or a human.")]
struct Args {
    /// Seed for shuffling and recycling (bot seeds are derived from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after the specified number of turns
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Show the table and chosen decisions each turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Cards dealt to each seat
    #[arg(long = "hand-size")]
    hand_size: Option<usize>,

    /// Seat specs, 2-4 total: human[:name], easy[:seed], medium, hard
    bots: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.bots.is_empty() {
        vec![String::from("human"), String::from("medium")]
    } else {
        args.bots
    };
    if specs.len() < 2 || specs.len() > MAX_SEATS {
        return Err(format!(
            "expected between 2 and {MAX_SEATS} players, received {}",
            specs.len()
        )
        .into());
    }

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(specs.len());
    let mut seats = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, args.seed)?);
        let label = label_for_spec(spec);
        let id = format!("seat-{index}");
        let name = format!("{label} {index}");
        seats.push(if label == "human" {
            Seat::human(id, name)
        } else {
            Seat::ai(id, name)
        });
    }

    let mut builder = GameBuilder::new(seats)?.with_seed(args.seed);
    if let Some(hand_size) = args.hand_size {
        builder = builder.with_hand_size(hand_size);
    }
    let mut state = builder.build()?;
    let mut rng = StdRng::seed_from_u64(args.seed.rotate_left(17));

    println!("Starting game with {} seats.\n", bots.len());
    let mut turns = 0usize;
    while !state.is_finished() {
        if let Some(limit) = args.max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let seat = state.current_index;
        let view = state.view(seat)?;
        if args.visualize {
            println!("{}", render_view(&view));
        }
        let decision = bots[seat].decide(&view);
        if args.visualize {
            println!("Chosen: {}\n", describe_decision(&view, &decision));
        }
        let participant_id = state.participants[seat].id.clone();
        let events = match state.apply_decision(&participant_id, decision, &mut rng) {
            Ok(events) => events,
            Err(GameError::DeckExhausted { .. }) => {
                println!("No cards left to draw. Stopping simulation.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        for event in events {
            if let GameEvent::UnoCall { seat } = event {
                println!("Seat {seat} calls UNO!");
            }
        }
        turns += 1;
    }

    match state.winner_index {
        Some(winner) => println!(
            "Game finished after {turns} turns. Winner: {} ({} points).",
            state.participants[winner].name,
            winner_points(&state, winner)
        ),
        None => println!("Simulation stopped before completion."),
    }

    Ok(())
}
