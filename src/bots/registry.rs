use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::policy::Difficulty;
use crate::{HeuristicBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Bot playing at `difficulty`. Random play is seeded from `seed`.
pub fn bot_for_difficulty(difficulty: Difficulty, seed: u64) -> Box<dyn Bot> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomBot::new(StdRng::seed_from_u64(seed))),
        Difficulty::Medium | Difficulty::Hard => Box::new(HeuristicBot::new()),
    }
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - easy[:seed] (alias: random[:seed])
/// - medium
/// - hard
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let label = label_for_spec(spec);
    if label == "human" {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string());
        let name = name.unwrap_or_else(|| format!("Human {index}"));
        return Ok(Box::new(HumanBot::new(name)));
    }
    let difficulty = match label.as_str() {
        "random" => Difficulty::Easy,
        other => other.parse::<Difficulty>()?,
    };
    let custom_seed = spec
        .split_once(':')
        .and_then(|(_, value)| value.parse::<u64>().ok())
        .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
    Ok(bot_for_difficulty(difficulty, custom_seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_drop_arguments() {
        assert_eq!(label_for_spec("Easy:42"), "easy");
        assert_eq!(label_for_spec(" hard "), "hard");
    }

    #[test]
    fn rejects_unknown_specs() {
        assert!(create_bot_from_spec("grandmaster", 0, 1).is_err());
        assert!(create_bot_from_spec("easy:7", 0, 1).is_ok());
        assert!(create_bot_from_spec("medium", 1, 1).is_ok());
    }
}
