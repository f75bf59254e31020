use serde::{Deserialize, Serialize};

use crate::card::{CardId, Color};

/// What a participant does on their turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Decision {
    /// Play a held card; `color` is required for wild cards and ignored otherwise.
    #[serde(rename_all = "camelCase")]
    Play {
        card_id: CardId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    /// Draw one card, or the whole pending attack stack.
    Draw,
}

impl Decision {
    pub fn play(card_id: CardId) -> Self {
        Decision::Play {
            card_id,
            color: None,
        }
    }

    pub fn play_wild(card_id: CardId, color: Color) -> Self {
        Decision::Play {
            card_id,
            color: Some(color),
        }
    }

    /// Returns the card id if the decision is a play.
    pub fn card_id(&self) -> Option<CardId> {
        match self {
            Decision::Play { card_id, .. } => Some(*card_id),
            Decision::Draw => None,
        }
    }
}
