use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique token identifying a physical card within one deck.
pub type CardId = u32;

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MAX_RANK: u8 = 9;
pub const COPIES_PER_FACE: usize = 2;
pub const WILDS_PER_KIND: usize = 4;

/// One of the four suit colors. Wild cards have no color until one is chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Fixed order used for deck construction and tie-breaking.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Skip,
    Reverse,
    DrawTwo,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WildKind {
    Wild,
    WildDrawFour,
}

/// What is printed on a card. Wild cards carry the color picked when they were played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Number { color: Color, rank: u8 },
    Action { color: Color, kind: ActionKind },
    Wild {
        kind: WildKind,
        chosen_color: Option<Color>,
    },
}

/// Flattened kind of a card, ignoring color. Two cards "match by kind" when these are equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Attack kinds add to the attack stack and are the only answers to a pending one.
    #[inline]
    pub fn is_attack(&self) -> bool {
        matches!(self, CardKind::DrawTwo | CardKind::WildDrawFour)
    }
}

/// A single card. Immutable apart from the color chosen for a played wild.
///
/// Persisted as the flat record `{id, color, kind, chosenColor?}`: wild cards carry the
/// color `"wild"`, number cards carry their rank as `kind`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRecord", try_from = "CardRecord")]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RecordColor {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl From<Color> for RecordColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => RecordColor::Red,
            Color::Yellow => RecordColor::Yellow,
            Color::Green => RecordColor::Green,
            Color::Blue => RecordColor::Blue,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum RecordKind {
    Rank(u8),
    Action(ActionKind),
    Wild(WildKind),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    id: CardId,
    color: RecordColor,
    kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chosen_color: Option<Color>,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        let (color, kind, chosen_color) = match card.face {
            Face::Number { color, rank } => (color.into(), RecordKind::Rank(rank), None),
            Face::Action { color, kind } => (color.into(), RecordKind::Action(kind), None),
            Face::Wild { kind, chosen_color } => {
                (RecordColor::Wild, RecordKind::Wild(kind), chosen_color)
            }
        };
        CardRecord {
            id: card.id,
            color,
            kind,
            chosen_color,
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = String;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let printed = match record.color {
            RecordColor::Red => Some(Color::Red),
            RecordColor::Yellow => Some(Color::Yellow),
            RecordColor::Green => Some(Color::Green),
            RecordColor::Blue => Some(Color::Blue),
            RecordColor::Wild => None,
        };
        let face = match (printed, record.kind, record.chosen_color) {
            (Some(color), RecordKind::Rank(rank), None) if rank <= MAX_RANK => {
                Face::Number { color, rank }
            }
            (Some(color), RecordKind::Action(kind), None) => Face::Action { color, kind },
            (None, RecordKind::Wild(kind), chosen_color) => Face::Wild { kind, chosen_color },
            _ => return Err(format!("card {} has an invalid color/kind combination", record.id)),
        };
        Ok(Card {
            id: record.id,
            face,
        })
    }
}

impl Card {
    pub fn number(id: CardId, color: Color, rank: u8) -> Self {
        debug_assert!(rank <= MAX_RANK);
        Self {
            id,
            face: Face::Number { color, rank },
        }
    }

    pub fn action(id: CardId, color: Color, kind: ActionKind) -> Self {
        Self {
            id,
            face: Face::Action { color, kind },
        }
    }

    pub fn wild(id: CardId, kind: WildKind) -> Self {
        Self {
            id,
            face: Face::Wild {
                kind,
                chosen_color: None,
            },
        }
    }

    pub fn kind(&self) -> CardKind {
        match self.face {
            Face::Number { rank, .. } => CardKind::Number(rank),
            Face::Action { kind, .. } => match kind {
                ActionKind::Skip => CardKind::Skip,
                ActionKind::Reverse => CardKind::Reverse,
                ActionKind::DrawTwo => CardKind::DrawTwo,
            },
            Face::Wild { kind, .. } => match kind {
                WildKind::Wild => CardKind::Wild,
                WildKind::WildDrawFour => CardKind::WildDrawFour,
            },
        }
    }

    /// Printed color; `None` for wild cards.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self.face {
            Face::Number { color, .. } | Face::Action { color, .. } => Some(color),
            Face::Wild { .. } => None,
        }
    }

    /// Color a following card has to match: the chosen color for a resolved wild,
    /// otherwise the printed one.
    #[inline]
    pub fn effective_color(&self) -> Option<Color> {
        match self.face {
            Face::Wild { chosen_color, .. } => chosen_color,
            _ => self.color(),
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.face, Face::Wild { .. })
    }

    #[inline]
    pub fn is_action(&self) -> bool {
        matches!(self.face, Face::Action { .. })
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self.face, Face::Number { .. })
    }

    #[inline]
    pub fn rank(&self) -> Option<u8> {
        match self.face {
            Face::Number { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// Returns a copy carrying `color` as its chosen color. Non-wild cards are returned as is.
    pub fn with_chosen_color(mut self, color: Color) -> Self {
        if let Face::Wild { chosen_color, .. } = &mut self.face {
            *chosen_color = Some(color);
        }
        self
    }

    /// Strips a previously chosen color so the card can be reshuffled.
    pub fn reset(mut self) -> Self {
        if let Face::Wild { chosen_color, .. } = &mut self.face {
            *chosen_color = None;
        }
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Number { color, rank } => write!(f, "{color} {rank}"),
            Face::Action { color, kind } => {
                let label = match kind {
                    ActionKind::Skip => "skip",
                    ActionKind::Reverse => "reverse",
                    ActionKind::DrawTwo => "+2",
                };
                write!(f, "{color} {label}")
            }
            Face::Wild { kind, chosen_color } => {
                let label = match kind {
                    WildKind::Wild => "wild",
                    WildKind::WildDrawFour => "wild +4",
                };
                match chosen_color {
                    Some(color) => write!(f, "{label} ({color})"),
                    None => f.write_str(label),
                }
            }
        }
    }
}

/// Builds the canonical 108-card deck in deterministic order (unshuffled) with ids `0..108`.
///
/// Per color: one 0, two each of 1-9, two each of skip, reverse and draw-two.
/// Then four wilds and four wild-draw-fours.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id: CardId = 0;
    let mut fresh = || {
        let id = next_id;
        next_id += 1;
        id
    };
    for color in Color::ALL {
        deck.push(Card::number(fresh(), color, 0));
        for rank in 1..=MAX_RANK {
            for _ in 0..COPIES_PER_FACE {
                deck.push(Card::number(fresh(), color, rank));
            }
        }
        for kind in [ActionKind::Skip, ActionKind::Reverse, ActionKind::DrawTwo] {
            for _ in 0..COPIES_PER_FACE {
                deck.push(Card::action(fresh(), color, kind));
            }
        }
    }
    for kind in [WildKind::Wild, WildKind::WildDrawFour] {
        for _ in 0..WILDS_PER_KIND {
            deck.push(Card::wild(fresh(), kind));
        }
    }
    deck
}
