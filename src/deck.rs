//! Deck lifecycle: shuffling, the opening deal, drawing and recycling the discard pile.
//!
//! The draw pile is drawn from the front; the discard pile grows at the back and its last
//! card is the active card.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::GameError;

/// Uniformly permutes `cards` (Fisher-Yates) using the injected randomness source.
pub fn shuffle<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    cards.shuffle(rng);
    cards
}

/// Result of the opening deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub draw_pile: Vec<Card>,
    pub active: Card,
}

/// Deals `hand_size` cards to each participant in seat order, then turns up the first
/// number card from the remainder as the active card.
///
/// Cards passed over while looking for the starting card stay at the front of the draw
/// pile in their original order.
pub fn deal(mut deck: Vec<Card>, participants: usize, hand_size: usize) -> Result<Deal, GameError> {
    let insufficient = GameError::InsufficientDeck {
        participants,
        hand_size,
    };
    let dealt = participants
        .checked_mul(hand_size)
        .ok_or_else(|| insufficient.clone())?;
    if deck.len() <= dealt {
        return Err(insufficient);
    }
    let mut remainder = deck.split_off(dealt);
    let start = remainder
        .iter()
        .position(Card::is_number)
        .ok_or(insufficient)?;
    let active = remainder.remove(start);

    let mut cards = deck.into_iter();
    let hands = (0..participants)
        .map(|_| cards.by_ref().take(hand_size).collect())
        .collect();

    Ok(Deal {
        hands,
        draw_pile: remainder,
        active,
    })
}

/// Cards that could still be drawn: the whole draw pile plus everything under the active card.
#[inline]
pub fn available(draw_pile: &[Card], discard_pile: &[Card]) -> usize {
    draw_pile.len() + discard_pile.len().saturating_sub(1)
}

/// Takes every discard except the active card, clears their chosen colors and shuffles them
/// into a fresh draw pile. Fails without touching the pile when nothing lies under the
/// active card.
pub fn recycle<R: Rng + ?Sized>(
    discard_pile: &mut Vec<Card>,
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    if discard_pile.len() <= 1 {
        return Err(GameError::DeckExhausted {
            requested: 1,
            available: 0,
        });
    }
    let top = discard_pile.len() - 1;
    let remainder: Vec<Card> = discard_pile.drain(..top).map(Card::reset).collect();
    log::debug!("recycled {} discards into the draw pile", remainder.len());
    Ok(shuffle(remainder, rng))
}

/// Draws up to `count` cards from the front of the draw pile, recycling the discard pile
/// whenever the draw pile runs dry. When fewer than `count` cards remain, all of them are
/// drawn. Fails without touching either pile only when nothing at all can be drawn.
pub fn draw<R: Rng + ?Sized>(
    draw_pile: &mut Vec<Card>,
    discard_pile: &mut Vec<Card>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    let available = available(draw_pile, discard_pile);
    if available == 0 {
        return Err(GameError::DeckExhausted {
            requested: count,
            available,
        });
    }
    let count = count.min(available);
    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count {
        if draw_pile.is_empty() {
            let recycled = recycle(discard_pile, rng)?;
            draw_pile.extend(recycled);
        }
        let take = (count - drawn.len()).min(draw_pile.len());
        drawn.extend(draw_pile.drain(..take));
    }
    Ok(drawn)
}
