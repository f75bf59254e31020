//! Side effects of a successful play, looked up from the played card's kind.

use crate::card::CardKind;
use crate::state::GameState;

/// The single effect a played card has on the turn state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    /// The next seat in turn order loses its turn.
    Skip,
    /// Turn direction flips.
    Reverse,
    /// The attack stack grows by the given number of cards.
    Attack(u32),
    /// Any pending attack is cleared.
    Clear,
}

impl Effect {
    pub fn for_kind(kind: CardKind) -> Self {
        match kind {
            CardKind::Skip => Effect::Skip,
            CardKind::Reverse => Effect::Reverse,
            CardKind::DrawTwo => Effect::Attack(2),
            CardKind::WildDrawFour => Effect::Attack(4),
            CardKind::Number(_) | CardKind::Wild => Effect::Clear,
        }
    }

    pub fn apply(self, state: &mut GameState) {
        match self {
            Effect::Skip => state.pending_skip = true,
            Effect::Reverse => state.direction = state.direction.reversed(),
            Effect::Attack(amount) => {
                state.attack_stack = state.attack_stack.saturating_add(amount)
            }
            Effect::Clear => state.attack_stack = 0,
        }
    }
}
