use crate::card::Card;

/// Checks whether `card` may be played on top of `active` while `attack_stack` cards are owed.
///
/// Wild cards are always playable. While an attack is pending only attack cards answer it.
/// Otherwise the card has to share the active card's effective color or its kind.
pub fn can_play(card: &Card, active: &Card, attack_stack: u32) -> bool {
    if card.is_wild() {
        return true;
    }
    if attack_stack > 0 {
        return card.kind().is_attack();
    }
    let same_color = match (card.color(), active.effective_color()) {
        (Some(color), Some(target)) => color == target,
        _ => false,
    };
    same_color || card.kind() == active.kind()
}

/// Cards from `hand` that are playable right now, in hand order.
pub fn legal_moves(hand: &[Card], active: &Card, attack_stack: u32) -> Vec<Card> {
    hand.iter()
        .filter(|card| can_play(card, active, attack_stack))
        .copied()
        .collect()
}

/// True once a hand has been played out.
#[inline]
pub fn check_win(hand: &[Card]) -> bool {
    hand.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ActionKind, Color, WildKind};

    #[test]
    fn matches_by_color_or_kind() {
        let active = Card::number(0, Color::Red, 5);
        assert!(can_play(&Card::number(1, Color::Red, 9), &active, 0));
        assert!(can_play(&Card::number(2, Color::Blue, 5), &active, 0));
        assert!(!can_play(&Card::number(3, Color::Blue, 6), &active, 0));
        assert!(!can_play(
            &Card::action(4, Color::Green, ActionKind::Skip),
            &active,
            0
        ));
    }

    #[test]
    fn action_cards_match_same_action() {
        let active = Card::action(0, Color::Red, ActionKind::Reverse);
        assert!(can_play(
            &Card::action(1, Color::Yellow, ActionKind::Reverse),
            &active,
            0
        ));
        assert!(!can_play(
            &Card::action(2, Color::Yellow, ActionKind::Skip),
            &active,
            0
        ));
    }

    #[test]
    fn resolved_wild_uses_chosen_color() {
        let active = Card::wild(0, WildKind::Wild).with_chosen_color(Color::Green);
        assert!(can_play(&Card::number(1, Color::Green, 3), &active, 0));
        assert!(!can_play(&Card::number(2, Color::Red, 3), &active, 0));
    }

    #[test]
    fn wild_always_playable() {
        let active = Card::number(0, Color::Red, 5);
        for stack in [0, 2, 6] {
            assert!(can_play(&Card::wild(1, WildKind::Wild), &active, stack));
            assert!(can_play(&Card::wild(2, WildKind::WildDrawFour), &active, stack));
        }
    }

    #[test]
    fn pending_attack_only_accepts_attack_cards() {
        let active = Card::action(0, Color::Red, ActionKind::DrawTwo);
        assert!(can_play(
            &Card::action(1, Color::Blue, ActionKind::DrawTwo),
            &active,
            2
        ));
        assert!(!can_play(&Card::number(2, Color::Red, 4), &active, 2));
        assert!(!can_play(
            &Card::action(3, Color::Red, ActionKind::Skip),
            &active,
            2
        ));
    }

    #[test]
    fn legal_moves_preserve_hand_order() {
        let active = Card::number(0, Color::Red, 5);
        let hand = vec![
            Card::number(1, Color::Blue, 1),
            Card::wild(2, WildKind::Wild),
            Card::number(3, Color::Red, 7),
            Card::number(4, Color::Yellow, 5),
        ];
        let ids: Vec<_> = legal_moves(&hand, &active, 0).iter().map(|c| c.id).collect();
        assert_eq!(ids, [2, 3, 4]);
        assert!(!check_win(&hand));
        assert!(check_win(&[]));
    }
}
