use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::card::{ActionKind, WildKind};
use unobot::{Card, Color, Decision, Difficulty, decide, legal_moves};

fn hard(hand: &[Card], active: &Card, attack_stack: u32) -> Decision {
    decide(
        hand,
        active,
        attack_stack,
        Difficulty::Hard,
        &mut StdRng::seed_from_u64(0),
    )
}

#[test]
fn answers_pending_attack_with_attack_card() {
    let active = Card::action(0, Color::Red, ActionKind::DrawTwo);
    let hand = vec![
        Card::wild(1, WildKind::Wild),
        Card::number(2, Color::Red, 9),
        Card::wild(3, WildKind::WildDrawFour),
        Card::number(4, Color::Blue, 2),
    ];
    assert_eq!(hard(&hand, &active, 2), Decision::play_wild(3, Color::Red));
}

#[test]
fn prefers_draw_two_then_skip_then_reverse() {
    let active = Card::number(0, Color::Green, 5);
    let mut hand = vec![
        Card::number(1, Color::Green, 9),
        Card::action(2, Color::Green, ActionKind::Reverse),
        Card::action(3, Color::Green, ActionKind::Skip),
        Card::action(4, Color::Green, ActionKind::DrawTwo),
    ];
    assert_eq!(hard(&hand, &active, 0), Decision::play(4));
    hand.pop();
    assert_eq!(hard(&hand, &active, 0), Decision::play(3));
    hand.pop();
    assert_eq!(hard(&hand, &active, 0), Decision::play(2));
    hand.pop();
    assert_eq!(hard(&hand, &active, 0), Decision::play(1));
}

#[test]
fn plays_highest_number_before_wild() {
    let active = Card::number(0, Color::Blue, 5);
    let hand = vec![
        Card::wild(1, WildKind::Wild),
        Card::number(2, Color::Blue, 2),
        Card::number(3, Color::Yellow, 5),
        Card::number(4, Color::Blue, 7),
    ];
    assert_eq!(hard(&hand, &active, 0), Decision::play(4));
}

#[test]
fn wild_is_last_resort_and_names_majority_color() {
    let active = Card::number(0, Color::Blue, 5);
    let hand = vec![
        Card::number(1, Color::Red, 1),
        Card::wild(2, WildKind::Wild),
        Card::number(3, Color::Green, 2),
        Card::number(4, Color::Green, 3),
    ];
    assert_eq!(hard(&hand, &active, 0), Decision::play_wild(2, Color::Green));
}

#[test]
fn draws_exactly_when_nothing_is_playable() {
    let active = Card::number(0, Color::Blue, 5);
    let hand = vec![Card::number(1, Color::Red, 1), Card::number(2, Color::Green, 2)];
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(decide(&hand, &active, 0, difficulty, &mut rng), Decision::Draw);
    }

    let attacked = Card::action(0, Color::Red, ActionKind::DrawTwo);
    let hand = vec![Card::number(1, Color::Red, 1)];
    assert_eq!(hard(&hand, &attacked, 2), Decision::Draw);
}

#[test]
fn every_difficulty_stays_within_legal_moves() {
    let active = Card::number(0, Color::Yellow, 4);
    let hand = vec![
        Card::number(1, Color::Yellow, 8),
        Card::number(2, Color::Red, 4),
        Card::action(3, Color::Blue, ActionKind::Skip),
        Card::wild(4, WildKind::WildDrawFour),
        Card::number(5, Color::Green, 1),
    ];
    let legal: Vec<_> = legal_moves(&hand, &active, 0).iter().map(|c| c.id).collect();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let decision = decide(&hand, &active, 0, difficulty, &mut rng);
            let card_id = decision.card_id().expect("a legal move exists");
            assert!(legal.contains(&card_id));
            if card_id == 4 {
                assert!(matches!(decision, Decision::Play { color: Some(_), .. }));
            }
        }
    }
}

#[test]
fn easy_covers_all_legal_moves() {
    let active = Card::number(0, Color::Yellow, 4);
    let hand = vec![
        Card::number(1, Color::Yellow, 8),
        Card::number(2, Color::Red, 4),
        Card::wild(3, WildKind::Wild),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = [false; 4];
    for _ in 0..300 {
        if let Some(id) = decide(&hand, &active, 0, Difficulty::Easy, &mut rng).card_id() {
            seen[id as usize] = true;
        }
    }
    assert_eq!(seen, [false, true, true, true]);
}
