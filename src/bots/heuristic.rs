use crate::action::Decision;
use crate::bot::Bot;
use crate::policy::decide_heuristic;
use crate::state::PlayerView;

/// Rule-based opponent used for the medium and hard difficulties.
///
/// In plain English:
/// - When a draw-two or wild-draw-four stack is pending, pass it on with another attack card.
/// - Otherwise get rid of action cards first (draw-two, then skip, then reverse).
/// - Then dump the highest number, which sheds the most points.
/// - Keep wilds until nothing else fits, and name the color the rest of the hand has most of.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for HeuristicBot {
    fn decide(&mut self, view: &PlayerView) -> Decision {
        decide_heuristic(&view.hand, &view.active_card, view.attack_stack)
    }
}
