use rand::Rng;

use crate::action::Decision;
use crate::bot::Bot;
use crate::policy::decide_random;
use crate::state::PlayerView;

/// Easy opponent that samples uniformly from its legal cards and draws when it has none.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn decide(&mut self, view: &PlayerView) -> Decision {
        decide_random(&view.hand, &view.active_card, view.attack_stack, &mut self.rng)
    }
}
