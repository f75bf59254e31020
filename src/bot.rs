use crate::action::Decision;
use crate::state::PlayerView;

/// Interface for anything that takes a seat's turn: computer opponents or an
/// interactive front end.
pub trait Bot {
    fn decide(&mut self, view: &PlayerView) -> Decision;
}
