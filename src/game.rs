use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::Decision;
use crate::card::{Card, CardId, Color, HAND_SIZE, build_deck};
use crate::deck;
use crate::effect::Effect;
use crate::error::GameError;
use crate::rules::{can_play, check_win};
use crate::state::{
    Direction, GameEvent, GameState, GameStatus, Participant, PlayerView, Seat, SeatIndex,
    SeatView,
};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;
pub const MIN_PARTICIPANTS: usize = 2;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub seats: Vec<Seat>,
    pub seed: u64,
    pub hand_size: usize,
}

impl GameConfig {
    pub fn new(seats: Vec<Seat>, seed: u64) -> Result<Self, GameError> {
        validate_seats(&seats)?;
        Ok(Self {
            seats,
            seed,
            hand_size: HAND_SIZE,
        })
    }
}

fn validate_seats(seats: &[Seat]) -> Result<(), GameError> {
    if seats.len() < MIN_PARTICIPANTS {
        return Err(GameError::InvalidConfiguration(
            "at least two participants are required",
        ));
    }
    let mut seen = HashSet::with_capacity(seats.len());
    if !seats.iter().all(|seat| seen.insert(seat.id.as_str())) {
        return Err(GameError::InvalidConfiguration(
            "participant ids must be unique",
        ));
    }
    Ok(())
}

/// Builder that enables deterministic deck injection for tests and simulations.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(seats: Vec<Seat>) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(seats, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as-is (no shuffle). The front of the deck is dealt first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Override the number of cards dealt to each participant (7 by default).
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn build(self) -> Result<GameState, GameError> {
        let GameBuilder { config, deck } = self;
        if config.hand_size == 0 {
            return Err(GameError::InvalidConfiguration(
                "hand size must be positive",
            ));
        }
        let deck = match deck {
            Some(deck) => deck,
            None => {
                let mut rng = StdRng::seed_from_u64(config.seed);
                deck::shuffle(build_deck(), &mut rng)
            }
        };
        GameState::from_deck(config.seats, deck, config.hand_size)
    }
}

/// Starts a game for `seats` with a freshly built deck shuffled by `rng`.
pub fn initialize<R: Rng + ?Sized>(seats: Vec<Seat>, rng: &mut R) -> Result<GameState, GameError> {
    validate_seats(&seats)?;
    let deck = deck::shuffle(build_deck(), rng);
    GameState::from_deck(seats, deck, HAND_SIZE)
}

impl GameState {
    fn from_deck(seats: Vec<Seat>, deck: Vec<Card>, hand_size: usize) -> Result<Self, GameError> {
        let deal = deck::deal(deck, seats.len(), hand_size)?;
        let participants = seats
            .into_iter()
            .zip(deal.hands)
            .map(|(seat, hand)| Participant {
                id: seat.id,
                name: seat.name,
                is_ai: seat.is_ai,
                hand,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "dealt {hand_size} cards to {} participants, starting on {}",
            participants.len(),
            deal.active
        );
        Ok(Self {
            participants,
            current_index: 0,
            direction: Direction::Clockwise,
            pending_skip: false,
            attack_stack: 0,
            draw_pile: deal.draw_pile,
            discard_pile: vec![deal.active],
            status: GameStatus::InProgress,
            winner_index: None,
            version: 0,
        })
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.winner_index
            .and_then(|index| self.participants.get(index))
    }

    pub fn current_participant(&self) -> Option<&Participant> {
        self.participants.get(self.current_index)
    }

    pub fn seat_of(&self, participant_id: &str) -> Result<SeatIndex, GameError> {
        self.participants
            .iter()
            .position(|participant| participant.id == participant_id)
            .ok_or_else(|| GameError::UnknownParticipant(participant_id.to_string()))
    }

    /// Cards across all hands and both piles.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self
                .participants
                .iter()
                .map(|participant| participant.hand.len())
                .sum::<usize>()
    }

    /// Snapshot of what `seat` may see.
    pub fn view(&self, seat: SeatIndex) -> Result<PlayerView, GameError> {
        let participant = self
            .participants
            .get(seat)
            .ok_or(GameError::InvalidSeat(seat))?;
        let active_card = *self.active_card().ok_or(GameError::InvalidConfiguration(
            "discard pile has no active card",
        ))?;
        let seats = self
            .participants
            .iter()
            .enumerate()
            .map(|(index, other)| SeatView {
                seat: index,
                name: other.name.clone(),
                is_ai: other.is_ai,
                hand_size: other.hand.len(),
                is_current: index == self.current_index,
            })
            .collect();
        Ok(PlayerView {
            self_seat: seat,
            current_index: self.current_index,
            direction: self.direction,
            attack_stack: self.attack_stack,
            active_card,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            status: self.status,
            winner_index: self.winner_index,
            seats,
            hand: participant.hand.clone(),
        })
    }

    /// Plays `card_id` from `participant_id`'s hand.
    ///
    /// All preconditions are checked before anything changes. On success the card's effect
    /// is applied, then either the game finishes (hand emptied) or the turn advances.
    pub fn apply_play(
        &mut self,
        participant_id: &str,
        card_id: CardId,
        chosen_color: Option<Color>,
    ) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_turn(participant_id)?;
        let position = self.participants[seat]
            .hand
            .iter()
            .position(|card| card.id == card_id)
            .ok_or(GameError::CardNotHeld(card_id))?;
        let card = self.participants[seat].hand[position];
        let active = *self.active_card().ok_or(GameError::InvalidConfiguration(
            "discard pile has no active card",
        ))?;
        if !can_play(&card, &active, self.attack_stack) {
            return Err(GameError::IllegalPlay { card, active });
        }
        let played = if card.is_wild() {
            let color = chosen_color.ok_or(GameError::ColorRequired(card))?;
            card.with_chosen_color(color)
        } else {
            card
        };

        self.participants[seat].hand.remove(position);
        self.discard_pile.push(played);
        log::debug!("{participant_id} played {played}");
        let mut events = vec![GameEvent::CardPlayed { seat, card: played }];

        let before = self.attack_stack;
        Effect::for_kind(played.kind()).apply(self);
        if self.attack_stack != before {
            events.push(GameEvent::AttackStackChanged {
                from: before,
                to: self.attack_stack,
            });
        }

        let hand = &self.participants[seat].hand;
        if hand.len() == 1 {
            events.push(GameEvent::UnoCall { seat });
        }
        if check_win(hand) {
            self.status = GameStatus::Finished;
            self.winner_index = Some(seat);
            log::debug!("{participant_id} emptied their hand and wins");
            events.push(GameEvent::GameFinished { winner_index: seat });
        } else {
            events.push(self.step_turn());
        }
        self.version += 1;
        Ok(events)
    }

    /// Draws for `participant_id` and passes the turn.
    ///
    /// With an attack pending the whole stack is drawn and cleared; otherwise exactly one
    /// card. The discard pile is recycled as needed. A stack larger than the remaining cards
    /// draws whatever is left and is still cleared.
    pub fn apply_draw<R: Rng + ?Sized>(
        &mut self,
        participant_id: &str,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_turn(participant_id)?;
        let owed = self.attack_stack;
        let requested = if owed > 0 { owed as usize } else { 1 };
        let drawn = deck::draw(&mut self.draw_pile, &mut self.discard_pile, requested, rng)?;
        let count = drawn.len();
        self.participants[seat].hand.extend(drawn);
        if count < requested {
            log::debug!("{participant_id} owed {requested} card(s) but only {count} remained");
        } else {
            log::debug!("{participant_id} drew {count} card(s)");
        }

        let mut events = vec![GameEvent::CardsDrawn { seat, count }];
        if owed > 0 {
            self.attack_stack = 0;
            events.push(GameEvent::AttackStackChanged { from: owed, to: 0 });
        }
        events.push(self.step_turn());
        self.version += 1;
        Ok(events)
    }

    /// Routes a bot or client decision to [`GameState::apply_play`] or
    /// [`GameState::apply_draw`].
    pub fn apply_decision<R: Rng + ?Sized>(
        &mut self,
        participant_id: &str,
        decision: Decision,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, GameError> {
        match decision {
            Decision::Play { card_id, color } => self.apply_play(participant_id, card_id, color),
            Decision::Draw => self.apply_draw(participant_id, rng),
        }
    }

    /// Moves the turn on by one seat in the current direction, two if a skip is pending.
    pub fn advance_turn(&mut self) -> Result<SeatIndex, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if self.participants.is_empty() {
            return Err(GameError::InvalidConfiguration("no participants are seated"));
        }
        self.step_turn();
        self.version += 1;
        Ok(self.current_index)
    }

    fn step_turn(&mut self) -> GameEvent {
        let count = self.participants.len() as isize;
        let step = self.direction.step();
        let mut next = self.current_index as isize + step;
        if self.pending_skip {
            next += step;
            self.pending_skip = false;
        }
        self.current_index = next.rem_euclid(count) as usize;
        log::trace!("turn passes to seat {}", self.current_index);
        GameEvent::TurnAdvanced {
            current_index: self.current_index,
        }
    }

    fn ensure_turn(&self, participant_id: &str) -> Result<SeatIndex, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat = self.seat_of(participant_id)?;
        if seat != self.current_index {
            return Err(GameError::NotYourTurn(participant_id.to_string()));
        }
        Ok(seat)
    }
}
