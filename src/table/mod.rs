//! The round state machine.
//!
//! A [`RoundState`] is an immutable snapshot. Every change goes through
//! [`transition`] (or [`try_transition`]), which clones the snapshot,
//! applies one [`Action`] to the copy, and hands the copy back. A rejected
//! action leaves the input untouched.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use tracing::{debug, info, trace};

use crate::card::{Card, DECK_SIZE};
use crate::count::update_running_count;
use crate::error::TransitionError;
use crate::hand::DealerHand;
use crate::options::Rules;
use crate::result::RoundResult;
use crate::shoe::{next_seed, shuffled_shoe};

mod actions;
mod betting;
mod dealer;
mod dealing;
mod insurance;
mod query;
mod seat;
mod settle;
pub mod state;

pub use dealer::dealer_should_hit;
pub use seat::Seat;
pub use state::{Action, ActionKind, DealTarget, Phase};

/// Largest number of seats a table holds.
pub const MAX_SEATS: usize = 7;

/// Inputs for constructing a [`RoundState`].
///
/// ```
/// use bjtrain::{RoundState, Rules, TableConfig};
///
/// let state = RoundState::new(
///     TableConfig::default()
///         .with_bankroll(500)
///         .with_seats(2)
///         .with_rules(Rules::default().with_decks(2))
///         .with_seed(7),
/// );
/// assert_eq!(state.seats().len(), 2);
/// assert_eq!(state.shoe().len(), 104);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Starting bankroll of every seat.
    pub bankroll: usize,
    /// Number of seats to open, capped at [`MAX_SEATS`].
    pub seats: usize,
    /// Table rules.
    pub rules: Rules,
    /// Shuffle seed.
    pub seed: u64,
    /// Preset shoe in draw order; replaces the shuffled shoe when set.
    pub shoe: Option<Vec<Card>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            bankroll: 1000,
            seats: 1,
            rules: Rules::default(),
            seed: 1,
            shoe: None,
        }
    }
}

impl TableConfig {
    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: usize) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the number of seats.
    #[must_use]
    pub const fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Uses a preset shoe, given in draw order.
    #[must_use]
    pub fn with_shoe(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.shoe = Some(cards.into_iter().collect());
        self
    }
}

/// Snapshot of the whole table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    phase: Phase,
    shoe: VecDeque<Card>,
    discard: Vec<Card>,
    seats: Vec<Seat>,
    active_seat: usize,
    dealer: DealerHand,
    deal_queue: VecDeque<DealTarget>,
    participants: Vec<usize>,
    running_count: i32,
    rules: Rules,
    round_id: u64,
    last_result: Option<RoundResult>,
    card_total: usize,
    starting_bankroll: usize,
    seed: u64,
}

impl RoundState {
    /// Creates a table in the betting phase.
    ///
    /// Without a preset shoe, `config.rules.decks` decks are shuffled from
    /// `config.seed`. Later automatic reshuffles continue a seed chain
    /// started from the same seed, so a session replays exactly from its
    /// seed and action log.
    ///
    /// `decks` and `max_hands` below 1 are raised to 1 and penetration is
    /// clamped into `0..=1`.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let TableConfig {
            bankroll,
            seats,
            mut rules,
            seed,
            shoe,
        } = config;
        rules.decks = rules.decks.max(1);
        rules.max_hands = rules.max_hands.max(1);
        rules.penetration = rules.penetration.clamp(0.0, 1.0);

        let shoe: VecDeque<Card> = match shoe {
            Some(cards) => cards.into(),
            None => shuffled_shoe(rules.decks, seed),
        };
        let seats = (0..seats.min(MAX_SEATS))
            .map(|index| Seat::new(index, bankroll))
            .collect();

        Self {
            phase: Phase::Betting,
            card_total: shoe.len(),
            shoe,
            discard: Vec::new(),
            seats,
            active_seat: 0,
            dealer: DealerHand::new(),
            deal_queue: VecDeque::new(),
            participants: Vec::new(),
            running_count: 0,
            rules,
            round_id: 0,
            last_result: None,
            starting_bankroll: bankroll,
            seed: next_seed(seed),
        }
    }

    /// Applies `action` to this snapshot. See [`transition`].
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        transition(self, action)
    }

    /// Applies `action` to this snapshot. See [`try_transition`].
    ///
    /// # Errors
    ///
    /// Returns why the action was rejected.
    pub fn try_apply(&self, action: Action) -> Result<Self, TransitionError> {
        try_transition(self, action)
    }

    fn dispatch(&mut self, action: Action) -> Result<(), TransitionError> {
        match (self.phase, action) {
            (_, Action::EndRound) => self.end_round(),

            (Phase::Betting, Action::AddSeat) => self.add_seat()?,
            (Phase::Betting, Action::SetBet { seat, amount }) => self.set_bet(seat, amount)?,
            (Phase::Betting, Action::ToggleReady { seat, ready }) => {
                self.toggle_ready(seat, ready)?;
            }
            (Phase::Betting, Action::PlaceBet { amount }) => self.place_bet(amount)?,
            (Phase::Betting, Action::BeginDeal) => self.begin_deal()?,
            (Phase::Betting, Action::Deal) => {
                self.begin_deal()?;
                while self.phase == Phase::Dealing {
                    self.deal_step();
                }
            }
            (Phase::Betting, Action::Reshuffle { seed }) => self.reshuffle(seed),
            (Phase::Betting, Action::SetRules(rules)) => self.set_rules(rules)?,

            (Phase::Dealing, Action::DealStep) => self.deal_step(),

            (Phase::Insurance, Action::TakeInsurance { amount }) => {
                self.take_insurance(amount)?;
            }
            (Phase::Insurance, Action::DeclineInsurance) => self.decline_insurance()?,

            (Phase::PlayerTurn, Action::Hit) => self.hit()?,
            (Phase::PlayerTurn, Action::Stand) => self.stand()?,
            (Phase::PlayerTurn, Action::Double) => self.double_down()?,
            (Phase::PlayerTurn, Action::Split) => self.split()?,
            (Phase::PlayerTurn, Action::Surrender) => self.surrender()?,

            (Phase::DealerTurn, Action::DealerPlay) => self.dealer_play(),
            (Phase::DealerTurn, Action::DealerTick) => self.dealer_tick(),

            (
                phase,
                action @ (Action::AddSeat
                | Action::SetBet { .. }
                | Action::ToggleReady { .. }
                | Action::PlaceBet { .. }
                | Action::Deal
                | Action::BeginDeal
                | Action::DealStep
                | Action::Hit
                | Action::Stand
                | Action::Double
                | Action::Split
                | Action::Surrender
                | Action::TakeInsurance { .. }
                | Action::DeclineInsurance
                | Action::DealerPlay
                | Action::DealerTick
                | Action::Reshuffle { .. }
                | Action::SetRules(_)),
            ) => {
                return Err(TransitionError::WrongPhase {
                    phase,
                    action: action.kind(),
                });
            }
        }
        Ok(())
    }

    /// Draws the next card from the shoe and counts it.
    ///
    /// # Panics
    ///
    /// Panics if the shoe is empty. Deals are only started with enough
    /// cards for the initial deal, so this means the round drew past the
    /// end of a shoe that was too short for it.
    fn draw(&mut self) -> Card {
        let Some(card) = self.shoe.pop_front() else {
            panic!("drew from an empty shoe; reshuffle before dealing further");
        };
        self.running_count = update_running_count(self.running_count, &card);
        trace!(%card, running_count = self.running_count, "card drawn");
        card
    }

    fn deal_to_hand(&mut self, seat: usize, hand: usize) {
        let card = self.draw();
        self.seats[seat].hands_mut()[hand].add_card(card);
    }

    fn deal_to_dealer(&mut self) {
        let card = self.draw();
        self.dealer.add_card(card);
    }

    /// Replaces the shoe with a fresh shuffle and forgets the count.
    fn rebuild_shoe(&mut self, seed: u64) {
        self.shoe = shuffled_shoe(self.rules.decks, seed);
        self.card_total = usize::from(self.rules.decks) * DECK_SIZE;
        self.discard.clear();
        self.running_count = 0;
        self.seed = next_seed(seed);
        info!(seed, cards = self.card_total, "shoe reshuffled");
    }
}

/// Applies one action to a snapshot and returns the next snapshot.
///
/// Illegal actions (wrong phase, an unmet legality gate, an uncovered bet)
/// return a clone of `state` unchanged. Use the `can_*` predicates on
/// [`RoundState`] to check an action before offering it, or
/// [`try_transition`] to learn why it was refused.
///
/// ```
/// use bjtrain::{transition, Action, Phase, RoundState, TableConfig};
///
/// let state = RoundState::new(TableConfig::default());
/// let next = transition(&state, Action::Hit);
/// assert_eq!(next, state);
/// assert_eq!(next.phase(), Phase::Betting);
/// ```
#[must_use]
pub fn transition(state: &RoundState, action: Action) -> RoundState {
    try_transition(state, action).unwrap_or_else(|err| {
        debug!(%err, phase = ?state.phase, "action rejected");
        state.clone()
    })
}

/// Applies one action to a snapshot, reporting why it was rejected.
///
/// # Errors
///
/// Returns a [`TransitionError`] when the action is illegal in the current
/// phase or fails its legality gate. The input snapshot is never modified.
///
/// # Panics
///
/// Panics if the action needs a card from an empty shoe.
pub fn try_transition(state: &RoundState, action: Action) -> Result<RoundState, TransitionError> {
    let mut next = state.clone();
    next.dispatch(action)?;
    Ok(next)
}
