use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::{BetError, DealError, RulesError};
use crate::hand::DealerHand;
use crate::options::Rules;
use crate::shoe::should_shuffle;

use super::{DealTarget, MAX_SEATS, Phase, RoundState, Seat};

/// One card to each participant, one to the dealer, twice over.
fn build_deal_queue(participants: &[usize]) -> impl Iterator<Item = DealTarget> + '_ {
    let pass = || {
        participants
            .iter()
            .map(|&seat| DealTarget::Seat(seat))
            .chain(core::iter::once(DealTarget::Dealer))
    };
    pass().chain(pass())
}

impl RoundState {
    pub(super) fn add_seat(&mut self) -> Result<(), BetError> {
        if self.seats.len() >= MAX_SEATS {
            return Err(BetError::TableFull);
        }
        let index = self.seats.len();
        self.seats.push(Seat::new(index, self.starting_bankroll));
        debug!(seat = index, "seat added");
        Ok(())
    }

    fn seat_mut(&mut self, seat: usize) -> Result<&mut Seat, BetError> {
        self.seats.get_mut(seat).ok_or(BetError::SeatNotFound(seat))
    }

    pub(super) fn set_bet(&mut self, seat: usize, amount: usize) -> Result<(), BetError> {
        self.seat_mut(seat)?.set_pending_bet(amount);
        Ok(())
    }

    pub(super) fn toggle_ready(&mut self, seat: usize, ready: bool) -> Result<(), BetError> {
        let seat = self.seat_mut(seat)?;
        if ready && !seat.bet_is_covered() {
            return Err(BetError::InvalidBet {
                bet: seat.pending_bet(),
                bankroll: seat.bankroll(),
            });
        }
        seat.set_ready(ready);
        Ok(())
    }

    /// Single-seat shortcut: bet on seat 0 and ready it when the bet is covered.
    pub(super) fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let seat = self.seat_mut(0)?;
        seat.set_pending_bet(amount);
        let covered = seat.bet_is_covered();
        seat.set_ready(covered);
        Ok(())
    }

    /// Collects the ready seats, debits their bets, and queues the initial deal.
    pub(super) fn begin_deal(&mut self) -> Result<(), DealError> {
        let participants: Vec<usize> = self
            .seats
            .iter()
            .filter(|seat| seat.is_ready() && seat.bet_is_covered())
            .map(Seat::index)
            .collect();

        if participants.is_empty() {
            return Err(DealError::NoParticipants);
        }

        if should_shuffle(self.shoe.len(), self.card_total, self.rules.penetration) {
            self.rebuild_shoe(self.seed);
        }

        let needed = (participants.len() + 1) * 2;
        if self.shoe.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                remaining: self.shoe.len(),
            });
        }

        for seat in &mut self.seats {
            if participants.contains(&seat.index()) {
                seat.join_round();
            } else {
                seat.sit_out();
            }
        }

        self.round_id += 1;
        self.dealer = DealerHand::new();
        self.active_seat = participants[0];
        self.deal_queue = build_deal_queue(&participants).collect();
        self.participants = participants;
        self.last_result = None;
        self.phase = Phase::Dealing;

        info!(
            round_id = self.round_id,
            seats = self.participants.len(),
            running_count = self.running_count,
            "round started"
        );
        Ok(())
    }

    /// Rebuilds the shoe from `seed` and clears every seat's round state.
    pub(super) fn reshuffle(&mut self, seed: u64) {
        for seat in &mut self.seats {
            self.discard.extend(seat.reset());
        }
        self.dealer = DealerHand::new();
        self.active_seat = 0;
        self.deal_queue.clear();
        self.participants.clear();
        self.last_result = None;
        self.rebuild_shoe(seed);
    }

    pub(super) fn set_rules(&mut self, rules: Rules) -> Result<(), RulesError> {
        if rules.decks == 0 {
            return Err(RulesError::NoDecks);
        }
        if rules.max_hands == 0 {
            return Err(RulesError::NoHands);
        }
        if !(0.0..=1.0).contains(&rules.penetration) {
            return Err(RulesError::Penetration);
        }

        let decks_changed = rules.decks != self.rules.decks;
        self.rules = rules;
        if decks_changed {
            self.rebuild_shoe(self.seed);
        }
        Ok(())
    }
}
