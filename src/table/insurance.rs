use tracing::debug;

use crate::error::InsuranceError;

use super::RoundState;

impl RoundState {
    /// Seat whose insurance decision is pending, if any.
    fn deciding_seat(&self) -> Result<usize, InsuranceError> {
        if !self.rules.allow_insurance {
            return Err(InsuranceError::Disabled);
        }
        let seat = self.active_seat;
        if !self.seats[seat].is_insurance_offered() {
            return Err(InsuranceError::NotOffered(seat));
        }
        Ok(seat)
    }

    /// Largest insurance bet the deciding seat may place.
    pub(super) fn insurance_cap(&self, seat: usize) -> usize {
        let seat = &self.seats[seat];
        let base_bet = seat.hands().first().map_or(0, |hand| hand.bet());
        (base_bet / 2).min(seat.bankroll())
    }

    /// Takes insurance of `min(requested, bet / 2, bankroll)`.
    pub(super) fn take_insurance(&mut self, requested: usize) -> Result<(), InsuranceError> {
        let seat = self.deciding_seat()?;
        let amount = requested.min(self.insurance_cap(seat));
        if amount == 0 {
            return Err(InsuranceError::ZeroAmount);
        }

        let deciding = &mut self.seats[seat];
        deciding.debit(amount);
        deciding.decide_insurance(amount);
        debug!(seat, amount, "insurance taken");

        self.after_insurance_decision(seat);
        Ok(())
    }

    pub(super) fn decline_insurance(&mut self) -> Result<(), InsuranceError> {
        let seat = self.deciding_seat()?;
        self.seats[seat].decide_insurance(0);
        debug!(seat, "insurance declined");

        self.after_insurance_decision(seat);
        Ok(())
    }

    /// Moves to the next undecided seat in round order, or closes the phase.
    fn after_insurance_decision(&mut self, seat: usize) {
        let order = &self.participants;
        let start = order.iter().position(|&s| s == seat).map_or(0, |i| i + 1);
        let next = order[start..]
            .iter()
            .chain(&order[..start])
            .copied()
            .find(|&s| self.seats[s].is_insurance_offered());

        if let Some(next) = next {
            self.active_seat = next;
        } else if self.dealer.is_blackjack() {
            self.settle();
        } else {
            self.begin_player_turns();
        }
    }
}
