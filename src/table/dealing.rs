use tracing::debug;

use super::{DealTarget, Phase, RoundState};

impl RoundState {
    /// Deals the next queued card and finishes the deal once the queue is empty.
    pub(super) fn deal_step(&mut self) {
        match self.deal_queue.pop_front() {
            Some(DealTarget::Seat(seat)) => self.deal_to_hand(seat, 0),
            Some(DealTarget::Dealer) => self.deal_to_dealer(),
            None => {}
        }

        if self.deal_queue.is_empty() {
            self.finish_initial_deal();
        }
    }

    /// Routes the table after the last initial card.
    ///
    /// An ace up with insurance enabled always opens the insurance phase,
    /// even over a dealer blackjack, so that insurance can be paid. Any
    /// other dealer blackjack settles at once.
    fn finish_initial_deal(&mut self) {
        let ace_up = self.dealer.up_card().is_some_and(|card| card.rank.is_ace());

        if ace_up && self.rules.allow_insurance {
            for seat in &mut self.seats {
                let offered = self.participants.contains(&seat.index());
                seat.offer_insurance(offered);
            }
            self.active_seat = self.participants[0];
            self.phase = Phase::Insurance;
            debug!(seat = self.active_seat, "insurance offered");
        } else if self.dealer.is_blackjack() {
            self.settle();
        } else {
            self.begin_player_turns();
        }
    }

    /// Points at the first active hand in round order, or skips straight
    /// past the player turns when no hand can act.
    pub(super) fn begin_player_turns(&mut self) {
        let first = self.participants.first().copied();
        match first.and_then(|seat| self.next_active_from(seat)) {
            Some((seat, hand)) => {
                self.phase = Phase::PlayerTurn;
                self.active_seat = seat;
                self.seats[seat].set_active_hand(hand);
            }
            None => self.finish_player_turns(),
        }
    }
}
