use alloc::vec::Vec;

use tracing::info;

use crate::hand::{DealerHand, Hand, HandStatus, HandValue};
use crate::payout::{insurance_payout, payout_for};
use crate::result::{HandResult, Outcome, RoundResult, SeatResult};

use super::{Phase, RoundState};

/// Outcome of one hand against the dealer, in precedence order:
/// surrender, player bust, player blackjack, dealer blackjack, dealer
/// bust, then the higher total.
fn hand_outcome(hand: &Hand, dealer: HandValue) -> Outcome {
    let player = hand.value();
    let player_blackjack = hand.status() == HandStatus::Blackjack;

    if hand.status() == HandStatus::Surrendered {
        Outcome::Surrender
    } else if player.is_bust {
        Outcome::Lose
    } else if player_blackjack && !dealer.is_blackjack {
        Outcome::Blackjack
    } else if dealer.is_blackjack && !player_blackjack {
        Outcome::Lose
    } else if dealer.is_bust || player.total > dealer.total {
        Outcome::Win
    } else if player.total < dealer.total {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

impl RoundState {
    /// Pays every dealt hand, clears the table into the discard, and returns
    /// to betting with a populated [`RoundResult`].
    pub(super) fn settle(&mut self) {
        let dealer = self.dealer.value();
        let mut seat_results = Vec::with_capacity(self.participants.len());

        for &seat_index in &self.participants {
            let seat = &mut self.seats[seat_index];
            let mut hands = Vec::with_capacity(seat.hands().len());
            let mut total_payout = 0;
            let mut total_bet = 0;

            for (hand_index, hand) in seat.hands().iter().enumerate() {
                if hand.is_empty() {
                    continue;
                }
                let outcome = hand_outcome(hand, dealer);
                let payout = payout_for(outcome, hand.bet(), &self.rules);
                total_payout += payout;
                total_bet += hand.bet();
                hands.push(HandResult {
                    seat: seat_index,
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    payout,
                    player_total: hand.value().total,
                    dealer_total: dealer.total,
                });
            }

            let insurance_bet = seat.insurance_bet();
            let insurance_payout = insurance_payout(insurance_bet, dealer.is_blackjack);
            seat.credit(total_payout + insurance_payout);

            #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
            let net = (total_payout + insurance_payout) as isize
                - (total_bet + insurance_bet) as isize;

            seat_results.push(SeatResult {
                seat: seat_index,
                hands,
                total_payout,
                insurance_bet,
                insurance_payout,
                net,
            });
        }

        self.clear_table();

        let result = RoundResult {
            round_id: self.round_id,
            seats: seat_results,
            dealer_total: dealer.total,
            dealer_bust: dealer.is_bust,
            dealer_blackjack: dealer.is_blackjack,
        };
        info!(
            round_id = result.round_id,
            dealer_total = result.dealer_total,
            dealer_bust = result.dealer_bust,
            dealer_blackjack = result.dealer_blackjack,
            net = result.seats.iter().map(|seat| seat.net).sum::<isize>(),
            "round settled"
        );
        self.last_result = Some(result);
    }

    /// Abandons the round in progress: table cards go to the discard and
    /// every outstanding wager is refunded. No result is recorded.
    pub(super) fn end_round(&mut self) {
        let refunded: usize = self
            .seats
            .iter_mut()
            .map(|seat| {
                let wagered = seat.wagered();
                seat.credit(wagered);
                wagered
            })
            .sum();
        if self.phase != Phase::Betting {
            info!(round_id = self.round_id, refunded, "round abandoned");
        }
        self.clear_table();
        for seat in &mut self.seats {
            seat.clear_skipped();
        }
    }

    /// Moves every card on the table to the discard and returns to betting.
    fn clear_table(&mut self) {
        for seat in &mut self.seats {
            self.discard.extend(seat.clear_round());
        }
        self.discard.extend(self.dealer.take_cards());
        self.dealer = DealerHand::new();
        self.active_seat = 0;
        self.deal_queue.clear();
        self.participants.clear();
        self.phase = Phase::Betting;
    }
}
