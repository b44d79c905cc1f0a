//! Read-only views and capability predicates over a snapshot.

use alloc::collections::VecDeque;

use crate::card::Card;
use crate::count::true_count;
use crate::hand::{DealerHand, Hand};
use crate::options::Rules;
use crate::result::RoundResult;
use crate::shoe::{should_shuffle, used_fraction};
use crate::strategy::{Available, Play, recommend};

use super::actions::{check_double, check_split, check_surrender};
use super::{DealTarget, Phase, RoundState, Seat};

impl RoundState {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Undealt cards, next card first.
    #[must_use]
    pub const fn shoe(&self) -> &VecDeque<Card> {
        &self.shoe
    }

    /// Cards played since the last reshuffle.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// All seats, indexed by seat number.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns a seat by index.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Index of the seat whose turn it is (to act or to decide on insurance).
    #[must_use]
    pub const fn active_seat_index(&self) -> usize {
        self.active_seat
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Remaining initial-deal targets.
    #[must_use]
    pub const fn deal_queue(&self) -> &VecDeque<DealTarget> {
        &self.deal_queue
    }

    /// Seats playing the current round, in round order.
    #[must_use]
    pub fn participants(&self) -> &[usize] {
        &self.participants
    }

    /// Hi-Lo running count since the last reshuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count per deck left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> Option<f64> {
        true_count(self.running_count, self.shoe.len())
    }

    /// Table rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of the current round, or of the last one dealt.
    #[must_use]
    pub const fn round_id(&self) -> u64 {
        self.round_id
    }

    /// Result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Number of cards in circulation for this shoe.
    #[must_use]
    pub const fn card_total(&self) -> usize {
        self.card_total
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Cards across the shoe, discard, every seat hand, and the dealer hand.
    /// Always equals [`RoundState::card_total`].
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self
            .seats
            .iter()
            .flat_map(Seat::hands)
            .map(Hand::len)
            .sum();
        self.shoe.len() + self.discard.len() + in_hands + self.dealer.len()
    }

    /// Fraction of the shoe already dealt.
    #[must_use]
    pub fn penetration_used(&self) -> f64 {
        used_fraction(self.shoe.len(), self.card_total)
    }

    /// Whether the next deal will reshuffle first.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        should_shuffle(self.shoe.len(), self.card_total, self.rules.penetration)
    }

    /// Whether the dealer's hole card is still face down.
    #[must_use]
    pub const fn dealer_hole_hidden(&self) -> bool {
        matches!(
            self.phase,
            Phase::Dealing | Phase::Insurance | Phase::PlayerTurn
        )
    }

    /// The seat whose turn it is, outside the betting phase.
    #[must_use]
    pub fn active_seat(&self) -> Option<&Seat> {
        match self.phase {
            Phase::Insurance | Phase::PlayerTurn => self.seats.get(self.active_seat),
            Phase::Betting | Phase::Dealing | Phase::DealerTurn => None,
        }
    }

    /// The hand taking player actions.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }
        let (seat, hand) = self.active_indices().ok()?;
        self.seats[seat].hands().get(hand)
    }

    fn active_seat_and_hand(&self) -> Option<(&Seat, &Hand)> {
        let hand = self.active_hand()?;
        Some((&self.seats[self.active_seat], hand))
    }

    /// Whether a deal can begin.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.phase == Phase::Betting
            && self
                .seats
                .iter()
                .any(|seat| seat.is_ready() && seat.bet_is_covered())
    }

    /// Whether the active hand can hit.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.active_hand().is_some()
    }

    /// Whether the active hand can stand.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.active_hand().is_some()
    }

    /// Whether the active hand can double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.active_seat_and_hand()
            .is_some_and(|(seat, hand)| check_double(&self.rules, seat, hand).is_ok())
    }

    /// Whether the active hand can split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.active_seat_and_hand()
            .is_some_and(|(seat, hand)| check_split(&self.rules, seat, hand).is_ok())
    }

    /// Whether the active hand can surrender.
    #[must_use]
    pub fn can_surrender(&self) -> bool {
        self.active_hand()
            .is_some_and(|hand| check_surrender(&self.rules, hand).is_ok())
    }

    /// Largest insurance bet the deciding seat can take; 0 outside insurance.
    #[must_use]
    pub fn max_insurance(&self) -> usize {
        match self.active_seat() {
            Some(seat) if self.phase == Phase::Insurance && seat.is_insurance_offered() => {
                self.insurance_cap(seat.index())
            }
            _ => 0,
        }
    }

    /// Whether the deciding seat can take a non-zero insurance bet.
    #[must_use]
    pub fn can_take_insurance(&self) -> bool {
        self.rules.allow_insurance && self.max_insurance() > 0
    }

    /// Basic-strategy play for the active hand against the dealer up card.
    #[must_use]
    pub fn recommended_play(&self) -> Option<Play> {
        let hand = self.active_hand()?;
        let up = self.dealer.up_card_value();
        if up == 0 {
            return None;
        }
        let available = Available {
            split: self.can_split(),
            double: self.can_double(),
            surrender: self.can_surrender(),
            double_after_split: self.rules.allow_double_after_split,
        };
        Some(recommend(hand, up, available))
    }
}
