//! A seat at the table.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, HandStatus};

/// One seat: a bankroll plus the round-scoped betting state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    index: usize,
    bankroll: usize,
    pending_bet: usize,
    ready: bool,
    hands: Vec<Hand>,
    active_hand: usize,
    insurance_bet: usize,
    insurance_offered: bool,
    skipped_round: bool,
}

impl Seat {
    pub(crate) const fn new(index: usize, bankroll: usize) -> Self {
        Self {
            index,
            bankroll,
            pending_bet: 0,
            ready: false,
            hands: Vec::new(),
            active_hand: 0,
            insurance_bet: 0,
            insurance_offered: false,
            skipped_round: false,
        }
    }

    /// Seat index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Chips not currently wagered.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Bet the seat intends to play next round.
    #[must_use]
    pub const fn pending_bet(&self) -> usize {
        self.pending_bet
    }

    /// Whether the seat is ready for the next deal.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Hands in play this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Index of the hand currently being played.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Insurance wagered this round.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Whether the seat still has to decide on insurance.
    #[must_use]
    pub const fn is_insurance_offered(&self) -> bool {
        self.insurance_offered
    }

    /// Whether the seat tried to bet but sat out the current round.
    #[must_use]
    pub const fn skipped_round(&self) -> bool {
        self.skipped_round
    }

    /// Whether the pending bet can be played from the bankroll.
    #[must_use]
    pub const fn bet_is_covered(&self) -> bool {
        self.pending_bet > 0 && self.pending_bet <= self.bankroll
    }

    /// Index of the first hand still taking actions.
    #[must_use]
    pub fn first_active_hand(&self) -> Option<usize> {
        self.hands
            .iter()
            .position(|hand| hand.status() == HandStatus::Active)
    }

    /// Chips riding on this seat's hands and insurance.
    #[must_use]
    pub fn wagered(&self) -> usize {
        self.hands.iter().map(Hand::bet).sum::<usize>() + self.insurance_bet
    }

    pub(crate) const fn set_pending_bet(&mut self, amount: usize) {
        self.pending_bet = amount;
        self.ready = false;
    }

    pub(crate) const fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Debits the pending bet and opens the seat's first hand.
    pub(crate) fn join_round(&mut self) {
        let bet = self.pending_bet;
        self.bankroll -= bet;
        self.pending_bet = 0;
        self.ready = false;
        self.hands = alloc::vec![Hand::new(bet)];
        self.active_hand = 0;
        self.insurance_bet = 0;
        self.insurance_offered = false;
        self.skipped_round = false;
    }

    /// Leaves the seat out of the round being dealt.
    pub(crate) fn sit_out(&mut self) {
        self.skipped_round = self.pending_bet > 0 || self.ready;
        self.ready = false;
        self.hands.clear();
        self.active_hand = 0;
        self.insurance_bet = 0;
        self.insurance_offered = false;
    }

    pub(crate) fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }

    pub(crate) const fn set_active_hand(&mut self, index: usize) {
        self.active_hand = index;
    }

    pub(crate) const fn debit(&mut self, amount: usize) {
        self.bankroll -= amount;
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    pub(crate) const fn offer_insurance(&mut self, offered: bool) {
        self.insurance_offered = offered;
        self.insurance_bet = 0;
    }

    /// Records the insurance decision; `amount` must already be debited.
    pub(crate) const fn decide_insurance(&mut self, amount: usize) {
        self.insurance_bet = amount;
        self.insurance_offered = false;
    }

    /// Clears hands and insurance, returning the cards that were on the table.
    pub(crate) fn clear_round(&mut self) -> Vec<Card> {
        let cards = self
            .hands
            .iter_mut()
            .flat_map(Hand::take_cards)
            .collect();
        self.hands.clear();
        self.active_hand = 0;
        self.ready = false;
        self.insurance_bet = 0;
        self.insurance_offered = false;
        cards
    }

    pub(crate) const fn clear_skipped(&mut self) {
        self.skipped_round = false;
    }

    /// Clears every round-scoped field, the pending bet included.
    pub(crate) fn reset(&mut self) -> Vec<Card> {
        let cards = self.clear_round();
        self.pending_bet = 0;
        self.skipped_round = false;
        cards
    }
}
