use tracing::debug;

use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::options::Rules;

use super::{Phase, RoundState, Seat};

/// Split gate: a pair, room for another hand, the bet covered, and
/// ace-resplit permission for hands that came from split aces.
pub(super) fn check_split(rules: &Rules, seat: &Seat, hand: &Hand) -> Result<(), ActionError> {
    if !rules.allow_split || !hand.is_pair() {
        return Err(ActionError::CannotSplit);
    }
    if seat.hands().len() >= usize::from(rules.max_hands) {
        return Err(ActionError::CannotSplit);
    }
    if hand.is_split_from_ace() && !rules.allow_resplit_aces {
        return Err(ActionError::CannotSplit);
    }
    if seat.bankroll() < hand.bet() {
        return Err(ActionError::InsufficientFunds);
    }
    Ok(())
}

/// Double gate: two cards, DAS for split hands, an allowed total, and the
/// bet covered.
pub(super) fn check_double(rules: &Rules, seat: &Seat, hand: &Hand) -> Result<(), ActionError> {
    if !rules.allow_double || hand.len() != 2 {
        return Err(ActionError::CannotDouble);
    }
    if hand.is_split_child() && !rules.allow_double_after_split {
        return Err(ActionError::CannotDouble);
    }
    if !rules.allows_double_on(hand.value().total) {
        return Err(ActionError::CannotDouble);
    }
    if seat.bankroll() < hand.bet() {
        return Err(ActionError::InsufficientFunds);
    }
    Ok(())
}

pub(super) fn check_surrender(rules: &Rules, hand: &Hand) -> Result<(), ActionError> {
    if !rules.allow_surrender || hand.len() != 2 {
        return Err(ActionError::CannotSurrender);
    }
    Ok(())
}

impl RoundState {
    /// Seat and hand indices of the active hand.
    pub(super) fn active_indices(&self) -> Result<(usize, usize), ActionError> {
        let seat_index = self.active_seat;
        let seat = self.seats.get(seat_index).ok_or(ActionError::NoActiveHand)?;
        let hand_index = seat.active_hand_index();
        match seat.hands().get(hand_index) {
            Some(hand) if hand.status() == HandStatus::Active => Ok((seat_index, hand_index)),
            _ => Err(ActionError::NoActiveHand),
        }
    }

    fn active_hand_mut(&mut self, seat: usize, hand: usize) -> &mut Hand {
        &mut self.seats[seat].hands_mut()[hand]
    }

    pub(super) fn hit(&mut self) -> Result<(), ActionError> {
        let (seat, hand) = self.active_indices()?;
        self.deal_to_hand(seat, hand);
        if self.seats[seat].hands()[hand].status().is_terminal() {
            self.advance_after_action();
        }
        Ok(())
    }

    pub(super) fn stand(&mut self) -> Result<(), ActionError> {
        let (seat, hand) = self.active_indices()?;
        self.active_hand_mut(seat, hand).finish(HandStatus::Stood);
        self.advance_after_action();
        Ok(())
    }

    /// Doubles the bet, draws one card, and stands unless the card busts.
    pub(super) fn double_down(&mut self) -> Result<(), ActionError> {
        let (seat, hand) = self.active_indices()?;
        let current = &self.seats[seat];
        check_double(&self.rules, current, &current.hands()[hand])?;

        let bet = current.hands()[hand].bet();
        self.seats[seat].debit(bet);
        self.active_hand_mut(seat, hand).double_bet();
        self.deal_to_hand(seat, hand);
        self.active_hand_mut(seat, hand).finish(HandStatus::Stood);
        debug!(seat, hand, bet, "doubled");

        self.advance_after_action();
        Ok(())
    }

    /// Splits the active pair into two hands that each draw one card.
    ///
    /// Split aces stand after their one card unless the rules allow hitting them.
    pub(super) fn split(&mut self) -> Result<(), ActionError> {
        let (seat, hand) = self.active_indices()?;
        let current = &self.seats[seat];
        check_split(&self.rules, current, &current.hands()[hand])?;

        let parent = &mut self.seats[seat].hands_mut()[hand];
        let bet = parent.bet();
        let descends_from_ace = parent.is_split_from_ace();
        let (first, second) = parent.take_pair().ok_or(ActionError::CannotSplit)?;
        let from_ace = descends_from_ace || first.rank.is_ace();

        let splitting = &mut self.seats[seat];
        splitting.debit(bet);
        let hands = splitting.hands_mut();
        hands[hand] = Hand::split_child(first, bet, from_ace);
        hands.insert(hand + 1, Hand::split_child(second, bet, from_ace));

        self.deal_to_hand(seat, hand);
        self.deal_to_hand(seat, hand + 1);

        if from_ace && !self.rules.allow_hit_split_aces {
            self.active_hand_mut(seat, hand).finish(HandStatus::Stood);
            self.active_hand_mut(seat, hand + 1).finish(HandStatus::Stood);
        }
        debug!(seat, hand, bet, from_ace, "split");

        self.advance_after_action();
        Ok(())
    }

    pub(super) fn surrender(&mut self) -> Result<(), ActionError> {
        let (seat, hand) = self.active_indices()?;
        check_surrender(&self.rules, &self.seats[seat].hands()[hand])?;
        self.active_hand_mut(seat, hand).finish(HandStatus::Surrendered);
        self.advance_after_action();
        Ok(())
    }

    /// First active hand in round order starting at `start` and wrapping.
    pub(super) fn next_active_from(&self, start: usize) -> Option<(usize, usize)> {
        let order = &self.participants;
        let from = order.iter().position(|&seat| seat == start).unwrap_or(0);
        order[from..]
            .iter()
            .chain(&order[..from])
            .find_map(|&seat| self.seats[seat].first_active_hand().map(|hand| (seat, hand)))
    }

    /// Moves the active pointer after a player action.
    ///
    /// The current seat keeps the turn while it has an active hand;
    /// otherwise the turn passes along the round order.
    fn advance_after_action(&mut self) {
        let seat = self.active_seat;
        if let Some(hand) = self.seats[seat].first_active_hand() {
            self.seats[seat].set_active_hand(hand);
            return;
        }

        match self.next_active_from(seat) {
            Some((next, hand)) => {
                self.active_seat = next;
                self.seats[next].set_active_hand(hand);
            }
            None => self.finish_player_turns(),
        }
    }

    /// Leaves the player turns: the dealer plays if any stood hand still
    /// depends on the dealer's total, otherwise the round settles at once.
    ///
    /// Busts, surrenders, and naturals are already decided once the dealer's
    /// blackjack is known.
    pub(super) fn finish_player_turns(&mut self) {
        let any_live = self.participants.iter().any(|&seat| {
            self.seats[seat]
                .hands()
                .iter()
                .any(|hand| matches!(hand.status(), HandStatus::Stood | HandStatus::Active))
        });

        if any_live {
            self.phase = Phase::DealerTurn;
        } else {
            self.settle();
        }
    }
}
