use crate::hand::HandValue;

use super::RoundState;

/// Whether the dealer draws on `value`.
///
/// The dealer draws below 17, and on a soft 17 unless the table stands on
/// soft 17.
#[must_use]
pub const fn dealer_should_hit(value: HandValue, stands_on_soft_17: bool) -> bool {
    if value.is_bust || value.total > 17 {
        return false;
    }
    if value.total < 17 {
        return true;
    }
    value.is_soft && !stands_on_soft_17
}

impl RoundState {
    fn dealer_must_draw(&self) -> bool {
        dealer_should_hit(self.dealer.value(), self.rules.dealer_stands_on_soft_17)
    }

    /// Plays the dealer out and settles.
    pub(super) fn dealer_play(&mut self) {
        while self.dealer_must_draw() {
            self.deal_to_dealer();
        }
        self.settle();
    }

    /// Draws one dealer card, or settles once the dealer stands.
    ///
    /// Ticking until the phase changes ends on the same cards and result
    /// as [`RoundState::dealer_play`].
    pub(super) fn dealer_tick(&mut self) {
        if self.dealer_must_draw() {
            self.deal_to_dealer();
        } else {
            self.settle();
        }
    }
}
