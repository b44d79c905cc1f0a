//! Payout arithmetic.

use crate::options::{RoundingMode, Rules};
use crate::result::Outcome;

/// Insurance returns the stake plus 2:1.
pub const INSURANCE_RETURN: usize = 3;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Amount returned to the player for a settled hand, stake included.
///
/// | Outcome | Returned |
/// |---|---|
/// | `Blackjack` | `bet * (1 + blackjack_payout)` |
/// | `Win` | `2 * bet` |
/// | `Push` | `bet` |
/// | `Surrender` | `bet / 2` |
/// | `Lose` | `0` |
///
/// Fractional amounts are rounded with the table's rounding modes.
#[must_use]
pub fn payout_for(outcome: Outcome, bet: usize, rules: &Rules) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let stake = bet as f64;
    match outcome {
        Outcome::Blackjack => {
            bet + round_amount(stake * rules.blackjack_payout, rules.rounding_blackjack)
        }
        Outcome::Win => bet * 2,
        Outcome::Push => bet,
        Outcome::Surrender => round_amount(stake * 0.5, rules.rounding_surrender),
        Outcome::Lose => 0,
    }
}

/// Amount returned for an insurance bet.
#[must_use]
pub const fn insurance_payout(insurance_bet: usize, dealer_blackjack: bool) -> usize {
    if dealer_blackjack {
        insurance_bet * INSURANCE_RETURN
    } else {
        0
    }
}
