//! Round result types produced by settlement.

use alloc::vec::Vec;

/// Settled outcome of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player beats the dealer or the dealer busts.
    Win,
    /// Player busts, is beaten, or runs into a dealer blackjack.
    Lose,
    /// Tie; the stake is returned.
    Push,
    /// Natural blackjack against a dealer without one.
    Blackjack,
    /// Player surrendered half the bet.
    Surrender,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// Seat that played the hand.
    pub seat: usize,
    /// Index of the hand within the seat (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The bet riding on the hand, doubled if the hand was doubled.
    pub bet: usize,
    /// Amount credited back to the bankroll, stake included.
    pub payout: usize,
    /// The player's hand total.
    pub player_total: u8,
    /// The dealer's hand total.
    pub dealer_total: u8,
}

/// Result for one participating seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total returned for all hands, insurance excluded.
    pub total_payout: usize,
    /// Insurance bet amount (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 unless the dealer had blackjack).
    pub insurance_payout: usize,
    /// Net result over the round (positive = profit).
    pub net: isize,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Round the result belongs to.
    pub round_id: u64,
    /// Results for each participating seat, in round order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Iterates over every hand result in round order.
    pub fn hands(&self) -> impl Iterator<Item = &HandResult> {
        self.seats.iter().flat_map(|seat| seat.hands.iter())
    }

    /// Returns the result for `seat`, if it took part in the round.
    #[must_use]
    pub fn seat(&self, seat: usize) -> Option<&SeatResult> {
        self.seats.iter().find(|result| result.seat == seat)
    }
}
