//! Error types describing why a transition was rejected.
//!
//! A rejected action never changes the table; [`crate::transition`] hands
//! back the input state and [`crate::try_transition`] reports one of these.

use thiserror::Error;

use crate::table::{ActionKind, Phase};

/// Errors that can occur while seating players and placing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Seat not found.
    #[error("seat {0} not found")]
    SeatNotFound(usize),
    /// The table has no free seat.
    #[error("the table is full")]
    TableFull,
    /// Bet is zero or larger than the bankroll.
    #[error("bet of {bet} is not covered by bankroll {bankroll}")]
    InvalidBet {
        /// Pending bet.
        bet: usize,
        /// Seat bankroll.
        bankroll: usize,
    },
}

/// Errors that can occur when starting or stepping a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No seat is ready with a covered bet.
    #[error("no seat is ready with a valid bet")]
    NoParticipants,
    /// Not enough cards in the shoe for the initial deal.
    #[error("not enough cards in the shoe: {needed} needed, {remaining} left")]
    NotEnoughCards {
        /// Cards the initial deal needs.
        needed: usize,
        /// Cards left in the shoe.
        remaining: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The active pointer does not reference an active hand.
    #[error("no active hand")]
    NoActiveHand,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot surrender this hand.
    #[error("cannot surrender this hand")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not offered at this table.
    #[error("insurance is not offered at this table")]
    Disabled,
    /// The deciding seat has no pending insurance offer.
    #[error("seat {0} has no insurance offer")]
    NotOffered(usize),
    /// The capped insurance amount is zero.
    #[error("insurance amount is zero after capping")]
    ZeroAmount,
}

/// Errors in a rules update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The shoe needs at least one deck.
    #[error("deck count must be at least 1")]
    NoDecks,
    /// A seat must be able to hold at least one hand.
    #[error("max hands must be at least 1")]
    NoHands,
    /// Penetration outside `0.0..=1.0`.
    #[error("penetration must be within 0..=1")]
    Penetration,
}

/// Any reason a transition is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The action is not legal in the current phase.
    #[error("{action:?} is not legal during {phase:?}")]
    WrongPhase {
        /// Phase the table was in.
        phase: Phase,
        /// Action that was attempted.
        action: ActionKind,
    },
    /// Betting error.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing error.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Player action error.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Insurance error.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// Rules error.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
