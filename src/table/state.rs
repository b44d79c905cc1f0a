//! Phase and action types.

use crate::options::Rules;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Seats set bets and mark themselves ready.
    Betting,
    /// The deal queue is being drained.
    Dealing,
    /// Participants decide on insurance against a dealer ace.
    Insurance,
    /// The active hand takes player actions.
    PlayerTurn,
    /// The dealer draws to a standing total.
    DealerTurn,
}

/// Recipient of the next card in the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DealTarget {
    /// First hand of the given seat.
    Seat(usize),
    /// The dealer.
    Dealer,
}

/// An input to the transition function.
///
/// Player actions (`Hit` through `Surrender`) always apply to the active
/// hand, and insurance decisions to the seat whose turn it is to decide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Adds a seat with the session's starting bankroll.
    AddSeat,
    /// Sets a seat's pending bet and clears its ready flag.
    SetBet {
        /// Seat index.
        seat: usize,
        /// Bet amount.
        amount: usize,
    },
    /// Marks a seat ready (only with a covered bet) or not ready.
    ToggleReady {
        /// Seat index.
        seat: usize,
        /// Requested ready flag.
        ready: bool,
    },
    /// Sets seat 0's bet and readies it when covered.
    PlaceBet {
        /// Bet amount.
        amount: usize,
    },
    /// Begins a deal and drains the whole deal queue.
    Deal,
    /// Begins a deal, leaving the queue to be drained by `DealStep`.
    BeginDeal,
    /// Deals the next card from the deal queue.
    DealStep,
    /// Draws a card to the active hand.
    Hit,
    /// Stands the active hand.
    Stand,
    /// Doubles the bet and draws exactly one card.
    Double,
    /// Splits a pair into two hands.
    Split,
    /// Surrenders half the bet.
    Surrender,
    /// Takes insurance, capped at half the bet and the bankroll.
    TakeInsurance {
        /// Requested insurance amount.
        amount: usize,
    },
    /// Declines insurance.
    DeclineInsurance,
    /// Plays the dealer out and settles.
    DealerPlay,
    /// Draws one dealer card, or settles once the dealer stands.
    DealerTick,
    /// Abandons the round in progress and returns to betting.
    EndRound,
    /// Rebuilds the shoe from a fresh seed.
    Reshuffle {
        /// Shuffle seed.
        seed: u64,
    },
    /// Replaces the table rules.
    SetRules(Rules),
}

/// Fieldless tag of an [`Action`], used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// [`Action::AddSeat`].
    AddSeat,
    /// [`Action::SetBet`].
    SetBet,
    /// [`Action::ToggleReady`].
    ToggleReady,
    /// [`Action::PlaceBet`].
    PlaceBet,
    /// [`Action::Deal`].
    Deal,
    /// [`Action::BeginDeal`].
    BeginDeal,
    /// [`Action::DealStep`].
    DealStep,
    /// [`Action::Hit`].
    Hit,
    /// [`Action::Stand`].
    Stand,
    /// [`Action::Double`].
    Double,
    /// [`Action::Split`].
    Split,
    /// [`Action::Surrender`].
    Surrender,
    /// [`Action::TakeInsurance`].
    TakeInsurance,
    /// [`Action::DeclineInsurance`].
    DeclineInsurance,
    /// [`Action::DealerPlay`].
    DealerPlay,
    /// [`Action::DealerTick`].
    DealerTick,
    /// [`Action::EndRound`].
    EndRound,
    /// [`Action::Reshuffle`].
    Reshuffle,
    /// [`Action::SetRules`].
    SetRules,
}

impl Action {
    /// Returns the action's tag.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::AddSeat => ActionKind::AddSeat,
            Self::SetBet { .. } => ActionKind::SetBet,
            Self::ToggleReady { .. } => ActionKind::ToggleReady,
            Self::PlaceBet { .. } => ActionKind::PlaceBet,
            Self::Deal => ActionKind::Deal,
            Self::BeginDeal => ActionKind::BeginDeal,
            Self::DealStep => ActionKind::DealStep,
            Self::Hit => ActionKind::Hit,
            Self::Stand => ActionKind::Stand,
            Self::Double => ActionKind::Double,
            Self::Split => ActionKind::Split,
            Self::Surrender => ActionKind::Surrender,
            Self::TakeInsurance { .. } => ActionKind::TakeInsurance,
            Self::DeclineInsurance => ActionKind::DeclineInsurance,
            Self::DealerPlay => ActionKind::DealerPlay,
            Self::DealerTick => ActionKind::DealerTick,
            Self::EndRound => ActionKind::EndRound,
            Self::Reshuffle { .. } => ActionKind::Reshuffle,
            Self::SetRules(_) => ActionKind::SetRules,
        }
    }
}
