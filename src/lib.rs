//! A deterministic blackjack round engine and Hi-Lo counting trainer with
//! optional `no_std` support.
//!
//! The whole table lives in one [`RoundState`] snapshot. Every change is a
//! pure [`transition`] from one snapshot and one [`Action`] to the next
//! snapshot, so a session replays exactly from its seed and action log.
//!
//! # Example
//!
//! ```
//! use bjtrain::{transition, Action, Phase, RoundState, Rules, TableConfig};
//!
//! let state = RoundState::new(
//!     TableConfig::default()
//!         .with_bankroll(100)
//!         .with_rules(Rules::default().with_decks(1))
//!         .with_seed(42),
//! );
//! let state = transition(&state, Action::PlaceBet { amount: 10 });
//! let state = transition(&state, Action::Deal);
//! assert_ne!(state.phase(), Phase::Dealing);
//! assert_eq!(state.round_id(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod hand;
pub mod options;
pub mod payout;
pub mod result;
pub mod shoe;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, DealError, InsuranceError, RulesError, TransitionError,
};
pub use hand::{DealerHand, Hand, HandStatus, HandValue, evaluate};
pub use options::{RoundingMode, Rules};
pub use result::{HandResult, Outcome, RoundResult, SeatResult};
pub use strategy::Play;
pub use table::{
    Action, ActionKind, DealTarget, MAX_SEATS, Phase, RoundState, Seat, TableConfig, transition,
    try_transition,
};
