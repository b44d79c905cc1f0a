//! Hand evaluation and player/dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Evaluated value of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandValue {
    /// Best total not exceeding 21 when one exists.
    pub total: u8,
    /// Whether an ace is still counted as 11.
    pub is_soft: bool,
    /// Exactly two cards totalling 21.
    pub is_blackjack: bool,
    /// Total over 21.
    pub is_bust: bool,
}

/// Evaluates a sequence of cards.
///
/// Every ace starts at 11; while the total exceeds 21 and an ace is still
/// counted high, 10 is taken off. The hand is soft iff an ace remains high.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            soft_aces += 1;
        }
        total = total.saturating_add(card.rank.value());
    }

    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandValue {
        total,
        is_soft: soft_aces > 0,
        is_blackjack: cards.len() == 2 && total == 21,
        is_bust: total > 21,
    }
}

/// Hand status.
///
/// Anything other than [`HandStatus::Active`] is terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or the hand reached 21).
    Stood,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack.
    Blackjack,
    /// Player has surrendered.
    Surrendered,
}

impl HandStatus {
    /// Returns whether the status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    status: HandStatus,
    doubled: bool,
    split_child: bool,
    split_from_ace: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
            split_child: false,
            split_from_ace: false,
        }
    }

    /// Creates one half of a split pair, holding a single card.
    #[must_use]
    pub fn split_child(card: Card, bet: usize, split_from_ace: bool) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            doubled: false,
            split_child: true,
            split_from_ace,
        }
    }

    /// Adds a card and re-evaluates an active hand.
    ///
    /// Busting sets [`HandStatus::Bust`]. Two cards totalling 21 on a hand
    /// that did not come from a split is a blackjack. Any other 21 stands
    /// the hand automatically. A terminal status is never changed here.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.status.is_terminal() {
            return;
        }

        let value = evaluate(&self.cards);
        if value.is_bust {
            self.status = HandStatus::Bust;
        } else if value.is_blackjack && !self.split_child {
            self.status = HandStatus::Blackjack;
        } else if value.total == 21 {
            self.status = HandStatus::Stood;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Moves an active hand to a terminal status. Terminal hands are left alone.
    pub(crate) const fn finish(&mut self, status: HandStatus) {
        if !self.status.is_terminal() {
            self.status = status;
        }
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet and marks the hand doubled.
    pub(crate) const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_split_child(&self) -> bool {
        self.split_child
    }

    /// Returns whether this hand descends from a split pair of aces.
    #[must_use]
    pub const fn is_split_from_ace(&self) -> bool {
        self.split_from_ace
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is exactly two cards of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes the two cards of a pair for splitting.
    pub(crate) fn take_pair(&mut self) -> Option<(Card, Card)> {
        if self.cards.len() != 2 {
            return None;
        }
        let second = self.cards.pop()?;
        let first = self.cards.pop()?;
        Some((first, second))
    }

    /// Empties the hand, returning its cards.
    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Value of the up card alone.
    #[must_use]
    pub fn up_card_value(&self) -> u8 {
        self.cards.first().map_or(0, |card| card.rank.value())
    }

    /// Evaluates the full hand, hole card included.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.value().is_blackjack
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}
