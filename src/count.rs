//! Hi-Lo card counting.

use crate::card::{Card, DECK_SIZE, Rank};

/// Hi-Lo weight of a rank: low cards +1, neutral cards 0, tens and aces -1.
#[must_use]
pub const fn hi_lo_weight(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Adds one card's weight to a running count.
#[must_use]
pub const fn update_running_count(running_count: i32, card: &Card) -> i32 {
    running_count + hi_lo_weight(card.rank)
}

/// Adds the weights of several cards to a running count.
#[must_use]
pub fn count_cards<'a>(running_count: i32, cards: impl IntoIterator<Item = &'a Card>) -> i32 {
    cards.into_iter().fold(running_count, update_running_count)
}

/// Decks left in the shoe, as a fraction.
#[must_use]
pub fn decks_remaining(cards_remaining: usize) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let decks = cards_remaining as f64 / DECK_SIZE as f64;
    decks
}

/// Running count divided by the decks still in the shoe.
///
/// Returns `None` when the shoe is empty.
#[must_use]
pub fn true_count(running_count: i32, cards_remaining: usize) -> Option<f64> {
    if cards_remaining == 0 {
        return None;
    }
    Some(f64::from(running_count) / decks_remaining(cards_remaining))
}
