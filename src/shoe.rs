//! Deck and shoe construction, seeded shuffling, and the penetration rule.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds one ordered 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Concatenates `decks` ordered decks into an unshuffled shoe.
#[must_use]
pub fn build_shoe(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(usize::from(decks) * DECK_SIZE);
    for _ in 0..decks {
        cards.extend(standard_deck());
    }
    cards
}

/// Shuffles `cards` with a Fisher-Yates pass driven by a generator seeded
/// from `seed`. The same seed always yields the same order.
pub fn shuffle(cards: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
}

/// Derives the seed for the next shuffle in a chain.
#[must_use]
pub fn next_seed(seed: u64) -> u64 {
    ChaCha8Rng::seed_from_u64(seed).next_u64()
}

/// Builds and shuffles a full shoe, returned in draw order.
#[must_use]
pub fn shuffled_shoe(decks: u8, seed: u64) -> VecDeque<Card> {
    let mut cards = build_shoe(decks);
    shuffle(&mut cards, seed);
    cards.into()
}

/// Returns whether the fraction of `total` already drawn from the shoe has
/// reached `penetration`.
///
/// A penetration of `0.0` reshuffles before every deal. An empty `total`
/// never reshuffles.
#[must_use]
pub fn should_shuffle(remaining: usize, total: usize, penetration: f64) -> bool {
    if total == 0 {
        return false;
    }
    used_fraction(remaining, total) >= penetration
}

/// Fraction of `total` cards no longer in the shoe.
#[must_use]
pub fn used_fraction(remaining: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(remaining);
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let fraction = used as f64 / total as f64;
    fraction
}
