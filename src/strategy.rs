//! Basic-strategy advisor.
//!
//! Recommends the textbook play for a multi-deck game against the dealer's
//! up card. Plays the table does not allow right now fall back to the
//! next-best legal play.

use crate::card::Rank;
use crate::hand::Hand;

/// A recommended player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Play {
    /// Take a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and take one card.
    Double,
    /// Split the pair.
    Split,
    /// Give up half the bet.
    Surrender,
}

/// Which optional plays are currently legal for the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Available {
    /// Splitting is legal.
    pub split: bool,
    /// Doubling is legal.
    pub double: bool,
    /// Surrender is legal.
    pub surrender: bool,
    /// The table allows doubling after a split.
    pub double_after_split: bool,
}

fn should_split(rank: Rank, up: u8, das: bool) -> bool {
    match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Five => false,
        Rank::Nine => matches!(up, 2..=6 | 8 | 9),
        Rank::Seven => (2..=7).contains(&up),
        Rank::Six => (3..=6).contains(&up) || (up == 2 && das),
        Rank::Four => matches!(up, 5 | 6) && das,
        Rank::Two | Rank::Three => (4..=7).contains(&up) || (matches!(up, 2 | 3) && das),
    }
}

const fn double_or(available: Available, fallback: Play) -> Play {
    if available.double {
        Play::Double
    } else {
        fallback
    }
}

/// Recommends a play for `hand` against a dealer up card worth `up`
/// (2 through 11, an ace counting 11).
#[must_use]
pub fn recommend(hand: &Hand, up: u8, available: Available) -> Play {
    let value = hand.value();
    let total = value.total;

    if available.split
        && hand.is_pair()
        && should_split(hand.cards()[0].rank, up, available.double_after_split)
    {
        return Play::Split;
    }

    if available.surrender && ((total == 16 && up >= 9) || (total == 15 && up == 10)) && !value.is_soft
    {
        return Play::Surrender;
    }

    if value.is_soft {
        return match total {
            19.. => Play::Stand,
            18 => match up {
                3..=6 => double_or(available, Play::Stand),
                2 | 7 | 8 => Play::Stand,
                _ => Play::Hit,
            },
            17 if (3..=6).contains(&up) => double_or(available, Play::Hit),
            15 | 16 if (4..=6).contains(&up) => double_or(available, Play::Hit),
            13 | 14 if matches!(up, 5 | 6) => double_or(available, Play::Hit),
            _ => Play::Hit,
        };
    }

    match total {
        17.. => Play::Stand,
        13..=16 if up <= 6 => Play::Stand,
        12 if (4..=6).contains(&up) => Play::Stand,
        11 if up <= 10 => double_or(available, Play::Hit),
        10 if up <= 9 => double_or(available, Play::Hit),
        9 if (3..=6).contains(&up) => double_or(available, Play::Hit),
        _ => Play::Hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new(10);
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Diamonds));
        }
        hand
    }

    const ALL: Available = Available {
        split: true,
        double: true,
        surrender: true,
        double_after_split: true,
    };

    #[test]
    fn pairs() {
        assert_eq!(recommend(&hand(&[Rank::Eight, Rank::Eight]), 10, ALL), Play::Split);
        assert_eq!(recommend(&hand(&[Rank::Ten, Rank::Ten]), 6, ALL), Play::Stand);
        assert_eq!(recommend(&hand(&[Rank::Nine, Rank::Nine]), 7, ALL), Play::Stand);
        assert_eq!(recommend(&hand(&[Rank::Five, Rank::Five]), 6, ALL), Play::Double);
    }

    #[test]
    fn hard_totals() {
        assert_eq!(recommend(&hand(&[Rank::Ten, Rank::Six]), 10, ALL), Play::Surrender);
        let no_surrender = Available {
            surrender: false,
            ..ALL
        };
        assert_eq!(recommend(&hand(&[Rank::Ten, Rank::Six]), 10, no_surrender), Play::Hit);
        assert_eq!(recommend(&hand(&[Rank::Ten, Rank::Two]), 4, ALL), Play::Stand);
        assert_eq!(recommend(&hand(&[Rank::Six, Rank::Five]), 10, ALL), Play::Double);
        assert_eq!(recommend(&hand(&[Rank::Six, Rank::Five]), 11, ALL), Play::Hit);
    }

    #[test]
    fn soft_totals() {
        assert_eq!(recommend(&hand(&[Rank::Ace, Rank::Seven]), 4, ALL), Play::Double);
        let no_double = Available {
            double: false,
            ..ALL
        };
        assert_eq!(recommend(&hand(&[Rank::Ace, Rank::Seven]), 4, no_double), Play::Stand);
        assert_eq!(recommend(&hand(&[Rank::Ace, Rank::Seven]), 9, ALL), Play::Hit);
        assert_eq!(recommend(&hand(&[Rank::Ace, Rank::Two]), 5, ALL), Play::Double);
    }
}
