//! Table rules configuration.

use alloc::vec::Vec;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Rules for a blackjack table.
///
/// Use the builder methods to customize:
///
/// ```
/// use bjtrain::Rules;
///
/// let rules = Rules::default()
///     .with_decks(2)
///     .with_blackjack_payout(1.2)
///     .with_dealer_stands_on_soft_17(false);
/// assert_eq!(rules.decks, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer stands on soft 17.
    pub dealer_stands_on_soft_17: bool,
    /// Profit multiplier on a blackjack (1.5 pays 3:2).
    pub blackjack_payout: f64,
    /// Whether surrender is allowed.
    pub allow_surrender: bool,
    /// Whether doubling down is allowed.
    pub allow_double: bool,
    /// Whether splitting pairs is allowed.
    pub allow_split: bool,
    /// Whether hands from split aces may be split again.
    pub allow_resplit_aces: bool,
    /// Whether hands from split aces may take more than one card.
    pub allow_hit_split_aces: bool,
    /// Whether doubling is allowed on split hands.
    pub allow_double_after_split: bool,
    /// Whether insurance is offered against a dealer ace.
    pub allow_insurance: bool,
    /// Maximum number of hands one seat may hold after splits.
    pub max_hands: u8,
    /// Fraction of the shoe dealt before a reshuffle is forced.
    /// 0 reshuffles before every deal.
    pub penetration: f64,
    /// Totals on which doubling is allowed; `None` allows any total.
    pub double_allowed_totals: Option<Vec<u8>>,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for surrender refunds.
    pub rounding_surrender: RoundingMode,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            decks: 6,
            dealer_stands_on_soft_17: true,
            blackjack_payout: 1.5,
            allow_surrender: true,
            allow_double: true,
            allow_split: true,
            allow_resplit_aces: false,
            allow_hit_split_aces: false,
            allow_double_after_split: true,
            allow_insurance: true,
            max_hands: 4,
            penetration: 0.75,
            double_allowed_totals: None,
            rounding_blackjack: RoundingMode::Down,
            rounding_surrender: RoundingMode::Nearest,
        }
    }
}

impl Rules {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrain::Rules;
    ///
    /// let rules = Rules::default().with_dealer_stands_on_soft_17(false);
    /// assert!(!rules.dealer_stands_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on_soft_17(mut self, stands: bool) -> Self {
        self.dealer_stands_on_soft_17 = stands;
        self
    }

    /// Sets the blackjack profit multiplier.
    #[must_use]
    pub const fn with_blackjack_payout(mut self, multiplier: f64) -> Self {
        self.blackjack_payout = multiplier;
        self
    }

    /// Sets whether surrender is allowed.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.allow_surrender = allowed;
        self
    }

    /// Sets whether doubling is allowed.
    #[must_use]
    pub const fn with_double(mut self, allowed: bool) -> Self {
        self.allow_double = allowed;
        self
    }

    /// Sets whether splitting is allowed.
    #[must_use]
    pub const fn with_split(mut self, allowed: bool) -> Self {
        self.allow_split = allowed;
        self
    }

    /// Sets whether split aces may be split again.
    #[must_use]
    pub const fn with_resplit_aces(mut self, allowed: bool) -> Self {
        self.allow_resplit_aces = allowed;
        self
    }

    /// Sets whether split aces may be hit.
    #[must_use]
    pub const fn with_hit_split_aces(mut self, allowed: bool) -> Self {
        self.allow_hit_split_aces = allowed;
        self
    }

    /// Sets whether doubling after a split is allowed.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.allow_double_after_split = allowed;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.allow_insurance = offered;
        self
    }

    /// Sets the maximum number of hands per seat.
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: u8) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the shoe penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrain::Rules;
    ///
    /// let rules = Rules::default().with_penetration(0.8);
    /// assert_eq!(rules.penetration, 0.8);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Restricts doubling to the given totals.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrain::Rules;
    ///
    /// let rules = Rules::default().with_double_totals([9, 10, 11]);
    /// assert!(rules.allows_double_on(10));
    /// assert!(!rules.allows_double_on(12));
    /// ```
    #[must_use]
    pub fn with_double_totals(mut self, totals: impl IntoIterator<Item = u8>) -> Self {
        self.double_allowed_totals = Some(totals.into_iter().collect());
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for surrender refunds.
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Returns whether the allowed-totals restriction admits `total`.
    #[must_use]
    pub fn allows_double_on(&self, total: u8) -> bool {
        self.double_allowed_totals
            .as_ref()
            .is_none_or(|totals| totals.contains(&total))
    }
}
