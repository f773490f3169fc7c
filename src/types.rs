// 1.0: primitives. player ids and money. every amount in the crate is a Money so
// rounding to cents happens in one place.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Balances at or below this magnitude count as settled.
pub const SETTLE_TOLERANCE: Money = Money(dec!(0.01));

/// Largest single buy-in or cash-out a ledger accepts.
pub const MAX_AMOUNT: Money = Money(dec!(1_000_000_000));

// 1.1: minor currency unit precision. two decimals, midpoint away from zero so a
// debt and the matching credit round to the same magnitude.
pub const CENT_PLACES: u32 = 2;

// 1.2: monetary amount in the game's single currency. signed: balances go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn round_cents(&self) -> Self {
        Self(self.0.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Within a cent of zero.
    pub fn is_settled(&self) -> bool {
        self.abs() <= SETTLE_TOLERANCE
    }

    // saturates at Decimal's range instead of panicking on absurd input
    pub fn add(&self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn sub(&self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn div(&self, divisor: Decimal) -> Self {
        Self(self.0 / divisor)
    }

    /// Two decimals behind a currency symbol, sign in front: `-£5.00`.
    pub fn format_with(&self, symbol: &str) -> String {
        let rounded = self.round_cents().0;
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{symbol}{:.2}", rounded.abs())
        } else {
            format!("{symbol}{:.2}", rounded.abs())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_cents().0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc.add(m))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc.add(*m))
    }
}
