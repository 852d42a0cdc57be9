use std::{
    fmt::Write as _,
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::Currency;

/// Unpaid amount represented as **integer minor units**.
///
/// Use this type for all monetary values in the engine (ledger sums,
/// thresholds) to avoid floating-point drift. The number of minor units
/// per major unit depends on the currency (see [`Currency::minor_units`]),
/// so values are only comparable within one currency; the engine never
/// converts between currencies.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::from_minor(2_000_01);
/// assert_eq!(amount.minor(), 200_001);
/// assert_eq!(amount.format(Currency::Twd), "2000.01 TWD");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Converts a major-unit number from the wire into minor units,
    /// rounding to the currency's precision.
    ///
    /// The record store reports amounts as plain numbers (`2000.01`); this
    /// is the single place a float enters the engine.
    #[must_use]
    pub fn from_major_f64(value: f64, currency: Currency) -> Self {
        let scale = 10f64.powi(i32::from(currency.minor_units()));
        Self((value * scale).round() as i64)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Formats the amount in major units with the currency code.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = 10u64.pow(u32::from(currency.minor_units()));
        let major = abs / scale;
        let mut out = format!("{sign}{major}");
        if currency.minor_units() > 0 {
            let frac = abs % scale;
            let width = usize::from(currency.minor_units());
            let _ = write!(out, ".{frac:0width$}");
        }
        let _ = write!(out, " {}", currency.code());
        out
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}
