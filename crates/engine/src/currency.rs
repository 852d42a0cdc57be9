use crate::{Money, StoreError};

const TWD_NOTIFICATION_THRESHOLD: Money = Money::from_minor(2_000_00);
const JPY_NOTIFICATION_THRESHOLD: Money = Money::from_minor(8_000);

/// Currency of a ledger the worker evaluates.
///
/// The set is closed: exactly the currencies the notification threshold
/// table knows. Any other code is invalid input and is rejected while a
/// record is decoded, so an unknown currency can never reach a balance
/// comparison.
///
/// ## Minor units
///
/// Amounts are stored as an `i64` number of **minor units** (see
/// [`Money`]). `minor_units()` returns how many decimal digits are used
/// when converting between major units (the numbers in the ledgers, e.g.
/// `2000.01 TWD`) and the stored integers (e.g. `200001`). JPY has no
/// minor unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Currency {
    Twd,
    Jpy,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Twd => "TWD",
            Currency::Jpy => "JPY",
        }
    }

    /// Number of fraction digits used when converting amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Twd => 2,
            Currency::Jpy => 0,
        }
    }

    /// Minimum balance that, when strictly exceeded on a personal ledger,
    /// triggers a reminder.
    ///
    /// Shared-ledger balances are not thresholded: any outstanding amount
    /// triggers one.
    #[must_use]
    pub const fn notification_threshold(self) -> Money {
        match self {
            Currency::Twd => TWD_NOTIFICATION_THRESHOLD,
            Currency::Jpy => JPY_NOTIFICATION_THRESHOLD,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TWD" => Ok(Currency::Twd),
            "JPY" => Ok(Currency::Jpy),
            other => Err(StoreError::UnsupportedCurrency(other.to_string())),
        }
    }
}
