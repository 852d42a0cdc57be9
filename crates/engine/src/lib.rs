//! Core of the unpaid-balance reminder worker: domain types, the clock and
//! collaborator seams, and the notify-unpaid use case.

pub use clock::{Clock, ManualClock, SystemClock};
pub use currency::Currency;
pub use error::{EngineError, NotifyError, StoreError};
pub use money::Money;
pub use notify_unpaid::NotifyUnpaid;
pub use ports::{Notifier, UserRepository};
pub use users::User;

mod clock;
mod currency;
mod error;
mod money;
mod notify_unpaid;
mod ports;
mod users;
