//! Capability seams toward the record store and the notification channel.
//!
//! The engine only ever sees these traits; the gateways live in their own
//! crates and are injected at construction.

use async_trait::async_trait;

use crate::{Currency, Money, NotifyError, StoreError, User};

/// Read-only roster and ledger queries against the record store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the full roster, in a stable order.
    async fn users(&self) -> Result<Vec<User>, StoreError>;

    /// Sum of still-unpaid line items in a personal ledger; zero when
    /// there are none.
    async fn unpaid_amount(
        &self,
        ledger_id: &str,
        currency: Currency,
    ) -> Result<Money, StoreError>;

    /// Sum of still-unpaid line items in the shared ledger bought by
    /// `buyer`; zero when there are none.
    async fn shared_unpaid_amount(
        &self,
        buyer: &str,
        currency: Currency,
    ) -> Result<Money, StoreError>;
}

/// Delivers one reminder.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user: &User) -> Result<(), NotifyError>;
}
