//! The notify-unpaid use case: one gated, sequential pass over the roster.

use std::sync::Arc;

use chrono::Datelike;
use chrono_tz::Tz;

use crate::{Clock, EngineError, Money, Notifier, SystemClock, User, UserRepository};

/// Reconciliation pass over the roster.
///
/// On the 1st and the 15th of the month (in the configured time zone) it
/// fetches every person, sums their unpaid balance, and delivers a
/// reminder to anyone over their currency's threshold. People on the
/// shared ledger are reminded for any outstanding balance at all.
///
/// Holds only long-lived configuration; roster and balances are read
/// fresh on every [`execute`](Self::execute).
pub struct NotifyUnpaid<R, N> {
    repository: R,
    notifier: N,
    shared_ledger: String,
    timezone: Tz,
    clock: Arc<dyn Clock>,
}

impl<R, N> NotifyUnpaid<R, N>
where
    R: UserRepository,
    N: Notifier,
{
    pub fn new(
        repository: R,
        notifier: N,
        shared_ledger: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        Self {
            repository,
            notifier,
            shared_ledger: shared_ledger.into(),
            timezone,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the wall clock, for debug runs and deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Runs one pass.
    ///
    /// Off-days return `Ok(())` without touching the roster. A roster or
    /// balance lookup failure aborts the run; a delivery failure is
    /// logged and the loop continues, so the run still succeeds.
    pub async fn execute(&self) -> Result<(), EngineError> {
        let day = self.clock.now().with_timezone(&self.timezone).day();
        if day != 1 && day != 15 {
            return Ok(());
        }

        let users = self
            .repository
            .users()
            .await
            .map_err(EngineError::GetUsers)?;

        for user in &users {
            if !self.should_notify(user).await? {
                continue;
            }

            if let Err(err) = self.notifier.notify(user).await {
                tracing::warn!("notify {}: {err}", user.name);
            }
        }

        Ok(())
    }

    async fn should_notify(&self, user: &User) -> Result<bool, EngineError> {
        if user.ledger_id != self.shared_ledger {
            let amount = self
                .repository
                .unpaid_amount(&user.ledger_id, user.currency)
                .await
                .map_err(|source| EngineError::GetUnpaidAmount {
                    name: user.name.clone(),
                    source,
                })?;

            return Ok(amount > user.currency.notification_threshold());
        }

        let amount = self
            .repository
            .shared_unpaid_amount(&user.name, user.currency)
            .await
            .map_err(|source| EngineError::GetSharedUnpaidAmount {
                name: user.name.clone(),
                source,
            })?;

        Ok(amount > Money::ZERO)
    }
}
