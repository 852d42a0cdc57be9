//! Roster entry evaluated by the reminder worker.

use crate::Currency;

/// One person from the roster, read fresh on every run.
///
/// `ledger_id` points at the Notion database tracking the person's own
/// expenses; when it equals the configured shared-ledger reference the
/// person has no personal ledger and their balance is aggregated from the
/// shared one by `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Chat the reminder is delivered to; opaque at this level.
    pub telegram_id: String,
    /// Display name; lookup key for shared-ledger queries.
    pub name: String,
    /// Personal ledger reference, or the shared-ledger sentinel.
    pub ledger_id: String,
    pub currency: Currency,
}
