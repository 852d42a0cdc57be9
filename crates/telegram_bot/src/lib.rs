//! Telegram gateway.
//!
//! Delivers unpaid-balance reminders as direct messages. Every reminder is
//! mirrored to a log channel first; in debug mode only the mirror is sent.

use async_trait::async_trait;
use engine::{NotifyError, User};
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// [`engine::Notifier`] backed by a Telegram bot.
pub struct Notifier {
    bot: Bot,
    log_chat: ChatId,
    debug: bool,
}

impl Notifier {
    #[must_use]
    pub fn new(token: &str, log_chat_id: i64, debug: bool) -> Self {
        Self {
            bot: Bot::new(token),
            log_chat: ChatId(log_chat_id),
            debug,
        }
    }
}

#[async_trait]
impl engine::Notifier for Notifier {
    async fn notify(&self, user: &User) -> Result<(), NotifyError> {
        let chat_id: i64 = user
            .telegram_id
            .parse()
            .map_err(|_| NotifyError(format!("invalid telegram id: {}", user.telegram_id)))?;

        let message = reminder_message(user);

        self.bot
            .send_message(self.log_chat, message.clone())
            .await
            .map_err(|err| NotifyError(format!("send to log channel failed: {err}")))?;

        if self.debug {
            tracing::debug!("debug mode on, direct message skipped");
            return Ok(());
        }

        self.bot
            .send_message(ChatId(chat_id), message)
            .await
            .map_err(|err| NotifyError(format!("send direct message failed: {err}")))?;

        Ok(())
    }
}

/// Reminder text linking the person's ledger page.
fn reminder_message(user: &User) -> String {
    format!(
        "[Sollecito] Hai ancora spese non pagate: https://www.notion.so/{} (se manca qualcosa scrivici)",
        user.ledger_id
    )
}

#[cfg(test)]
mod tests {
    use engine::{Currency, Notifier as _};

    use super::*;

    fn alice() -> User {
        User {
            telegram_id: "111".to_string(),
            name: "Alice".to_string(),
            ledger_id: "a1b2c3".to_string(),
            currency: Currency::Twd,
        }
    }

    #[test]
    fn reminder_links_the_ledger_page() {
        let message = reminder_message(&alice());
        assert!(message.contains("https://www.notion.so/a1b2c3"));
        assert!(message.starts_with("[Sollecito]"));
    }

    #[tokio::test]
    async fn unparsable_telegram_id_is_a_delivery_error() {
        let notifier = Notifier::new("token", 42, true);
        let mut user = alice();
        user.telegram_id = "not-a-chat-id".to_string();

        let err = notifier.notify(&user).await.unwrap_err();

        assert!(err.to_string().contains("invalid telegram id"));
    }
}
