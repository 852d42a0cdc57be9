//! Handles settings for the application. Configuration is written in
//! `settings.toml`.
//!
//! See `settings.example.toml` for the expected layout.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Notion {
    pub token: String,
    pub users_db: String,
    pub shared_ledger_db: String,
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
    pub log_chat_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct Worker {
    /// Seconds-first cron expression driving the job.
    pub crontab: String,
    /// IANA zone used by both the schedule and the day gate.
    pub timezone: String,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub notion: Notion,
    pub telegram: Telegram,
    pub worker: Worker,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;

        settings.try_deserialize()
    }
}
