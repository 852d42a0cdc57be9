use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use engine::{ManualClock, NotifyUnpaid};

mod settings;

// Debug runs fire every minute so the pinned-clock pass is easy to watch.
const DEBUG_CRONTAB: &str = "0 * * * * *";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sollecito={level},engine={level},notion={level},telegram_bot={level}",
            level = settings.app.level
        ))
        .init();

    let timezone = Tz::from_str(&settings.worker.timezone)
        .map_err(|err| format!("invalid timezone {}: {err}", settings.worker.timezone))?;

    let repository = notion::Repository::new(
        &settings.notion.token,
        &settings.notion.users_db,
        &settings.notion.shared_ledger_db,
    )?;
    let notifier = telegram_bot::Notifier::new(
        &settings.telegram.token,
        settings.telegram.log_chat_id,
        settings.worker.debug,
    );

    let mut use_case = NotifyUnpaid::new(
        repository,
        notifier,
        settings.notion.shared_ledger_db.as_str(),
        timezone,
    );

    let mut crontab = settings.worker.crontab.clone();

    // In debug mode, pin the clock to a gate day and tick every minute.
    if settings.worker.debug {
        let today = Utc::now().with_timezone(&timezone);
        let first = timezone
            .with_ymd_and_hms(today.year(), today.month(), 1, 9, 0, 0)
            .single()
            .ok_or("can not pin debug clock")?;
        use_case = use_case.with_clock(Arc::new(ManualClock::new(first.with_timezone(&Utc))));
        crontab = DEBUG_CRONTAB.to_string();
    }

    let schedule =
        Schedule::from_str(&crontab).map_err(|err| format!("invalid crontab {crontab}: {err}"))?;

    let mut tasks = tokio::task::JoinSet::new();

    tasks.spawn(async move {
        tracing::info!("Starting reminder worker...");
        worker_loop(schedule, timezone, use_case).await;
    });

    while tasks.join_next().await.is_some() {
        tasks.shutdown().await;
    }

    Ok(())
}

async fn worker_loop(
    schedule: Schedule,
    timezone: Tz,
    use_case: NotifyUnpaid<notion::Repository, telegram_bot::Notifier>,
) {
    for next in schedule.upcoming(timezone) {
        let wait = (next.with_timezone(&Utc) - Utc::now())
            .to_std()
            .unwrap_or_default();
        tokio::time::sleep(wait).await;

        tracing::info!("run job");

        if let Err(err) = use_case.execute().await {
            tracing::error!("worker: {err}");
        }
    }
}
