use crate::domain::maintenance::DailyResetJob;
use crate::domain::shared::calendar;
use chrono::{DateTime, Days, Local, NaiveTime, TimeZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// First instant strictly after `now` whose wall-clock time is `at`.
///
/// Days where `at` does not exist (DST gap) are skipped.
pub fn next_run_after<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();

    for offset in 0..3 {
        let Some(date) = today.checked_add_days(Days::new(offset)) else {
            break;
        };
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(at)).earliest() {
            if candidate > *now {
                return candidate;
            }
        }
    }

    now.clone() + chrono::Duration::hours(24)
}

/// Run the daily reset at `at` local time, forever.
///
/// A failed run is logged and retried at the next scheduled tick.
pub fn spawn_daily_reset(job: Arc<DailyResetJob>, at: NaiveTime) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Local::now();
            let next = next_run_after(&now, at);
            let delay = (next.clone() - now).to_std().unwrap_or(Duration::from_secs(1));

            tracing::info!(next_run = %next, "Next daily reset scheduled");
            tokio::time::sleep(delay).await;

            if let Err(e) = job.run(calendar::today()).await {
                tracing::error!(error = %e, "Daily reset failed, will retry at next tick");
            }
        }
    })
}
