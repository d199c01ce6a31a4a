use crate::{error::AppResult, infrastructure::repositories::UserRepository};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum ResetOutcome {
    /// Counters of `rows` unsubscribed users were zeroed
    Completed { rows: u64 },
    /// Another run was still in progress
    Skipped,
}

/// Zeroes free-tier counters once per day.
///
/// Correctness never depends on this job: usage is always read against
/// today's date. The job keeps stored counters tidy.
pub struct DailyResetJob {
    user_repo: Arc<UserRepository>,
    running: Mutex<()>,
}

impl DailyResetJob {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self {
            user_repo,
            running: Mutex::new(()),
        }
    }

    pub async fn run(&self, today: NaiveDate) -> AppResult<ResetOutcome> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!(%today, "Daily reset already running, skipping");
            return Ok(ResetOutcome::Skipped);
        };

        let rows = self.user_repo.reset_all_unsubscribed_daily(today).await?;
        tracing::info!(%today, rows, "Daily usage reset for unsubscribed users");

        Ok(ResetOutcome::Completed { rows })
    }
}
