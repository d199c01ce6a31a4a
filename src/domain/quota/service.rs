use crate::{
    domain::shared::{calendar, BotSettings},
    error::AppResult,
    infrastructure::repositories::UserRepository,
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Snapshot of a user's standing against the free tier
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaStatus {
    pub subscribed: bool,
    pub used_today: i64,
    pub limit: i64,
}

impl QuotaStatus {
    pub fn allows_another(&self) -> bool {
        self.subscribed || self.used_today < self.limit
    }
}

pub struct QuotaService {
    user_repo: Arc<UserRepository>,
    free_daily_limit: i64,
}

impl QuotaService {
    pub fn new(user_repo: Arc<UserRepository>, settings: Arc<BotSettings>) -> Self {
        Self {
            user_repo,
            free_daily_limit: settings.free_daily_limit,
        }
    }

    pub fn free_daily_limit(&self) -> i64 {
        self.free_daily_limit
    }

    /// Whether the user may consume one more unit today. Performs no writes.
    pub async fn allow(&self, user_id: i64) -> AppResult<bool> {
        Ok(self.status(user_id).await?.allows_another())
    }

    pub async fn status(&self, user_id: i64) -> AppResult<QuotaStatus> {
        self.status_on(user_id, calendar::today()).await
    }

    pub async fn status_on(&self, user_id: i64, today: NaiveDate) -> AppResult<QuotaStatus> {
        let user = self.user_repo.find_by_id(user_id).await?;

        let (subscribed, used_today) = match user {
            Some(user) => (user.subscribed, user.effective_usage_on(today)),
            None => (false, 0),
        };

        Ok(QuotaStatus {
            subscribed,
            used_today,
            limit: self.free_daily_limit,
        })
    }
}
