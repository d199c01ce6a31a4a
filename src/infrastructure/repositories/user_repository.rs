use crate::domain::shared::calendar;
use crate::domain::user::UserRecord;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Register a user on first contact.
    ///
    /// Usage and subscription columns of an existing row are never touched;
    /// only a non-empty display name is refreshed.
    pub async fn ensure_user(&self, user_id: i64, display_name: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let today = calendar::today();

        sqlx::query(
            r#"
            INSERT INTO users (user_id, display_name, usage_date, usage_count, subscribed)
            VALUES (?1, ?2, ?3, 0, 0)
            ON CONFLICT (user_id) DO UPDATE SET
                display_name = excluded.display_name
            WHERE excluded.display_name <> '' AND excluded.display_name <> users.display_name
            "#,
        )
        .bind(user_id)
        .bind(display_name)
        .bind(today)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: i64) -> AppResult<Option<UserRecord>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, display_name, usage_date, usage_count, subscribed, plan
            FROM users
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Consume one quota unit for today and return the new count.
    ///
    /// A row whose `usage_date` is not today restarts at 1. The whole
    /// read-modify-write is one statement, so concurrent calls for the same
    /// user cannot lose an increment.
    pub async fn record_usage(&self, user_id: i64) -> AppResult<i64> {
        self.record_usage_on(user_id, calendar::today()).await
    }

    pub async fn record_usage_on(&self, user_id: i64, today: NaiveDate) -> AppResult<i64> {
        let pool = self.pool.as_ref();

        let usage_count: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (user_id, display_name, usage_date, usage_count, subscribed)
            VALUES (?1, '', ?2, 1, 0)
            ON CONFLICT (user_id) DO UPDATE SET
                usage_count = CASE
                    WHEN users.usage_date = excluded.usage_date THEN users.usage_count + 1
                    ELSE 1
                END,
                usage_date = excluded.usage_date
            RETURNING usage_count
            "#,
        )
        .bind(user_id)
        .bind(today)
        .fetch_one(pool)
        .await?;

        Ok(usage_count)
    }

    /// Usage that applies today, without mutating anything
    pub async fn effective_usage_today(&self, user_id: i64) -> AppResult<i64> {
        let today = calendar::today();
        let usage = self
            .find_by_id(user_id)
            .await?
            .map(|user| user.effective_usage_on(today))
            .unwrap_or(0);

        Ok(usage)
    }

    /// Mark a user as subscribed to `plan_id`, creating the row if needed
    pub async fn set_subscription(&self, user_id: i64, plan_id: &str) -> AppResult<UserRecord> {
        let pool = self.pool.as_ref();
        let today = calendar::today();

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (user_id, display_name, usage_date, usage_count, subscribed, plan)
            VALUES (?1, '', ?2, 0, 1, ?3)
            ON CONFLICT (user_id) DO UPDATE SET
                subscribed = 1,
                plan = excluded.plan
            RETURNING user_id, display_name, usage_date, usage_count, subscribed, plan
            "#,
        )
        .bind(user_id)
        .bind(today)
        .bind(plan_id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Zero the counters of every unsubscribed user in one transaction.
    ///
    /// Returns the number of rows touched.
    pub async fn reset_all_unsubscribed_daily(&self, today: NaiveDate) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET usage_count = 0, usage_date = ?1
            WHERE subscribed = 0
            "#,
        )
        .bind(today)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    pub async fn count_users(&self) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
