use anyhow::Result;
use chat_gateway_bot::domain::user::UserRecord;
use chat_gateway_bot::infrastructure::db::DbPool;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct TestFixtures {
    pool: Arc<DbPool>,
}

impl TestFixtures {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert or overwrite a user row with explicit usage state
    pub async fn create_user(
        &self,
        user_id: i64,
        usage_date: NaiveDate,
        usage_count: i64,
        subscribed: bool,
    ) -> Result<UserRecord> {
        let user = UserRecord {
            user_id,
            display_name: format!("user_{}", user_id),
            usage_date,
            usage_count,
            subscribed,
            plan: subscribed.then(|| "monthly".to_string()),
        };

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO users (user_id, display_name, usage_date, usage_count, subscribed, plan)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(user.user_id)
        .bind(&user.display_name)
        .bind(user.usage_date)
        .bind(user.usage_count)
        .bind(user.subscribed)
        .bind(&user.plan)
        .execute(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, display_name, usage_date, usage_count, subscribed, plan
            FROM users
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    pub async fn all_users(&self) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, display_name, usage_date, usage_count, subscribed, plan
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }
}

pub fn today() -> NaiveDate {
    chat_gateway_bot::domain::shared::calendar::today()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().expect("date before today exists")
}
