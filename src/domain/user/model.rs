use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct UserRecord {
    pub user_id: i64,
    pub display_name: String,
    pub usage_date: NaiveDate,
    pub usage_count: i64,
    pub subscribed: bool,
    pub plan: Option<String>,
}

impl UserRecord {
    /// Usage that applies on `today`; a count stored under an older date is stale
    pub fn effective_usage_on(&self, today: NaiveDate) -> i64 {
        if self.usage_date == today {
            self.usage_count.max(0)
        } else {
            0
        }
    }
}

/// Identity of the person behind an inbound update
#[derive(Debug, Clone, PartialEq)]
pub struct ChatUser {
    pub id: i64,
    pub username: Option<String>,
    pub full_name: String,
}

impl ChatUser {
    /// Handle used for display, without the leading `@`
    pub fn handle(&self) -> &str {
        self.username.as_deref().unwrap_or("no_username")
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}
