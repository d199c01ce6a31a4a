use crate::domain::subscription::plan::{default_catalog, Plan};
use crate::domain::user::ChatUser;
use crate::infrastructure::config::Config;
use std::time::Duration;

/// Telegram refuses messages over 4096 characters; leave headroom
pub const MAX_MESSAGE_LEN: usize = 4000;

/// Immutable bot settings, built once at startup and shared by `Arc`
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub free_daily_limit: i64,
    pub operator_contact: String,
    pub developer_name: String,
    pub bot_name: String,
    pub plans: Vec<Plan>,
    pub max_message_len: usize,
    pub service_timeout: Duration,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            free_daily_limit: config.free_daily_limit,
            operator_contact: config.operator_contact.clone(),
            developer_name: config.developer_name.clone(),
            bot_name: config.bot_name.clone(),
            plans: default_catalog(),
            max_message_len: MAX_MESSAGE_LEN,
            service_timeout: Duration::from_secs(config.service_timeout_secs),
        }
    }

    pub fn find_plan(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    /// Catalog title, or the raw id when the plan is unknown
    pub fn plan_title(&self, plan_id: &str) -> String {
        self.find_plan(plan_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| plan_id.to_string())
    }

    /// Attribution appended to every generated reply
    pub fn footer(&self) -> String {
        format!(
            "\n\n— Made by {} | {}",
            self.developer_name, self.operator_contact
        )
    }

    /// Whether `user` is the configured operator (by handle or numeric id)
    pub fn is_operator(&self, user: &ChatUser) -> bool {
        let contact = self.operator_contact.trim();
        if let Ok(id) = contact.parse::<i64>() {
            return user.id == id;
        }
        let handle = contact.trim_start_matches('@');
        user.username
            .as_deref()
            .map(|u| u.eq_ignore_ascii_case(handle))
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> BotSettings {
    BotSettings {
        free_daily_limit: 5,
        operator_contact: "@operator".to_string(),
        developer_name: "Dev".to_string(),
        bot_name: "Gateway".to_string(),
        plans: default_catalog(),
        max_message_len: MAX_MESSAGE_LEN,
        service_timeout: Duration::from_secs(30),
    }
}
