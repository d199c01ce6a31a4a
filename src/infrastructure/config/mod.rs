use crate::error::{AppError, AppResult};
use chrono::NaiveTime;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Generation service
    pub service_endpoint: Option<String>,
    pub service_api_key: Option<String>,
    pub service_timeout_secs: u64,
    // Quota and subscriptions
    pub free_daily_limit: i64,
    pub operator_contact: String,
    pub daily_reset_time: NaiveTime,
    // Attribution
    pub developer_name: String,
    pub bot_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("TELEGRAM_BOT_TOKEN must be set before starting the bot".to_string())
            })?;

        let config = Config {
            telegram_bot_token,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://bot.db".to_string()),
            environment: env::var("ENVIRONMENT")
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })
                .unwrap_or(Environment::Development),
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
            service_endpoint: non_empty_var("SERVICE_ENDPOINT"),
            service_api_key: non_empty_var("SERVICE_API_KEY"),
            service_timeout_secs: parse_var("SERVICE_TIMEOUT_SECS", 30)?,
            free_daily_limit: parse_var("FREE_DAILY_LIMIT", 5)?,
            operator_contact: env::var("OPERATOR_CONTACT")
                .unwrap_or_else(|_| "@gateway_operator".to_string()),
            daily_reset_time: parse_reset_time(
                &env::var("DAILY_RESET_TIME").unwrap_or_else(|_| "00:00".to_string()),
            )?,
            developer_name: env::var("DEVELOPER_NAME")
                .unwrap_or_else(|_| "Gateway Team".to_string()),
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| "Chat Gateway".to_string()),
        };

        if config.free_daily_limit < 0 {
            return Err(AppError::Config(
                "FREE_DAILY_LIMIT must not be negative".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Online mode needs both the endpoint and the key
    pub fn service_credentials(&self) -> Option<(&str, &str)> {
        match (&self.service_endpoint, &self.service_api_key) {
            (Some(endpoint), Some(key)) => Some((endpoint.as_str(), key.as_str())),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn parse_reset_time(raw: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|e| AppError::Config(format!("DAILY_RESET_TIME must be HH:MM: {}", e)))
}
