use chat_gateway_bot::controllers::{
    callbacks::CallbackController, commands::CommandController, messages::MessageController,
};
use chat_gateway_bot::domain::{
    chat::ChatService, maintenance::DailyResetJob, quota::QuotaService, shared::BotSettings,
    shared::ChatTransport, subscription::SubscriptionService,
};
use chat_gateway_bot::infrastructure::config::{Config, LogFormat};
use chat_gateway_bot::infrastructure::db::{check_connection, create_pool, init_schema};
use chat_gateway_bot::infrastructure::repositories::{
    GenerationRepository, HttpGenerationRepository, OfflineGenerationRepository, UserRepository,
};
use chat_gateway_bot::infrastructure::scheduler::spawn_daily_reset;
use chat_gateway_bot::infrastructure::telegram::{start_bot, TelegramTransport};
use std::sync::Arc;
use teloxide::Bot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing bot token stops the process here
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        database_url = %config.database_url,
        free_daily_limit = config.free_daily_limit,
        "Starting chat gateway bot"
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    check_connection(&pool).await?;
    init_schema(&pool).await?;
    tracing::info!("Database ready");

    let pool = Arc::new(pool);
    let settings = Arc::new(BotSettings::from_config(&config));
    let bot = Bot::new(config.telegram_bot_token.clone());

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories and providers
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    tracing::info!(users = user_repo.count_users().await?, "Users loaded");

    let generation_repo: Arc<dyn GenerationRepository> = match config.service_credentials() {
        Some((endpoint, api_key)) => {
            tracing::info!(endpoint, "Generation service configured, running online");
            Arc::new(HttpGenerationRepository::new(
                endpoint.to_string(),
                api_key.to_string(),
                settings.service_timeout,
            )?)
        }
        None => {
            tracing::warn!("Generation service not configured, using offline replies");
            Arc::new(OfflineGenerationRepository::new(
                settings.developer_name.clone(),
                settings.operator_contact.clone(),
            ))
        }
    };

    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramTransport::new(bot.clone()));

    // 2. Services
    let quota_service = Arc::new(QuotaService::new(user_repo.clone(), settings.clone()));
    let chat_service = Arc::new(ChatService::new(
        user_repo.clone(),
        quota_service,
        generation_repo,
        transport.clone(),
        settings.clone(),
    ));
    let subscription_service = Arc::new(SubscriptionService::new(
        user_repo.clone(),
        transport.clone(),
        settings.clone(),
    ));

    // 3. Controllers
    let command_controller = Arc::new(CommandController::new(
        user_repo.clone(),
        subscription_service.clone(),
        transport,
        settings,
    ));
    let callback_controller = Arc::new(CallbackController::new(subscription_service));
    let message_controller = Arc::new(MessageController::new(chat_service));

    // 4. Background jobs
    let reset_job = Arc::new(DailyResetJob::new(user_repo));
    spawn_daily_reset(reset_job, config.daily_reset_time);

    tracing::info!("Bot running, starting long polling");
    start_bot(bot, command_controller, callback_controller, message_controller).await;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "chat_gateway_bot=debug,teloxide=info"
    } else {
        "chat_gateway_bot=info,teloxide=warn"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
