//! User-facing copy. Everything configurable comes from `BotSettings`.

use super::settings::BotSettings;
use crate::domain::user::ChatUser;

pub const HELP_TEXT: &str = "Commands:\n\
/start - start\n\
/help - help\n\
/subscribe - show subscription plans\n\n\
⚠️ Notice ⚠️: this bot provides educational content only. It does not support illegal activity.";

pub const PROCESSING_ERROR_TEXT: &str = "Something went wrong while processing. Try again later.";

pub const EMPTY_REPLY_TEXT: &str = "No response from the service.";

pub const CHOOSE_PLAN_TEXT: &str = "Choose a subscription plan:";

pub const CHOOSE_PLAN_FROM_MENU_TEXT: &str = "Pick the plan that suits you:";

pub const CANCELLED_TEXT: &str = "Cancelled ✅";

pub const CANCEL_LABEL: &str = "Cancel ❌";

pub const SUBSCRIBE_LABEL: &str = "💳 Subscribe";

pub const INFO_LABEL: &str = "ℹ️ Info";

pub fn welcome_text(settings: &BotSettings) -> String {
    format!(
        "Welcome 😈\n\n\
         Tell me what you need help with and I will do my best 🎭.\n\n\
         Your free daily limit: {} messages.\n\
         Developer: {} — contact for payment or questions: {}\n\
         Bot: {}",
        settings.free_daily_limit,
        settings.developer_name,
        settings.operator_contact,
        settings.bot_name
    )
}

pub fn quota_exceeded_text(settings: &BotSettings) -> String {
    format!(
        "Your free quota for today is used up ({} messages).\n\
         Press '{}' to get more access.",
        settings.free_daily_limit, SUBSCRIBE_LABEL
    )
}

pub fn request_sent_text(settings: &BotSettings, plan_title: &str) -> String {
    format!(
        "Your subscription request was sent to the bot owner {}.\n\
         Agree on a payment method with the owner and your subscription will be activated manually.\n\n\
         Selected plan: {}",
        settings.operator_contact, plan_title
    )
}

pub fn operator_notification(user: &ChatUser, plan_title: &str) -> String {
    format!(
        "📩 New subscription request\n\n\
         User: {} (@{})\n\
         ID: {}\n\
         Plan: {}\n\n\
         Please contact the user to complete payment and activate the subscription.",
        user.full_name,
        user.handle(),
        user.id,
        plan_title
    )
}

pub fn activation_confirmed_text(user_id: i64, plan_title: &str) -> String {
    format!("Subscription activated for {} ({}).", user_id, plan_title)
}

pub fn subscription_activated_text(plan_title: &str) -> String {
    format!("🎉 Your subscription is active: {}. Enjoy unlimited messages.", plan_title)
}

pub const ACTIVATE_USAGE_TEXT: &str = "Usage: /activate <user_id> <plan_id>";

pub const UNAUTHORIZED_TEXT: &str = "This command is reserved for the bot owner.";
