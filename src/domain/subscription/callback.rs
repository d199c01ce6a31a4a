pub const OPEN_SUBSCRIBE: &str = "open_subscribe";
pub const HELP_BUTTON: &str = "help_btn";
pub const PLAN_PREFIX: &str = "plan:";
pub const CANCEL_PLAN: &str = "cancel";

/// Decoded callback token from an inline button
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackAction {
    OpenSubscribe,
    ShowHelp,
    Cancel,
    SelectPlan(String),
    Unknown(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        match data {
            OPEN_SUBSCRIBE => CallbackAction::OpenSubscribe,
            HELP_BUTTON => CallbackAction::ShowHelp,
            _ => match data.strip_prefix(PLAN_PREFIX) {
                Some(CANCEL_PLAN) => CallbackAction::Cancel,
                Some(plan_id) => CallbackAction::SelectPlan(plan_id.to_string()),
                None => CallbackAction::Unknown(data.to_string()),
            },
        }
    }
}

pub fn plan_token(plan_id: &str) -> String {
    format!("{}{}", PLAN_PREFIX, plan_id)
}
