pub mod callback;
pub mod error;
pub mod plan;
pub mod service;

pub use callback::CallbackAction;
pub use error::SubscriptionServiceError;
pub use plan::Plan;
pub use service::{CallbackEvent, SubscriptionService, SubscriptionState};
