pub mod daily_reset;

pub use daily_reset::{DailyResetJob, ResetOutcome};
