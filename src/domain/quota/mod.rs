pub mod service;

pub use service::{QuotaService, QuotaStatus};
