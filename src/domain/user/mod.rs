pub mod model;

pub use model::{ChatUser, UserRecord};
