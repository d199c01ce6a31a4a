pub mod chat;
pub mod maintenance;
pub mod quota;
pub mod shared;
pub mod subscription;
pub mod user;
