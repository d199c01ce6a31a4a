pub mod config;
pub mod db;
pub mod repositories;
pub mod scheduler;
pub mod telegram;
