pub mod generation_repository;
pub mod http_generation_repository;
pub mod offline_generation_repository;
pub mod user_repository;

pub use generation_repository::GenerationRepository;
pub use http_generation_repository::HttpGenerationRepository;
pub use offline_generation_repository::OfflineGenerationRepository;
pub use user_repository::UserRepository;
