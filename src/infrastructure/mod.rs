// Infrastructure layer - external dependencies and adapters
pub mod backend_repository;
pub mod config;
