// Application layer - use cases and the repository seam
pub mod meter_repository;
pub mod meter_service;
pub mod readings_service;
pub mod usage_service;
