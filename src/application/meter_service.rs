// Meter service - use case for listing meters
use crate::application::meter_repository::MeterRepository;
use crate::domain::meter::Meter;
use crate::error::DashboardError;
use std::sync::Arc;

#[derive(Clone)]
pub struct MeterService {
    repository: Arc<dyn MeterRepository>,
}

impl MeterService {
    pub fn new(repository: Arc<dyn MeterRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_meters(&self) -> Result<Vec<Meter>, DashboardError> {
        self.repository.list_meters().await
    }
}
