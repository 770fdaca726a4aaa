// Application state for HTTP handlers
use crate::application::meter_service::MeterService;
use crate::application::readings_service::ReadingsService;
use crate::application::usage_service::UsageService;

#[derive(Clone)]
pub struct AppState {
    pub meter_service: MeterService,
    pub readings_service: ReadingsService,
    pub usage_service: UsageService,
}
