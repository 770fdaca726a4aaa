// Repository trait for upstream meter data access
use crate::domain::meter::Meter;
use crate::domain::reading::{DailyUsage, MeterReading};
use crate::error::DashboardError;
use async_trait::async_trait;

#[async_trait]
pub trait MeterRepository: Send + Sync {
    /// List all meters visible to the facility.
    async fn list_meters(&self) -> Result<Vec<Meter>, DashboardError>;

    /// Fetch every reading currently held for a meter.
    async fn fetch_readings(&self, meter_id: i64) -> Result<Vec<MeterReading>, DashboardError>;

    /// Fetch the per-day usage history for a meter.
    async fn fetch_daily_usage(&self, meter_id: i64) -> Result<Vec<DailyUsage>, DashboardError>;
}
