// Readings service - use case for the windowed, paginated readings table
use crate::application::meter_repository::MeterRepository;
use crate::domain::pagination::{paginate, visible_page_numbers, PageControl, PageDescriptor};
use crate::domain::period::{filter_by_period, Period};
use crate::domain::reading::MeterReading;
use crate::error::DashboardError;
use crate::infrastructure::config::DashboardSettings;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Everything a readings table needs for one render.
#[derive(Debug, Clone)]
pub struct ReadingsPage {
    pub meter_id: i64,
    pub period: Period,
    pub descriptor: PageDescriptor,
    pub items: Vec<MeterReading>,
    pub controls: Vec<PageControl>,
}

#[derive(Clone)]
pub struct ReadingsService {
    repository: Arc<dyn MeterRepository>,
    settings: DashboardSettings,
}

impl ReadingsService {
    pub fn new(repository: Arc<dyn MeterRepository>, settings: DashboardSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Build one page of the readings table.
    ///
    /// The full reading set is windowed first, then sliced; the page number is
    /// clamped against the windowed count, so switching to a sparser period
    /// with a stale page number still yields the last valid page.
    pub async fn readings_page(
        &self,
        meter_id: i64,
        period: Period,
        requested_page: usize,
        items_per_page: Option<usize>,
        now: NaiveDateTime,
    ) -> Result<ReadingsPage, DashboardError> {
        let readings = self.repository.fetch_readings(meter_id).await?;
        let windowed = filter_by_period(&readings, period, now);

        let items_per_page = items_per_page.unwrap_or(self.settings.default_items_per_page);
        let descriptor = PageDescriptor::new(requested_page, items_per_page, windowed.len());
        let items = paginate(&windowed, descriptor.current_page, descriptor.items_per_page).to_vec();
        let controls = visible_page_numbers(
            descriptor.current_page,
            descriptor.total_pages,
            self.settings.page_window_radius,
            self.settings.compact_page_threshold,
        );

        Ok(ReadingsPage {
            meter_id,
            period,
            descriptor,
            items,
            controls,
        })
    }
}
