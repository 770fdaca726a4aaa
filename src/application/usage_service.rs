// Usage service - use case for the windowed usage chart
use crate::application::meter_repository::MeterRepository;
use crate::domain::aggregate::{aggregate, AggregateSummary, ReferenceBand};
use crate::domain::period::{filter_by_period, Period, Timestamped};
use crate::error::DashboardError;
use crate::infrastructure::config::DashboardSettings;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// One plotted point on the usage chart.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePoint {
    pub label: String,
    pub volume: f64,
}

/// Everything a usage chart needs for one render: the plotted points plus the
/// summary driving the dashed reference lines.
#[derive(Debug, Clone)]
pub struct UsageChart {
    pub meter_id: i64,
    pub title: String,
    pub period: Period,
    pub points: Vec<UsagePoint>,
    pub summary: AggregateSummary,
    pub band: Option<ReferenceBand>,
}

#[derive(Clone)]
pub struct UsageService {
    repository: Arc<dyn MeterRepository>,
    settings: DashboardSettings,
}

impl UsageService {
    pub fn new(repository: Arc<dyn MeterRepository>, settings: DashboardSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub async fn usage_chart(
        &self,
        meter_id: i64,
        period: Period,
        now: NaiveDateTime,
    ) -> Result<UsageChart, DashboardError> {
        let usage = self.repository.fetch_daily_usage(meter_id).await?;
        let windowed = filter_by_period(&usage, period, now);

        // Rows without a volume stay out of the plot but the same exclusion
        // happens inside aggregate, so the average matches what is drawn.
        let points: Vec<UsagePoint> = windowed
            .iter()
            .filter_map(|row| {
                let volume = row.volume.filter(|v| v.is_finite())?;
                let label = row
                    .date()
                    .or_else(|| row.timestamp())
                    .unwrap_or_default()
                    .to_string();
                Some(UsagePoint { label, volume })
            })
            .collect();

        let summary = aggregate(&windowed, |row| row.volume);
        let band = summary.reference_band(self.settings.reference_margin);

        Ok(UsageChart {
            meter_id,
            title: format!("Meter {meter_id} usage ({period})"),
            period,
            points,
            summary,
            band,
        })
    }
}
