// REST backend repository implementation
use crate::application::meter_repository::MeterRepository;
use crate::domain::meter::Meter;
use crate::domain::reading::{DailyUsage, MeterReading};
use crate::error::DashboardError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BackendRepository {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

// The backend serializes with PascalCase keys and omits fields freely, so
// every non-key field is optional with a default.
#[derive(Debug, Deserialize)]
struct MeterDto {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Latitude", default)]
    latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ReadingDto {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<String>,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Value", default)]
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DailyUsageDto {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<String>,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Volume", default)]
    volume: Option<f64>,
}

impl BackendRepository {
    pub fn new(base_url: String, token: String, timeout_secs: u64) -> Result<Self, DashboardError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MeterRepository for BackendRepository {
    async fn list_meters(&self) -> Result<Vec<Meter>, DashboardError> {
        let dtos: Vec<MeterDto> = self.fetch_json("/api/meters").await?;
        Ok(dtos
            .into_iter()
            .map(|dto| {
                Meter::new(
                    dto.id,
                    dto.name.unwrap_or_default(),
                    dto.latitude,
                    dto.longitude,
                )
            })
            .collect())
    }

    async fn fetch_readings(&self, meter_id: i64) -> Result<Vec<MeterReading>, DashboardError> {
        let path = format!("/api/meters/{meter_id}/readings");
        let dtos: Vec<ReadingDto> = self.fetch_json(&path).await?;
        tracing::debug!("Got {} readings for meter {}", dtos.len(), meter_id);
        Ok(dtos
            .into_iter()
            .map(|dto| MeterReading::new(dto.id, dto.timestamp, dto.date, dto.value))
            .collect())
    }

    async fn fetch_daily_usage(&self, meter_id: i64) -> Result<Vec<DailyUsage>, DashboardError> {
        let path = format!("/api/meters/{meter_id}/usage/daily");
        let dtos: Vec<DailyUsageDto> = self.fetch_json(&path).await?;
        tracing::debug!("Got {} usage rows for meter {}", dtos.len(), meter_id);
        Ok(dtos
            .into_iter()
            .map(|dto| DailyUsage::new(dto.id, dto.timestamp, dto.date, dto.volume))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_dto_tolerates_missing_fields() {
        let dto: ReadingDto = serde_json::from_str(r#"{"ID": 7}"#).unwrap();
        assert_eq!(dto.id, 7);
        assert_eq!(dto.timestamp, None);
        assert_eq!(dto.date, None);
        assert_eq!(dto.value, None);
    }

    #[test]
    fn test_reading_dto_full_row() {
        let dto: ReadingDto = serde_json::from_str(
            r#"{"ID": 7, "Timestamp": "2024-01-16T08:30:00Z", "Date": "2024-01-16", "Value": 45.5}"#,
        )
        .unwrap();
        assert_eq!(dto.timestamp.as_deref(), Some("2024-01-16T08:30:00Z"));
        assert_eq!(dto.value, Some(45.5));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let repository =
            BackendRepository::new("http://backend:9000/".to_string(), "t".to_string(), 5).unwrap();
        assert_eq!(repository.base_url, "http://backend:9000");
    }
}
