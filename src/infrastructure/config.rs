// Configuration loading
use crate::error::DashboardError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Presentation tuning for the shaping layer. Every field has a default so
/// the config file is optional.
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: usize,
    #[serde(default = "default_page_window_radius")]
    pub page_window_radius: usize,
    #[serde(default = "default_compact_page_threshold")]
    pub compact_page_threshold: usize,
    #[serde(default = "default_reference_margin")]
    pub reference_margin: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_items_per_page: default_items_per_page(),
            page_window_radius: default_page_window_radius(),
            compact_page_threshold: default_compact_page_threshold(),
            reference_margin: default_reference_margin(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_items_per_page() -> usize {
    10
}

fn default_page_window_radius() -> usize {
    2
}

fn default_compact_page_threshold() -> usize {
    7
}

fn default_reference_margin() -> f64 {
    15.0
}

pub fn load_backend_config() -> Result<BackendConfig, DashboardError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_settings() -> Result<DashboardSettings, DashboardError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_settings_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.default_items_per_page, 10);
        assert_eq!(settings.page_window_radius, 2);
        assert_eq!(settings.compact_page_threshold, 7);
        assert_eq!(settings.reference_margin, 15.0);
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"default_items_per_page": 25}"#).unwrap();
        assert_eq!(settings.default_items_per_page, 25);
        assert_eq!(settings.page_window_radius, 2);
    }
}
