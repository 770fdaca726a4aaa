// Error types shared across the service layers
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
