// Meter reading and daily usage record models
use crate::domain::period::Timestamped;

/// A single OCR-derived meter reading as received from the backend.
///
/// Fields arrive partially populated; the shaping layer tolerates any of the
/// optional ones being absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterReading {
    pub id: i64,
    pub timestamp: Option<String>,
    pub date: Option<String>,
    pub value: Option<f64>,
}

impl MeterReading {
    pub fn new(
        id: i64,
        timestamp: Option<String>,
        date: Option<String>,
        value: Option<f64>,
    ) -> Self {
        Self {
            id,
            timestamp,
            date,
            value,
        }
    }
}

impl Timestamped for MeterReading {
    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// One day of consumed volume for a meter.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyUsage {
    pub id: i64,
    pub timestamp: Option<String>,
    pub date: Option<String>,
    pub volume: Option<f64>,
}

impl DailyUsage {
    pub fn new(
        id: i64,
        timestamp: Option<String>,
        date: Option<String>,
        volume: Option<f64>,
    ) -> Self {
        Self {
            id,
            timestamp,
            date,
            volume,
        }
    }
}

impl Timestamped for DailyUsage {
    fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
