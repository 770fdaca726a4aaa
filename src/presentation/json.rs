// Mappers from domain models to the JSON wire shapes
use crate::application::readings_service::ReadingsPage;
use crate::application::usage_service::{UsageChart, UsagePoint};
use crate::domain::aggregate::{AggregateSummary, ReferenceBand};
use crate::domain::meter::Meter;
use crate::domain::pagination::{PageControl, PageDescriptor};
use crate::domain::reading::MeterReading;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterJson {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingJson {
    pub id: i64,
    pub timestamp: Option<String>,
    pub date: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptorJson {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Navigation strip entry: a page number or the literal `"..."`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PageControlJson {
    Page(usize),
    Ellipsis(&'static str),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingsPageJson {
    pub meter_id: i64,
    pub period: String,
    pub pagination: PageDescriptorJson,
    pub items: Vec<ReadingJson>,
    pub controls: Vec<PageControlJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePointJson {
    pub label: String,
    pub volume: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryJson {
    pub count: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceBandJson {
    pub average: f64,
    pub upper_margin: f64,
    pub lower_margin: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageChartJson {
    pub meter_id: i64,
    pub title: String,
    pub period: String,
    pub points: Vec<UsagePointJson>,
    pub summary: SummaryJson,
    pub band: Option<ReferenceBandJson>,
}

pub fn meter_to_json(meter: Meter) -> MeterJson {
    MeterJson {
        id: meter.id,
        code: meter.code,
        name: meter.name,
        latitude: meter.latitude,
        longitude: meter.longitude,
    }
}

fn reading_to_json(reading: MeterReading) -> ReadingJson {
    ReadingJson {
        id: reading.id,
        timestamp: reading.timestamp,
        date: reading.date,
        value: reading.value,
    }
}

fn descriptor_to_json(descriptor: PageDescriptor) -> PageDescriptorJson {
    PageDescriptorJson {
        current_page: descriptor.current_page,
        items_per_page: descriptor.items_per_page,
        total_items: descriptor.total_items,
        total_pages: descriptor.total_pages,
    }
}

fn control_to_json(control: PageControl) -> PageControlJson {
    match control {
        PageControl::Page(page) => PageControlJson::Page(page),
        PageControl::Ellipsis => PageControlJson::Ellipsis("..."),
    }
}

pub fn readings_page_to_json(page: ReadingsPage) -> ReadingsPageJson {
    ReadingsPageJson {
        meter_id: page.meter_id,
        period: page.period.to_string(),
        pagination: descriptor_to_json(page.descriptor),
        items: page.items.into_iter().map(reading_to_json).collect(),
        controls: page.controls.into_iter().map(control_to_json).collect(),
    }
}

fn point_to_json(point: UsagePoint) -> UsagePointJson {
    UsagePointJson {
        label: point.label,
        volume: point.volume,
    }
}

fn summary_to_json(summary: AggregateSummary) -> SummaryJson {
    SummaryJson {
        count: summary.count,
        average: summary.average,
    }
}

fn band_to_json(band: ReferenceBand) -> ReferenceBandJson {
    ReferenceBandJson {
        average: band.average,
        upper_margin: band.upper_margin,
        lower_margin: band.lower_margin,
    }
}

pub fn usage_chart_to_json(chart: UsageChart) -> UsageChartJson {
    UsageChartJson {
        meter_id: chart.meter_id,
        title: chart.title,
        period: chart.period.to_string(),
        points: chart.points.into_iter().map(point_to_json).collect(),
        summary: summary_to_json(chart.summary),
        band: chart.band.map(band_to_json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::visible_page_numbers;

    #[test]
    fn test_controls_serialize_as_numbers_and_ellipsis() {
        let controls: Vec<PageControlJson> = visible_page_numbers(5, 10, 2, 7)
            .into_iter()
            .map(control_to_json)
            .collect();
        let json = serde_json::to_value(&controls).unwrap();
        assert_eq!(json, serde_json::json!([1, "...", 3, 4, 5, 6, 7, "...", 10]));
    }
}
