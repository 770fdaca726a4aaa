// Period windows - named time ranges anchored to an explicit "now"
use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::fmt;

/// Named time window selectable in the dashboard UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// Resolve the window against `now`, using local calendar semantics.
    ///
    /// `now` is an explicit input rather than a clock read so window math is
    /// deterministic under test; production callers pass the real local time.
    /// Every window starts at 00:00:00 of its start day and runs through
    /// 23:59:59 of `now`'s day, both ends inclusive. `week` is a trailing
    /// 7-day window, not an ISO calendar week; `month`/`quarter`/`year` go
    /// back 1/3/12 calendar months with the day-of-month clamped.
    pub fn window(self, now: NaiveDateTime) -> PeriodWindow {
        let day = now.date();
        let start_day = match self {
            Period::Today => day,
            Period::Week => day.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN),
            Period::Month => back_months(day, 1),
            Period::Quarter => back_months(day, 3),
            Period::Year => back_months(day, 12),
        };
        PeriodWindow {
            start: start_day.and_time(NaiveTime::MIN),
            end: day.and_time(NaiveTime::MIN) + chrono::Duration::seconds(86_399),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        };
        f.write_str(label)
    }
}

fn back_months(day: NaiveDate, months: u32) -> NaiveDate {
    day.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// A resolved `[start, end]` interval, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodWindow {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// A record that can be placed on the timeline.
///
/// The backend sends timestamps as raw strings and omits fields freely, so
/// both accessors return what was received verbatim. The effective timestamp
/// prefers the primary field and falls back to the date field only when the
/// primary is absent.
pub trait Timestamped {
    fn timestamp(&self) -> Option<&str>;
    fn date(&self) -> Option<&str>;

    fn effective_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp()
            .or_else(|| self.date())
            .and_then(parse_timestamp)
    }
}

/// Parse the timestamp formats the backend is known to emit.
///
/// Returns `None` for anything unrecognized; callers skip such records rather
/// than failing the whole view.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(instant);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Keep the records whose effective timestamp falls inside the window.
///
/// Stable filter: output preserves input order and contains no new elements.
/// Records with a missing or unparseable timestamp are dropped silently.
pub fn filter_by_period<T: Timestamped + Clone>(
    data: &[T],
    period: Period,
    now: NaiveDateTime,
) -> Vec<T> {
    let window = period.window(now);
    data.iter()
        .filter(|record| {
            record
                .effective_timestamp()
                .is_some_and(|instant| window.contains(instant))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        timestamp: Option<String>,
        date: Option<String>,
    }

    impl Row {
        fn at(timestamp: &str) -> Self {
            Self {
                timestamp: Some(timestamp.to_string()),
                date: None,
            }
        }
    }

    impl Timestamped for Row {
        fn timestamp(&self) -> Option<&str> {
            self.timestamp.as_deref()
        }

        fn date(&self) -> Option<&str> {
            self.date.as_deref()
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_week_window_keeps_trailing_seven_days() {
        let data = vec![
            Row::at("2024-01-10"),
            Row::at("2024-01-16"),
            Row::at("2024-02-01"),
        ];
        let kept = filter_by_period(&data, Period::Week, noon("2024-01-17"));
        assert_eq!(kept, vec![Row::at("2024-01-10"), Row::at("2024-01-16")]);
    }

    #[test]
    fn test_today_window_spans_full_day() {
        let window = Period::Today.window(noon("2024-03-05"));
        assert!(window.contains(noon("2024-03-05")));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_time(NaiveTime::MIN)));
        assert!(window.contains(
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap()
        ));
        assert!(!window.contains(noon("2024-03-04")));
        assert!(!window.contains(noon("2024-03-06")));
    }

    #[test]
    fn test_month_window_clamps_day_of_month() {
        // March 31 minus one month lands on February 29 in a leap year
        let window = Period::Month.window(noon("2024-03-31"));
        assert_eq!(
            window.start.date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_quarter_is_three_months() {
        let window = Period::Quarter.window(noon("2024-05-15"));
        assert_eq!(
            window.start.date(),
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_year_window() {
        let window = Period::Year.window(noon("2024-06-01"));
        assert_eq!(
            window.start.date(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_filter_preserves_order_and_subset() {
        let data = vec![
            Row::at("2024-01-16T08:00:00"),
            Row::at("2024-01-12 09:30:00"),
            Row::at("2024-01-15"),
        ];
        let kept = filter_by_period(&data, Period::Week, noon("2024-01-17"));
        assert_eq!(kept, data);
    }

    #[test]
    fn test_missing_and_unparseable_timestamps_excluded() {
        let data = vec![
            Row {
                timestamp: None,
                date: None,
            },
            Row::at("not-a-date"),
            Row::at("2024-01-16"),
        ];
        let kept = filter_by_period(&data, Period::Week, noon("2024-01-17"));
        assert_eq!(kept, vec![Row::at("2024-01-16")]);
    }

    #[test]
    fn test_date_field_fallback() {
        let row = Row {
            timestamp: None,
            date: Some("2024-01-16".to_string()),
        };
        let kept = filter_by_period(&[row.clone()], Period::Week, noon("2024-01-17"));
        assert_eq!(kept, vec![row]);
    }

    #[test]
    fn test_rfc3339_timestamps_parse() {
        assert_eq!(
            parse_timestamp("2024-01-16T08:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 16)
                .unwrap()
                .and_hms_opt(8, 30, 0)
        );
    }
}
