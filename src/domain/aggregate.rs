// Aggregation - summary statistics for chart reference lines

/// Summary computed over a windowed record set.
///
/// `average` is `None` when no usable values were found; callers render a
/// "no data" state instead of a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateSummary {
    pub count: usize,
    pub average: Option<f64>,
}

impl AggregateSummary {
    /// Band drawn around the average on usage charts.
    ///
    /// The bounds are fixed offsets from the average, not observed extrema,
    /// which is why the fields are named as margins.
    pub fn reference_band(&self, margin: f64) -> Option<ReferenceBand> {
        self.average.map(|average| ReferenceBand {
            average,
            upper_margin: average + margin,
            lower_margin: average - margin,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBand {
    pub average: f64,
    pub upper_margin: f64,
    pub lower_margin: f64,
}

/// Compute count and arithmetic mean of the values the selector yields.
///
/// Records where the selector returns `None` or a non-finite number are
/// skipped rather than poisoning the average.
pub fn aggregate<T>(data: &[T], value: impl Fn(&T) -> Option<f64>) -> AggregateSummary {
    let mut count = 0usize;
    let mut sum = 0.0f64;
    for record in data {
        if let Some(v) = value(record) {
            if v.is_finite() {
                count += 1;
                sum += v;
            }
        }
    }
    if count == 0 {
        AggregateSummary {
            count: 0,
            average: None,
        }
    } else {
        AggregateSummary {
            count,
            average: Some(sum / count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_meter_values() {
        let values = vec![45.0, 78.0, 23.0];
        let summary = aggregate(&values, |v| Some(*v));
        assert_eq!(summary.count, 3);
        let average = summary.average.unwrap();
        assert!((average - 48.666_666_666_666_664).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_null_average() {
        let values: Vec<f64> = Vec::new();
        let summary = aggregate(&values, |v| Some(*v));
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.reference_band(10.0), None);
    }

    #[test]
    fn test_missing_and_nan_values_skipped() {
        let values = vec![Some(10.0), None, Some(f64::NAN), Some(20.0)];
        let summary = aggregate(&values, |v| *v);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, Some(15.0));
    }

    #[test]
    fn test_reference_band_offsets() {
        let summary = aggregate(&[40.0, 60.0], |v| Some(*v));
        let band = summary.reference_band(15.0).unwrap();
        assert_eq!(band.average, 50.0);
        assert_eq!(band.upper_margin, 65.0);
        assert_eq!(band.lower_margin, 35.0);
    }
}
