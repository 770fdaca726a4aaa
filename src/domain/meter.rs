// Meter device model
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Meter {
    pub fn new(id: i64, code: String, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let name = Self::format_name(&code);
        Self {
            id,
            code,
            name,
            latitude,
            longitude,
        }
    }

    fn format_name(code: &str) -> String {
        // Convert "Main_Street_12_" to "Main Street 12"
        code.trim_end_matches('_').replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name() {
        let meter = Meter::new(1, "Main_Street_12_".to_string(), None, None);
        assert_eq!(meter.name, "Main Street 12");

        let meter = Meter::new(2, "Pump_House_3".to_string(), Some(48.2), Some(16.4));
        assert_eq!(meter.name, "Pump House 3");
    }
}
