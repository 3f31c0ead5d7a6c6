use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{is_present, is_valid_location, is_valid_weather};

/// Coordinates reported by the location service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationRecord {
    /// Extracts the coordinates, or `None` if the payload fails validation.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_valid_location(value) {
            return None;
        }

        Some(Self {
            latitude: value.get("latitude")?.as_f64()?,
            longitude: value.get("longitude")?.as_f64()?,
        })
    }
}

/// First entry of the weather service's `weather` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyCondition {
    pub icon: Option<String>,
    pub description: Option<String>,
    pub main: Option<String>,
}

/// Current conditions reported by the weather service.
///
/// Every field is independently optional; each one gates a single display update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Kelvin.
    pub temp: Option<f64>,
    pub condition: SkyCondition,
    pub name: Option<String>,
}

impl WeatherRecord {
    /// Extracts the record, or `None` if the payload fails validation.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_valid_weather(value) {
            return None;
        }

        let temp = value
            .get("main")
            .and_then(|main| main.get("temp"))
            .filter(|temp| is_present(temp))
            .and_then(Value::as_f64);

        let first = value.get("weather")?.get(0)?;
        let condition = SkyCondition {
            icon: text_field(first, "icon"),
            description: text_field(first, "description"),
            main: text_field(first, "main"),
        };

        Some(Self {
            temp,
            condition,
            name: text_field(value, "name"),
        })
    }
}

/// Present strings pass through as-is; present numbers and `true` are
/// stringified. Arrays and objects have no display text and count as absent.
fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key).filter(|v| is_present(v))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_from_valid_payload() {
        let record = LocationRecord::from_value(&json!({
            "latitude": 40.0,
            "longitude": -75,
            "ip": "203.0.113.9"
        }))
        .expect("valid location");

        assert_eq!(record.latitude, 40.0);
        assert_eq!(record.longitude, -75.0);
    }

    #[test]
    fn location_from_invalid_payload_is_none() {
        assert!(LocationRecord::from_value(&json!({ "latitude": "x", "longitude": 2 })).is_none());
        assert!(LocationRecord::from_value(&Value::Null).is_none());
    }

    #[test]
    fn weather_extracts_all_fields() {
        let record = WeatherRecord::from_value(&json!({
            "main": { "temp": 300 },
            "weather": [
                { "icon": "01d", "main": "Clear", "description": "clear sky" },
                { "icon": "09d", "main": "Rain" }
            ],
            "name": "Philadelphia"
        }))
        .expect("valid weather");

        assert_eq!(record.temp, Some(300.0));
        assert_eq!(record.condition.icon.as_deref(), Some("01d"));
        assert_eq!(record.condition.main.as_deref(), Some("Clear"));
        assert_eq!(record.condition.description.as_deref(), Some("clear sky"));
        assert_eq!(record.name.as_deref(), Some("Philadelphia"));
    }

    #[test]
    fn weather_optional_fields_may_be_missing() {
        let record = WeatherRecord::from_value(&json!({
            "main": { "humidity": 40 },
            "weather": [{}]
        }))
        .expect("valid weather");

        assert_eq!(record, WeatherRecord::default());
    }

    #[test]
    fn zero_temperature_and_empty_strings_count_as_absent() {
        let record = WeatherRecord::from_value(&json!({
            "main": { "temp": 0 },
            "weather": [{ "icon": "", "main": "Clouds" }],
            "name": ""
        }))
        .expect("valid weather");

        assert_eq!(record.temp, None);
        assert_eq!(record.condition.icon, None);
        assert_eq!(record.condition.main.as_deref(), Some("Clouds"));
        assert_eq!(record.name, None);
    }

    #[test]
    fn non_string_scalars_are_stringified() {
        let record = WeatherRecord::from_value(&json!({
            "main": { "temp": 280 },
            "weather": [{ "icon": 10, "main": true, "description": { "text": "rain" } }],
            "name": 1984
        }))
        .expect("valid weather");

        assert_eq!(record.condition.icon.as_deref(), Some("10"));
        assert_eq!(record.condition.main.as_deref(), Some("true"));
        assert_eq!(record.condition.description, None);
        assert_eq!(record.name.as_deref(), Some("1984"));
    }

    #[test]
    fn weather_from_invalid_payload_is_none() {
        assert!(WeatherRecord::from_value(&json!({})).is_none());
        assert!(WeatherRecord::from_value(&json!({ "main": { "temp": 1 }, "weather": [] })).is_none());
    }
}
