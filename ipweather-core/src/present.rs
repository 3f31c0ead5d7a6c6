//! Turns a validated [`WeatherRecord`] into display-ready values.
//!
//! Service-provided strings are passed through as raw markup, unescaped.

use crate::{
    band::TemperatureBand, config::Config, model::WeatherRecord, units::display_fahrenheit,
};

/// Builds a self-closing `<img>` element for a weather icon.
///
/// Without an icon name the source falls back to `config.default_icon`,
/// resolved relative to the page. `alt_text`, when present, is written
/// verbatim into both `alt` and `title`.
pub fn weather_icon_markup(config: &Config, icon_name: Option<&str>, alt_text: Option<&str>) -> String {
    let src = match icon_name.filter(|name| !name.is_empty()) {
        Some(name) => config.icon_url(name),
        None => config.default_icon.clone(),
    };

    let mut html = format!("<img src=\"{src}\"");
    if let Some(alt) = alt_text.filter(|alt| !alt.is_empty()) {
        html.push_str(&format!(" alt=\"{alt}\" title=\"{alt}\""));
    }
    html.push_str(" />");

    html
}

/// Temperature text plus the color of its band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureDisplay {
    pub fahrenheit: i64,
    pub band: TemperatureBand,
    pub text: String,
    pub color: String,
}

impl TemperatureDisplay {
    pub fn from_kelvin(config: &Config, kelvin: f64) -> Self {
        let fahrenheit = display_fahrenheit(kelvin);
        let band = TemperatureBand::from_fahrenheit(fahrenheit);

        Self {
            fahrenheit,
            band,
            text: format!("{fahrenheit}°F"),
            color: config.palette.color(band).to_string(),
        }
    }
}

/// Everything one cycle writes into the page. `None` leaves that region untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendering {
    pub temperature: Option<TemperatureDisplay>,
    pub weather_icon: Option<String>,
    pub sky: Option<String>,
    pub city: Option<String>,
}

impl Rendering {
    pub fn from_record(config: &Config, record: &WeatherRecord) -> Self {
        let condition = &record.condition;

        Self {
            temperature: record
                .temp
                .map(|kelvin| TemperatureDisplay::from_kelvin(config, kelvin)),
            // The icon region is only updated when the service names an icon.
            weather_icon: condition.icon.as_deref().map(|icon| {
                weather_icon_markup(config, Some(icon), condition.description.as_deref())
            }),
            sky: condition.main.clone(),
            city: record.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkyCondition;

    #[test]
    fn icon_markup_uses_icon_host_and_alt_text() {
        let cfg = Config::default();
        let html = weather_icon_markup(&cfg, Some("10d"), Some("clear sky"));

        assert_eq!(
            html,
            "<img src=\"http://openweathermap.org/img/w/10d.png\" alt=\"clear sky\" title=\"clear sky\" />"
        );
        assert_eq!(html.matches("clear sky").count(), 2);
    }

    #[test]
    fn icon_markup_falls_back_to_page_relative_default() {
        let cfg = Config::default();
        let html = weather_icon_markup(&cfg, None, None);

        assert_eq!(html, "<img src=\"none.png\" />");
        assert!(!html.contains("alt="));
        assert!(!html.contains("title="));
    }

    #[test]
    fn icon_markup_does_not_escape_alt_text() {
        let cfg = Config::default();
        let html = weather_icon_markup(&cfg, Some("01n"), Some("<b>clear</b>"));

        assert!(html.contains("alt=\"<b>clear</b>\""));
    }

    #[test]
    fn temperature_display_for_300_kelvin() {
        let cfg = Config::default();
        let display = TemperatureDisplay::from_kelvin(&cfg, 300.0);

        assert_eq!(display.fahrenheit, 80);
        assert_eq!(display.band, TemperatureBand::Orange);
        assert_eq!(display.text, "80°F");
        assert_eq!(display.color, "#E68200");
    }

    #[test]
    fn temperature_color_follows_configured_palette() {
        let mut cfg = Config::default();
        cfg.palette.violet = "#123456".to_string();

        let display = TemperatureDisplay::from_kelvin(&cfg, 250.0);
        assert_eq!(display.band, TemperatureBand::Violet);
        assert_eq!(display.color, "#123456");
    }

    #[test]
    fn rendering_skips_absent_fields() {
        let cfg = Config::default();
        let record = WeatherRecord {
            temp: None,
            condition: SkyCondition {
                icon: None,
                description: Some("overcast".to_string()),
                main: Some("Clouds".to_string()),
            },
            name: None,
        };

        let rendering = Rendering::from_record(&cfg, &record);

        assert_eq!(rendering.temperature, None);
        assert_eq!(rendering.weather_icon, None);
        assert_eq!(rendering.sky.as_deref(), Some("Clouds"));
        assert_eq!(rendering.city, None);
    }

    #[test]
    fn rendering_passes_city_through_verbatim() {
        let cfg = Config::default();
        let record = WeatherRecord {
            name: Some("St. <i>John's</i>".to_string()),
            ..WeatherRecord::default()
        };

        let rendering = Rendering::from_record(&cfg, &record);
        assert_eq!(rendering.city.as_deref(), Some("St. <i>John's</i>"));
    }
}
