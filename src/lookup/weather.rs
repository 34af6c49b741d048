//! Weather lookup module
//!
//! Static mapping from city to a descriptive weather string. No time
//! dependency; repeated calls yield identical output.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::city::{city_key, title_case};
use super::envelope::{Envelope, Report};

fn sample_weather() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("new york", "Sunny, 25°C (77°F)"),
            ("san francisco", "Foggy, 18°C (64°F)"),
            ("london", "Cloudy, 16°C (61°F)"),
            ("tokyo", "Rainy, 22°C (72°F)"),
        ])
    })
}

/// Look up the weather report for a city.
pub fn current_weather(city: &str) -> Envelope<Report> {
    match sample_weather().get(city_key(city).as_str()) {
        Some(description) => Envelope::success(Report {
            report: format!("The weather in {} is {description}.", title_case(city)),
        }),
        None => Envelope::error(format!("No weather data available for '{city}'.")),
    }
}
