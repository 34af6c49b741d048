//! Time lookup module
//!
//! Maps a city to its IANA timezone and formats the current wall-clock time
//! there. The timezone table is static; only the clock read is
//! non-deterministic.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::Utc;
use chrono_tz::Tz;

use super::city::{city_key, title_case};
use super::envelope::{Envelope, Report};
use crate::logger;

fn timezone_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("new york", "America/New_York"),
            ("san francisco", "America/Los_Angeles"),
            ("london", "Europe/London"),
            ("tokyo", "Asia/Tokyo"),
        ])
    })
}

/// Report the current time in a city.
///
/// A tabled identifier that fails to resolve is an internal invariant
/// violation: it is logged and surfaced as a generic error rather than a
/// panic.
pub fn current_time(city: &str) -> Envelope<Report> {
    let Some(tz_name) = timezone_table().get(city_key(city).as_str()) else {
        return Envelope::error(format!("No timezone data available for '{city}'."));
    };

    match tz_name.parse::<Tz>() {
        Ok(tz) => {
            let now = Utc::now().with_timezone(&tz);
            Envelope::success(Report {
                report: format!(
                    "The current time in {} is {}",
                    title_case(city),
                    now.format("%Y-%m-%d %H:%M:%S %Z%z")
                ),
            })
        }
        Err(_) => {
            logger::log_error(&format!(
                "Timezone table entry '{tz_name}' failed to resolve"
            ));
            Envelope::error(format!(
                "Unable to determine the current time for '{city}'."
            ))
        }
    }
}
