//! Lodging lookup module
//!
//! Static mapping from city to sample Airbnb-style listings. The table is
//! built once and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use super::city::city_key;
use super::envelope::Envelope;

/// A single lodging listing. Statically defined; no identity beyond its
/// position in the city's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub title: &'static str,
    pub price_per_night: &'static str,
    pub location_highlights: &'static str,
}

/// Payload carrying a city's listings, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingResults {
    pub listings: Vec<Listing>,
}

fn sample_listings() -> &'static HashMap<&'static str, Vec<Listing>> {
    static TABLE: OnceLock<HashMap<&'static str, Vec<Listing>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            (
                "new york",
                vec![
                    Listing {
                        title: "Cozy Studio in Manhattan",
                        price_per_night: "$150",
                        location_highlights: "Close to Central Park and subway stations",
                    },
                    Listing {
                        title: "Modern Loft in Brooklyn",
                        price_per_night: "$120",
                        location_highlights: "Great nightlife and cafes nearby",
                    },
                ],
            ),
            (
                "san francisco",
                vec![
                    Listing {
                        title: "Chic Apartment near Golden Gate Park",
                        price_per_night: "$180",
                        location_highlights: "Quiet neighborhood, walkable to park",
                    },
                    Listing {
                        title: "Sunny Mission District Flat",
                        price_per_night: "$140",
                        location_highlights: "Vibrant area with restaurants and shops",
                    },
                ],
            ),
        ])
    })
}

/// Look up sample listings for a city.
///
/// The lookup key is the lowercased city name; the error message echoes the
/// caller's original input.
pub fn find_listings(city: &str) -> Envelope<ListingResults> {
    match sample_listings().get(city_key(city).as_str()) {
        Some(listings) => Envelope::success(ListingResults {
            listings: listings.clone(),
        }),
        None => Envelope::error(format!("No Airbnb data available for '{city}'.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_returns_listings() {
        let envelope = find_listings("new york");
        let Envelope::Success { payload } = envelope else {
            panic!("expected success for a known city");
        };
        assert_eq!(payload.listings.len(), 2);
        assert_eq!(payload.listings[0].title, "Cozy Studio in Manhattan");
        assert_eq!(payload.listings[1].title, "Modern Loft in Brooklyn");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = find_listings("new york");
        let upper = find_listings("NEW YORK");
        let mixed = find_listings("New York");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_unknown_city_echoes_original_casing() {
        let envelope = find_listings("Bogotá");
        assert_eq!(
            envelope.error_message(),
            Some("No Airbnb data available for 'Bogotá'.")
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = serde_json::to_string(&find_listings("san francisco")).unwrap();
        let second = serde_json::to_string(&find_listings("san francisco")).unwrap();
        assert_eq!(first, second);
    }
}
