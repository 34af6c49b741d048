//! City name handling
//!
//! Lookups use the lowercased form of a city name; display strings use the
//! title-cased form of the caller's original input. Error messages echo the
//! original input untouched.

/// Lookup key: the city name folded to lowercase.
pub fn city_key(city: &str) -> String {
    city.to_lowercase()
}

/// Title-case a city name for display.
///
/// The first alphabetic character of each word is uppercased and the rest
/// lowercased; a new word starts after any non-alphabetic character.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_key_lowercases() {
        assert_eq!(city_key("New York"), "new york");
        assert_eq!(city_key("TOKYO"), "tokyo");
        assert_eq!(city_key("london"), "london");
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("tokyo"), "Tokyo");
        assert_eq!(title_case("TOKYO"), "Tokyo");
        assert_eq!(title_case("tOkYo"), "Tokyo");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("SAN FRANCISCO"), "San Francisco");
    }

    #[test]
    fn test_title_case_non_alpha_boundaries() {
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
        assert_eq!(title_case(""), "");
    }
}
