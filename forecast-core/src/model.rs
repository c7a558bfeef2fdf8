use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::fmt;

/// Returns true if `input`, trimmed, is a usable city name.
pub fn is_valid_city(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Returns true if `input`, trimmed, is exactly two alphabetic characters.
/// Case is not normalized; the provider accepts either.
pub fn is_valid_country_code(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic())
}

/// A validated query location: city name plus two-letter country code.
/// Built once per run from user input and consumed to form the request query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    city: String,
    country: String,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Result<Self> {
        let city = city.into().trim().to_string();
        let country = country.into().trim().to_string();

        if !is_valid_city(&city) {
            return Err(anyhow!("City name must not be empty"));
        }
        if !is_valid_country_code(&country) {
            return Err(anyhow!(
                "Country code '{country}' must be exactly two alphabetic characters"
            ));
        }

        Ok(Self { city, country })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Location {
    /// Renders the provider query form, `"{city},{country}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.city, self.country)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Main {
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Weather {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

/// One three-hour timestep of the provider forecast. Every sub-field is
/// optional so a gap in one entry never fails deserialization of the whole
/// response; the accessors below each report their own field independently.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: Option<i64>,
    pub main: Option<Main>,
    pub weather: Option<Vec<Weather>>,
    pub wind: Option<Wind>,
}

impl ForecastEntry {
    pub fn temperature(&self) -> Option<f64> {
        self.main.as_ref()?.temp
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.dt
    }

    pub fn description(&self) -> Option<&str> {
        self.weather.as_ref()?.first()?.description.as_deref()
    }

    pub fn wind_speed(&self) -> Option<f64> {
        self.wind.as_ref()?.speed
    }
}

/// Provider response body. `list` is required: a body without it is a
/// request-level failure, not a per-field one.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_from_json(json: &str) -> ForecastEntry {
        serde_json::from_str(json).expect("entry should deserialize")
    }

    #[test]
    fn location_renders_query_form() {
        let loc = Location::new("Minneapolis", "US").expect("valid location");

        assert_eq!(loc.to_string(), "Minneapolis,US");
        assert_eq!(loc.city(), "Minneapolis");
        assert_eq!(loc.country(), "US");
    }

    #[test]
    fn location_trims_input() {
        let loc = Location::new("  London ", " gb ").expect("valid location");

        assert_eq!(loc.to_string(), "London,gb");
    }

    #[test]
    fn location_rejects_empty_city() {
        assert!(Location::new("   ", "US").is_err());
    }

    #[test]
    fn location_rejects_bad_country_codes() {
        for bad in ["", "U", "USA", "U1", "12", "u-"] {
            let err = Location::new("Paris", bad).unwrap_err();
            assert!(err.to_string().contains("two alphabetic characters"), "{bad}");
        }
    }

    #[test]
    fn country_code_predicate() {
        assert!(is_valid_country_code("US"));
        assert!(is_valid_country_code("gb"));
        assert!(is_valid_country_code(" fr "));
        assert!(!is_valid_country_code("USA"));
        assert!(!is_valid_country_code("U1"));
        assert!(!is_valid_country_code(""));
    }

    #[test]
    fn full_entry_exposes_all_fields() {
        let entry = entry_from_json(
            r#"{
                "dt": 1700000000,
                "main": { "temp": 72.5 },
                "weather": [{ "description": "clear sky" }],
                "wind": { "speed": 5.0 }
            }"#,
        );

        assert_eq!(entry.temperature(), Some(72.5));
        assert_eq!(entry.timestamp(), Some(1700000000));
        assert_eq!(entry.description(), Some("clear sky"));
        assert_eq!(entry.wind_speed(), Some(5.0));
    }

    #[test]
    fn missing_wind_does_not_affect_other_fields() {
        let entry = entry_from_json(
            r#"{
                "dt": 1700000000,
                "main": { "temp": 72.5 },
                "weather": [{ "description": "clear sky" }]
            }"#,
        );

        assert_eq!(entry.wind_speed(), None);
        assert_eq!(entry.temperature(), Some(72.5));
        assert_eq!(entry.timestamp(), Some(1700000000));
        assert_eq!(entry.description(), Some("clear sky"));
    }

    #[test]
    fn empty_weather_list_yields_no_description() {
        let entry = entry_from_json(r#"{ "dt": 1, "weather": [] }"#);

        assert_eq!(entry.description(), None);
    }

    #[test]
    fn response_preserves_entry_order() {
        let response: ForecastResponse = serde_json::from_str(
            r#"{ "list": [ { "dt": 1 }, { "dt": 2 }, { "dt": 3 } ] }"#,
        )
        .expect("response should deserialize");

        let stamps: Vec<_> = response.list.iter().map(|e| e.timestamp()).collect();
        assert_eq!(stamps, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn response_without_list_is_an_error() {
        let result = serde_json::from_str::<ForecastResponse>(r#"{ "cod": "200" }"#);

        assert!(result.is_err());
    }
}
