use anyhow::Result;
use forecast_core::Location;
use forecast_core::model::{is_valid_city, is_valid_country_code};
use inquire::{Text, validator::Validation};

/// Prompt until both halves of the location pass validation. The loops are
/// unbounded: an interactive session keeps asking until the input is usable.
pub fn collect_location() -> Result<Location> {
    let city = Text::new("Enter the name of a city:")
        .with_validator(|input: &str| {
            if is_valid_city(input) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Please enter a city name.".into()))
            }
        })
        .prompt()?;

    let country = Text::new("Enter the two digit country code for your city:")
        .with_validator(|input: &str| {
            if is_valid_country_code(input) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    "The country code must be exactly two letters.".into(),
                ))
            }
        })
        .prompt()?;

    Location::new(city, country)
}
