use chrono::{DateTime, Local, TimeZone};
use log::error;
use std::fmt;
use std::io::{self, Write};

use crate::model::ForecastEntry;

/// Placeholder printed for any field that could not be extracted.
pub const UNKNOWN: &str = "Unknown";

/// Display pattern for entry timestamps: 12-hour clock, zero-padded minute,
/// unpadded hour, e.g. "Tuesday November 14, 2023 at 10:13PM".
const TIMESTAMP_FORMAT: &str = "%A %B %d, %Y at %-I:%M%p";

/// Temperature of one entry, or the sentinel when `main.temp` is missing.
pub fn extract_temperature(entry: &ForecastEntry) -> String {
    match entry.temperature() {
        Some(temp) => format_reading(temp),
        None => {
            error!("There was an error retrieving the temperature from the API: main.temp is missing");
            UNKNOWN.to_string()
        }
    }
}

/// Entry timestamp converted to local calendar time, or the sentinel when
/// `dt` is missing or outside the representable range. Both failure shapes
/// take the same path.
pub fn extract_timestamp(entry: &ForecastEntry) -> String {
    let local = entry.timestamp().and_then(|ts| Local.timestamp_opt(ts, 0).single());

    match local {
        Some(dt) => format_datetime(&dt),
        None => {
            error!("There was an error retrieving the timestamp from the API: dt is missing or out of range");
            UNKNOWN.to_string()
        }
    }
}

/// Weather description of one entry, or the sentinel when `weather` is empty
/// or carries no description.
pub fn extract_description(entry: &ForecastEntry) -> String {
    match entry.description() {
        Some(description) => description.to_string(),
        None => {
            error!("There was an error retrieving the weather description from the API: weather[0].description is missing");
            UNKNOWN.to_string()
        }
    }
}

/// Wind speed of one entry, or the sentinel when `wind.speed` is missing.
pub fn extract_wind_speed(entry: &ForecastEntry) -> String {
    match entry.wind_speed() {
        Some(speed) => format_reading(speed),
        None => {
            error!("There was an error retrieving the wind speed from the API: wind.speed is missing");
            UNKNOWN.to_string()
        }
    }
}

/// Write one two-sentence block per entry, in the given order. Entries with
/// missing fields still render, with the sentinel in place of each gap.
pub fn render_all<W: Write>(entries: &[ForecastEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        let temp = extract_temperature(entry);
        let timestamp = extract_timestamp(entry);
        let description = extract_description(entry);
        let wind_speed = extract_wind_speed(entry);

        writeln!(out, "The temperature will be {temp}F on {timestamp}.")?;
        writeln!(out, "The forecast predicts {description} with winds of {wind_speed}mph.")?;
        writeln!(out)?;
    }

    Ok(())
}

fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Numeric readings keep a decimal point even when whole, so 5 prints as
/// "5.0mph" rather than "5mph".
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.1}") } else { value.to_string() }
}
