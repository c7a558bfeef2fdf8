//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration (provider endpoint, API credential)
//! - The forecast domain model (locations, forecast entries)
//! - The HTTP client for the forecast provider
//! - Per-entry field extraction and human-readable rendering
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod format;
pub mod model;

pub use client::{FetchError, ForecastClient};
pub use config::Config;
pub use format::{UNKNOWN, render_all};
pub use model::{ForecastEntry, Location};
