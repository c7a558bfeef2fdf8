use anyhow::Context;
use clap::Parser;
use forecast_core::{Config, ForecastClient, render_all};
use log::info;
use std::io;

use crate::prompt;

/// Top-level CLI struct. The tool takes no flags or subcommands; invoking it
/// starts an interactive session.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Five day weather forecast for a city, in three hour steps"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env();
        let location = prompt::collect_location()?;

        let client = ForecastClient::new(&config);
        match client.fetch_forecast(&location).await {
            Ok(entries) => {
                info!("The user requested a forecast from the API.");

                let mut stdout = io::stdout().lock();
                render_all(&entries, &mut stdout)
                    .context("Failed to write the forecast to stdout")?;
            }
            Err(_) => {
                // Detail is already in the log; the user gets the short version.
                println!("Sorry, could not get the weather.");
            }
        }

        Ok(())
    }
}
