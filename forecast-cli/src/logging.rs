use anyhow::{Context, Result};
use chrono::Local;
use env_logger::Target;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Diagnostic log sibling of the working directory.
pub const LOG_FILE: &str = "forecast.log";

/// Install the process-wide diagnostic logger: append-only file sink, one
/// line per record, minimum level INFO. The file is never truncated or
/// rotated by this program.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}
