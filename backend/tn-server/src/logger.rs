use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Initialize the global logger.
///
/// `log_file` of None logs to stdout; `colored` is ignored for file output.
pub fn initialize(
    log_level: tn_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {}",
                    line_prefix(record.level().to_string()),
                    with_source(message, record)
                ))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{} {}",
                    line_prefix(colors.color(record.level()).to_string()),
                    with_source(message, record)
                ))
            })
            .chain(std::io::stdout())
    } else {
        // systemd, docker logs
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {}",
                    line_prefix(record.level().to_string()),
                    with_source(message, record)
                ))
            })
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", log_level),
    }

    Ok(())
}

fn line_prefix(level: String) -> String {
    format!(
        "[{} - {}]",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        level
    )
}

fn with_source(message: &std::fmt::Arguments<'_>, record: &Record<'_>) -> String {
    format!(
        "{} [{}:{}]",
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}
