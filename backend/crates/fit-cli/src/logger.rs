use crate::error::{CliError, Result as CliErrorResult};

use std::fmt::{Arguments, Display};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, info};

/// Install the global logger.
///
/// Output goes to `log_file` when set, otherwise to stderr so that stdout
/// carries only the JSON result. Colors apply to stderr only.
pub fn initialize(
    log_level: fit_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => (open_log_file(path)?.into(), None),
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| match colors {
            Some(colors) => format_line(out, message, record, colors.color(record.level())),
            None => format_line(out, message, record, record.level()),
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

fn format_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{} - {}] {}: {}",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        record.target(),
        message,
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

pub(crate) fn open_log_file(path: &Path) -> CliErrorResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    fern::log_file(path).map_err(|e| CliError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })
}
