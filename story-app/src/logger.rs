use crate::error::{AppError, Result as AppErrorResult};

use story_config::LogLevel;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize the global logger.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - None logs to stdout, Some appends to the file
/// * `colored` - Colored levels on stdout (ignored when logging to file)
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = *log_level;

    let output = match log_file.as_deref() {
        Some(path) => Dispatch::new().format(plain).chain(open_log_file(path)?),
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{file}:{line}]",
                        date = humantime::format_rfc3339(SystemTime::now()),
                        level = colors.color(record.level()),
                        message = message,
                        file = record.file().unwrap_or("unknown"),
                        line = record.line().unwrap_or(0),
                    ))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new().format(plain).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| AppError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// Resolve the log file from the logging config, creating its directory.
pub fn log_file_path(
    config_dir: &Path,
    dir: &str,
    file: Option<&str>,
) -> AppErrorResult<Option<PathBuf>> {
    let Some(file) = file else {
        return Ok(None);
    };

    let log_dir = config_dir.join(dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| AppError::LogFile {
        path: log_dir.clone(),
        source: e,
    })?;

    Ok(Some(log_dir.join(file)))
}

fn open_log_file(path: &Path) -> AppErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::LogFile {
            path: path.to_path_buf(),
            source: e,
        })
}

fn plain(out: FormatCallback, message: &std::fmt::Arguments, record: &Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
