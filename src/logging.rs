// src/logging.rs
//
// File logger behind the `log` facade. One line per record:
//   [hh:mm:ss.mmm][LEVEL] message
// with the timestamp measured from process start.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use thiserror::Error;

use crate::config::consts::{LOG_ENV, LOG_FILE};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{}] {}\n", fmt_elapsed(ms), level, msg)
}

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            start().elapsed().as_millis(),
            record.level(),
            &record.args().to_string(),
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("cannot open log file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Install(#[from] SetLoggerError),
}

/// `GUILD_TAG_LOG` parsed as a level filter; `info` when unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger at the default location.
pub fn init() -> Result<(), LogInitError> {
    init_at(Path::new(LOG_FILE), level_from_env())
}

/// Install the file logger writing to `path`. Only the first call in a
/// process can succeed.
pub fn init_at(path: &Path, level: LevelFilter) -> Result<(), LogInitError> {
    start();

    let open_err = |source| LogInitError::Open { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(open_err)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)?;

    let logger = LOGGER.get_or_init(|| FileLogger { level, file: Mutex::new(file) });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line(1_500, Level::Warn, "2 row(s) skipped");
        assert_eq!(line, "[00:00:01.500][WARN] 2 row(s) skipped\n");
    }
}
