use std::{
    io::{self, Write as _},
    sync::OnceLock,
};

use colored::{ColoredString, Colorize as _};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

/// Logger writing to stderr, so logs never mix with the rendered maze on stdout.
pub struct AppLogger {
    level: LevelFilter,
}

impl AppLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{} {}] {}",
            level_label(record.level()),
            record.target(),
            record.args()
        )
    }
}

fn level_label(level: Level) -> ColoredString {
    let label = format!("{:<5}", level);
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = writeln!(io::stderr().lock(), "{}", self.format(record));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

pub fn get_logger(level: LevelFilter) -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(level))
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger(level);
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(())
}

/// Moves `level` up by `verbose` steps and down by `quiet` steps.
pub fn adjust_level(level: LevelFilter, verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let current = LEVELS.iter().position(|&l| l == level).unwrap_or(2) as i32;
    let adjusted = (current + verbose as i32 - quiet as i32).clamp(0, LEVELS.len() as i32 - 1);
    LEVELS[adjusted as usize]
}
