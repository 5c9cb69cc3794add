use std::io::Write;

use clap::ValueEnum;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Stream diagnostics are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Keeps stdout free for a machine-readable report.
    Stderr,
}

impl From<Output> for env_logger::Target {
    fn from(output: Output) -> Self {
        match output {
            Output::Stdout => env_logger::Target::Stdout,
            Output::Stderr => env_logger::Target::Stderr,
        }
    }
}

/// Installs the logger; lines read `<LEVEL> [<target>] <message>`.
pub fn init(level: LogLevel, output: Output) {
    let _ = env_logger::Builder::new()
        .filter_level(level.into())
        .target(output.into())
        .format(|buf, record| {
            writeln!(buf, "{} [{}] {}", record.level(), record.target(), record.args())
        })
        .try_init();
}
