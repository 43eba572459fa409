//! simplelog setup shared by the demo binary and anyone embedding the crate.
//! Library code only talks to the `log` facade; call [`init_logger`] once at startup.
use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub console: bool,
    /// file to write the log into, None means no file logger
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::Info,
            console: true,
            file: None,
        }
    }
}

/// "debug" | "info" | "warn" | "error" | "off", any case
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_lowercase().as_str() {
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// log_YYYY-MM-DD_HH-MM-SS.txt
pub fn default_log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Builds the console and file loggers requested by `settings` and installs them.
/// Returns false when nothing was installed: no logger requested, or a global
/// logger was already set by an earlier call.
pub fn init_logger(settings: &LogSettings) -> bool {
    let level = settings.level;
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    if settings.console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    // File logger
    if let Some(ref filename) = settings.file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
        }
    }

    if loggers.is_empty() {
        return false;
    }
    CombinedLogger::init(loggers).is_ok()
}
