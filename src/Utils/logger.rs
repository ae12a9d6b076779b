use chrono::Local;
use log::LevelFilter;
use simplelog::*;
use std::fs::File;
use strum_macros::{Display, EnumString};

/// logging levels accepted in task files
#[derive(Debug, Clone, Copy, PartialEq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    #[strum(serialize = "off", serialize = "none")]
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// name of the log file for a run started now
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Installs the global logger: terminal output plus, optionally, a log file named by
/// `log_file_name`. Returns false if logging is off or a logger was already installed.
pub fn init_logger(level: LogLevel, log_to_file: bool) -> bool {
    if level == LogLevel::Off {
        return false;
    }
    let level = level.to_level_filter();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if log_to_file {
        let name = log_file_name();
        match File::create(&name) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", name, e),
        }
    }
    CombinedLogger::init(loggers).is_ok()
}
