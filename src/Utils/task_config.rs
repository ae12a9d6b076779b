//! Task file describing one area computation, in TOML:
//!
//! ```toml
//! f1 = "x^2"
//! f2 = "0"
//! a = 0.0
//! b = 1.0
//! n = 100
//! [output]
//! loglevel = "info"
//! log_file = false
//! plot = "area.png"
//! csv = "samples.csv"
//! ```
//! `f1`, `f2`, `a`, `b`, `n` are required, the `[output]` section and all its keys are optional.
//! Integers are accepted where floats are expected.
use crate::Utils::logger::LogLevel;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use toml::{Table, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct CalcTask {
    pub f1: String,
    pub f2: String,
    pub a: f64,
    pub b: f64,
    /// rectangle count as written; validated later
    pub n: i64,
    pub loglevel: LogLevel,
    pub log_file: bool,
    pub plot: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

fn required<'a>(table: &'a Table, key: &str) -> Result<&'a Value, String> {
    table
        .get(key)
        .ok_or_else(|| format!("missing key '{}' in task file", key))
}

fn get_str(table: &Table, key: &str) -> Result<String, String> {
    required(table, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("key '{}' must be a string", key))
}

fn get_float(table: &Table, key: &str) -> Result<f64, String> {
    match required(table, key)? {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(format!("key '{}' must be a number", key)),
    }
}

fn get_int(table: &Table, key: &str) -> Result<i64, String> {
    required(table, key)?
        .as_integer()
        .ok_or_else(|| format!("key '{}' must be an integer", key))
}

fn get_optional_path(table: &Table, key: &str) -> Result<Option<PathBuf>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(PathBuf::from(s))),
        Some(_) => Err(format!("key 'output.{}' must be a string", key)),
    }
}

impl CalcTask {
    pub fn from_toml_str(content: &str) -> Result<CalcTask, String> {
        let table: Table = content
            .parse()
            .map_err(|e| format!("cannot parse task file: {}", e))?;
        let empty = Table::new();
        let output = match table.get("output") {
            None => &empty,
            Some(Value::Table(t)) => t,
            Some(_) => return Err("'output' must be a section".to_string()),
        };
        let loglevel = match output.get("loglevel") {
            None => LogLevel::default(),
            Some(Value::String(s)) => LogLevel::from_str(s)
                .map_err(|_| format!("unknown loglevel '{}', use off, error, warn, info or debug", s))?,
            Some(_) => return Err("key 'output.loglevel' must be a string".to_string()),
        };
        let log_file = match output.get("log_file") {
            None => false,
            Some(v) => v
                .as_bool()
                .ok_or_else(|| "key 'output.log_file' must be true or false".to_string())?,
        };
        Ok(CalcTask {
            f1: get_str(&table, "f1")?,
            f2: get_str(&table, "f2")?,
            a: get_float(&table, "a")?,
            b: get_float(&table, "b")?,
            n: get_int(&table, "n")?,
            loglevel,
            log_file,
            plot: get_optional_path(output, "plot")?,
            csv: get_optional_path(output, "csv")?,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CalcTask, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("cannot read {}: {}", path.as_ref().display(), e))?;
        CalcTask::from_toml_str(&content)
    }
}
