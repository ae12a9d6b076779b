//! different utility modules used by the command line tool
/// logger setup: terminal and log file
pub mod logger;
/// tiny module to plot both curves, the region between them and Riemann rectangles
pub mod plots;
/// tiny module to save sampled curves into csv file
pub mod export;
/// task file in TOML format describing one computation
pub mod task_config;
