pub mod config;
pub mod logging;
pub mod screens;
pub mod utils;
pub mod views;

pub use config::{AppConfig, ConfigError, Overrides};
