//! Configuration loading and validation

mod settings;

pub use settings::{ConfigError, Settings, DEFAULT_SOURCE_URL};
