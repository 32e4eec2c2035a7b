pub mod setup;

pub use setup::{setup_from_cli, AppConfig, ConfigError};
