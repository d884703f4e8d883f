#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, DemoSelection};
pub use toml_config::{DemoConfig, LogFormat, LoggingConfig, PaymentStep, TheatreConfig};
