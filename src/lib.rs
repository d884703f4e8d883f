pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::devices::{DvdPlayer, Projector, SoundSystem};
pub use adapters::observers::{ConsoleObserver, FanoutObserver, MemoryObserver, TracingObserver};
pub use adapters::payments::{strategy_for, CreditCardPayment, CryptoPayment, PayPalPayment};
pub use config::DemoConfig;
pub use core::{facade::HomeTheatreFacade, payment::PaymentContext};
pub use utils::error::{DemoError, Result};
