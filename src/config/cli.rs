use crate::config::toml_config::{DemoConfig, LogFormat, PaymentStep};
use crate::domain::model::PaymentMethod;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoSelection {
    Facade,
    Strategy,
    All,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-demo")]
#[command(about = "Interactive demo of the Facade and Strategy design patterns")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run one demo and exit instead of showing the menu
    #[arg(long, value_enum)]
    pub run: Option<DemoSelection>,

    /// Override the movie volume from the configuration
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<i32>,

    /// Replace the payment schedule, e.g. `--pay paypal:40 --pay crypto:100`
    #[arg(long = "pay", value_parser = parse_payment_step)]
    pub payments: Vec<PaymentStep>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

pub fn parse_payment_step(raw: &str) -> Result<PaymentStep, String> {
    let (method, amount) = raw
        .split_once(':')
        .ok_or_else(|| format!("Expected METHOD:AMOUNT, got '{}'", raw))?;

    let method: PaymentMethod = method.parse()?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|e| format!("Invalid amount '{}': {}", amount, e))?;

    Ok(PaymentStep { method, amount })
}

impl CliConfig {
    /// 命令列參數覆蓋檔案中的設定
    pub fn apply_overrides(&self, config: &mut DemoConfig) {
        if let Some(volume) = self.volume {
            config.theatre.movie_volume = volume;
        }
        if !self.payments.is_empty() {
            config.payments = self.payments.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}
