use crate::domain::model::{PaymentMethod, DEFAULT_MOVIE_VOLUME, MAX_VOLUME, MIN_VOLUME};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty, validate_one_of, validate_positive_amount, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub theatre: TheatreConfig,
    #[serde(default = "default_payments")]
    pub payments: Vec<PaymentStep>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheatreConfig {
    #[serde(default = "default_movie_volume")]
    pub movie_volume: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStep {
    pub method: PaymentMethod,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn default_movie_volume() -> i32 {
    DEFAULT_MOVIE_VOLUME
}

fn default_payments() -> Vec<PaymentStep> {
    vec![
        PaymentStep {
            method: PaymentMethod::CreditCard,
            amount: 20.0,
        },
        PaymentStep {
            method: PaymentMethod::PayPal,
            amount: 40.0,
        },
        PaymentStep {
            method: PaymentMethod::Crypto,
            amount: 100.0,
        },
    ]
}

impl Default for TheatreConfig {
    fn default() -> Self {
        Self {
            movie_volume: default_movie_volume(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: LogFormat::Compact,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theatre: TheatreConfig::default(),
            payments: default_payments(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MOVIE_VOLUME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn movie_volume(&self) -> i32 {
        self.theatre.movie_volume
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_range("theatre.movie_volume", self.theatre.movie_volume, MIN_VOLUME, MAX_VOLUME)?;

        validate_non_empty("payments", &self.payments)?;
        for (index, step) in self.payments.iter().enumerate() {
            validate_positive_amount(&format!("payments[{}].amount", index), step.amount)?;
        }

        // EnvFilter 會默默丟掉無效的指令，所以在這裡擋下
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }
}
