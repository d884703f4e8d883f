use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_VOLUME: i32 = 0;
pub const MAX_VOLUME: i32 = 100;
pub const DEFAULT_MOVIE_VOLUME: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    DvdPlayer,
    Projector,
    SoundSystem,
    Facade,
    PaymentStrategy,
    PaymentContext,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::DvdPlayer => "dvd_player",
            Component::Projector => "projector",
            Component::SoundSystem => "sound_system",
            Component::Facade => "facade",
            Component::PaymentStrategy => "payment_strategy",
            Component::PaymentContext => "payment_context",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A record emitted by a component whenever it does something observable.
///
/// `announce` marks the human-readable console line; notices without it only
/// go to the structured log.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub component: Component,
    pub severity: Severity,
    pub message: String,
    pub announce: bool,
}

impl Notice {
    pub fn announce(component: Component, message: impl Into<String>) -> Self {
        Self {
            component,
            severity: Severity::Info,
            message: message.into(),
            announce: true,
        }
    }

    pub fn info(component: Component, message: impl Into<String>) -> Self {
        Self {
            component,
            severity: Severity::Info,
            message: message.into(),
            announce: false,
        }
    }

    pub fn warning(component: Component, message: impl Into<String>) -> Self {
        Self {
            component,
            severity: Severity::Warning,
            message: message.into(),
            announce: false,
        }
    }
}

/// Outcome of normalising a requested volume into `[MIN_VOLUME, MAX_VOLUME]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeAdjustment {
    pub requested: i32,
    pub effective: i32,
}

impl VolumeAdjustment {
    pub fn clamp(requested: i32) -> Self {
        Self {
            requested,
            effective: requested.clamp(MIN_VOLUME, MAX_VOLUME),
        }
    }

    pub fn was_clamped(&self) -> bool {
        self.requested != self.effective
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    Crypto,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Crypto => "Cryptocurrency",
        };
        f.write_str(label)
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "credit_card" | "creditcard" | "card" => Ok(PaymentMethod::CreditCard),
            "paypal" | "pay_pal" => Ok(PaymentMethod::PayPal),
            "crypto" | "cryptocurrency" => Ok(PaymentMethod::Crypto),
            other => Err(format!(
                "Unknown payment method '{}'. Valid methods: credit_card, paypal, crypto",
                other
            )),
        }
    }
}
