use crate::core::{Observer, PaymentStrategy};
use crate::domain::model::{Component, Notice};
use crate::utils::error::{DemoError, Result};
use std::sync::Arc;

/// Holds the active payment strategy and forwards payments to it.
pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
    observer: Arc<dyn Observer>,
}

impl PaymentContext {
    pub fn new(strategy: Box<dyn PaymentStrategy>, observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(
            Component::PaymentContext,
            format!("Payment context initialized with {}", strategy.name()),
        ));
        Self { strategy, observer }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        let old = std::mem::replace(&mut self.strategy, strategy);
        self.observer.notify(&Notice::info(
            Component::PaymentContext,
            format!(
                "Payment strategy changed from {} to {}",
                old.name(),
                self.strategy.name()
            ),
        ));
    }

    pub fn make_payment(&self, amount: f64) -> Result<()> {
        // NaN 也會落在這裡
        if !(amount > 0.0) {
            self.observer.notify(&Notice::warning(
                Component::PaymentContext,
                format!("Invalid payment amount: {}", amount),
            ));
            return Err(DemoError::InvalidAmount { amount });
        }

        self.observer.notify(&Notice::info(
            Component::PaymentContext,
            format!(
                "Making payment of ${} using {}",
                amount,
                self.strategy.name()
            ),
        ));
        self.strategy.pay(amount);
        Ok(())
    }
}
