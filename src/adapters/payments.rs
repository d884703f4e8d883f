use crate::domain::model::{Component, Notice, PaymentMethod};
use crate::domain::ports::{Observer, PaymentStrategy};
use std::sync::Arc;

fn emit_payment(observer: &dyn Observer, description: &str, method: PaymentMethod, amount: f64) {
    observer.notify(&Notice::info(
        Component::PaymentStrategy,
        format!("Processing {} payment for ${}", description, amount),
    ));
    observer.notify(&Notice::announce(
        Component::PaymentStrategy,
        format!("Paying {} with {}", amount, method),
    ));
}

pub struct CreditCardPayment {
    observer: Arc<dyn Observer>,
}

impl CreditCardPayment {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(
            Component::PaymentStrategy,
            "Credit Card payment strategy initialized",
        ));
        Self { observer }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &str {
        "CreditCardPayment"
    }

    fn pay(&self, amount: f64) {
        emit_payment(self.observer.as_ref(), "credit card", PaymentMethod::CreditCard, amount);
    }
}

pub struct PayPalPayment {
    observer: Arc<dyn Observer>,
}

impl PayPalPayment {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(
            Component::PaymentStrategy,
            "PayPal payment strategy initialized",
        ));
        Self { observer }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &str {
        "PayPalPayment"
    }

    fn pay(&self, amount: f64) {
        emit_payment(self.observer.as_ref(), "PayPal", PaymentMethod::PayPal, amount);
    }
}

pub struct CryptoPayment {
    observer: Arc<dyn Observer>,
}

impl CryptoPayment {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(
            Component::PaymentStrategy,
            "Cryptocurrency payment strategy initialized",
        ));
        Self { observer }
    }
}

impl PaymentStrategy for CryptoPayment {
    fn name(&self) -> &str {
        "CryptoPayment"
    }

    fn pay(&self, amount: f64) {
        emit_payment(self.observer.as_ref(), "cryptocurrency", PaymentMethod::Crypto, amount);
    }
}

pub fn strategy_for(method: PaymentMethod, observer: Arc<dyn Observer>) -> Box<dyn PaymentStrategy> {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardPayment::new(observer)),
        PaymentMethod::PayPal => Box::new(PayPalPayment::new(observer)),
        PaymentMethod::Crypto => Box::new(CryptoPayment::new(observer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::observers::MemoryObserver;

    #[test]
    fn test_each_strategy_has_distinct_confirmation() {
        let observer = Arc::new(MemoryObserver::new());

        CreditCardPayment::new(observer.clone()).pay(20.0);
        PayPalPayment::new(observer.clone()).pay(40.0);
        CryptoPayment::new(observer.clone()).pay(100.0);

        assert_eq!(
            observer.announcements(),
            vec![
                "Paying 20 with Credit Card",
                "Paying 40 with PayPal",
                "Paying 100 with Cryptocurrency",
            ]
        );
    }

    #[test]
    fn test_payment_log_record_keeps_fractional_amount() {
        let observer = Arc::new(MemoryObserver::new());
        let card = CreditCardPayment::new(observer.clone());
        observer.clear();

        card.pay(12.5);

        assert_eq!(
            observer.messages(),
            vec![
                "Processing credit card payment for $12.5",
                "Paying 12.5 with Credit Card",
            ]
        );
    }

    #[test]
    fn test_strategy_for_builds_matching_variant() {
        let observer: Arc<dyn Observer> = Arc::new(MemoryObserver::new());

        assert_eq!(strategy_for(PaymentMethod::CreditCard, observer.clone()).name(), "CreditCardPayment");
        assert_eq!(strategy_for(PaymentMethod::PayPal, observer.clone()).name(), "PayPalPayment");
        assert_eq!(strategy_for(PaymentMethod::Crypto, observer).name(), "CryptoPayment");
    }
}
