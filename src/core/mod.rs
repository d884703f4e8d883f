pub mod facade;
pub mod payment;

pub use crate::domain::model::{Component, Notice, PaymentMethod, Severity};
pub use crate::domain::ports::{
    AudioDevice, Observer, PaymentStrategy, PlaybackDevice, ProjectionDevice,
};
pub use crate::utils::error::Result;
