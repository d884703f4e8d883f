// Adapters layer: simulated devices, payment strategies and notice observers.

pub mod devices;
pub mod observers;
pub mod payments;
