use crate::domain::model::Notice;
use std::sync::Arc;

/// Sink for the notices every component emits.
pub trait Observer: Send + Sync {
    fn notify(&self, notice: &Notice);
}

pub trait PlaybackDevice: Send + Sync {
    fn play(&self);
    fn stop(&self);
}

pub trait ProjectionDevice: Send + Sync {
    fn turn_on(&self);
    fn turn_off(&self);
}

pub trait AudioDevice: Send + Sync {
    /// Returns the effective volume after clamping.
    fn set_volume(&self, level: i32) -> i32;
    fn turn_off(&self);
}

pub trait PaymentStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn pay(&self, amount: f64);
}

// 讓呼叫端與 facade 共享同一個元件
impl<T: PlaybackDevice + ?Sized> PlaybackDevice for Arc<T> {
    fn play(&self) {
        (**self).play()
    }

    fn stop(&self) {
        (**self).stop()
    }
}

impl<T: ProjectionDevice + ?Sized> ProjectionDevice for Arc<T> {
    fn turn_on(&self) {
        (**self).turn_on()
    }

    fn turn_off(&self) {
        (**self).turn_off()
    }
}

impl<T: AudioDevice + ?Sized> AudioDevice for Arc<T> {
    fn set_volume(&self, level: i32) -> i32 {
        (**self).set_volume(level)
    }

    fn turn_off(&self) {
        (**self).turn_off()
    }
}
