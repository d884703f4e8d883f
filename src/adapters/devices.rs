use crate::domain::model::{Component, Notice, VolumeAdjustment, MIN_VOLUME};
use crate::domain::ports::{AudioDevice, Observer, PlaybackDevice, ProjectionDevice};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

pub struct DvdPlayer {
    observer: Arc<dyn Observer>,
    playing: AtomicBool,
}

impl DvdPlayer {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(Component::DvdPlayer, "DVD Player initialized"));
        Self {
            observer,
            playing: AtomicBool::new(false),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }
}

impl PlaybackDevice for DvdPlayer {
    fn play(&self) {
        self.playing.store(true, Ordering::Relaxed);
        self.observer
            .notify(&Notice::announce(Component::DvdPlayer, "DVD Player: Playing movie"));
    }

    fn stop(&self) {
        self.playing.store(false, Ordering::Relaxed);
        self.observer
            .notify(&Notice::announce(Component::DvdPlayer, "DVD Player: Stopped"));
    }
}

pub struct Projector {
    observer: Arc<dyn Observer>,
    powered: AtomicBool,
}

impl Projector {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(Component::Projector, "Projector initialized"));
        Self {
            observer,
            powered: AtomicBool::new(false),
        }
    }

    pub fn is_on(&self) -> bool {
        self.powered.load(Ordering::Relaxed)
    }
}

impl ProjectionDevice for Projector {
    fn turn_on(&self) {
        self.powered.store(true, Ordering::Relaxed);
        self.observer
            .notify(&Notice::announce(Component::Projector, "Turning on the projector"));
    }

    fn turn_off(&self) {
        self.powered.store(false, Ordering::Relaxed);
        self.observer
            .notify(&Notice::announce(Component::Projector, "Turning off the projector"));
    }
}

pub struct SoundSystem {
    observer: Arc<dyn Observer>,
    volume: AtomicI32,
    powered: AtomicBool,
}

impl SoundSystem {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(Component::SoundSystem, "Sound System initialized"));
        Self {
            observer,
            volume: AtomicI32::new(MIN_VOLUME),
            powered: AtomicBool::new(false),
        }
    }

    pub fn volume(&self) -> i32 {
        self.volume.load(Ordering::Relaxed)
    }

    pub fn is_on(&self) -> bool {
        self.powered.load(Ordering::Relaxed)
    }
}

impl AudioDevice for SoundSystem {
    fn set_volume(&self, level: i32) -> i32 {
        let adjustment = VolumeAdjustment::clamp(level);
        if adjustment.was_clamped() {
            self.observer.notify(&Notice::warning(
                Component::SoundSystem,
                format!("Volume level {} is out of range (0-100)", level),
            ));
        }

        self.volume.store(adjustment.effective, Ordering::Relaxed);
        self.powered.store(true, Ordering::Relaxed);
        self.observer.notify(&Notice::announce(
            Component::SoundSystem,
            format!("Sound System: Volume set to {}", adjustment.effective),
        ));
        adjustment.effective
    }

    fn turn_off(&self) {
        self.powered.store(false, Ordering::Relaxed);
        self.observer
            .notify(&Notice::announce(Component::SoundSystem, "Turning off the sound system"));
    }
}
