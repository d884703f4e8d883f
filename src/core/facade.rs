use crate::core::{AudioDevice, Observer, PlaybackDevice, ProjectionDevice};
use crate::domain::model::{Component, Notice, DEFAULT_MOVIE_VOLUME};
use std::sync::Arc;

/// Single entry point over the home theatre devices.
///
/// `watch_movie` and `end_movie` drive the devices in a fixed order; callers
/// never have to know which device comes first.
pub struct HomeTheatreFacade<D: PlaybackDevice, P: ProjectionDevice, S: AudioDevice> {
    dvd: D,
    projector: P,
    sound: S,
    movie_volume: i32,
    observer: Arc<dyn Observer>,
}

impl<D: PlaybackDevice, P: ProjectionDevice, S: AudioDevice> HomeTheatreFacade<D, P, S> {
    pub fn new(dvd: D, projector: P, sound: S, observer: Arc<dyn Observer>) -> Self {
        observer.notify(&Notice::info(Component::Facade, "Home Theater Facade initialized"));
        Self {
            dvd,
            projector,
            sound,
            movie_volume: DEFAULT_MOVIE_VOLUME,
            observer,
        }
    }

    /// Changes the volume used by [`watch_movie`](Self::watch_movie).
    /// The sound system still clamps whatever it receives.
    pub fn with_movie_volume(mut self, volume: i32) -> Self {
        self.movie_volume = volume;
        self
    }

    pub fn movie_volume(&self) -> i32 {
        self.movie_volume
    }

    pub fn watch_movie(&self) {
        self.watch_movie_at(self.movie_volume);
    }

    pub fn watch_movie_at(&self, volume: i32) {
        self.observer
            .notify(&Notice::announce(Component::Facade, "Facade: Setting up movie..."));

        self.projector.turn_on();
        let effective = self.sound.set_volume(volume);
        self.dvd.play();

        tracing::debug!(requested = volume, effective, "Movie volume applied");
        self.observer
            .notify(&Notice::info(Component::Facade, "Movie setup completed"));
    }

    pub fn end_movie(&self) {
        self.observer
            .notify(&Notice::announce(Component::Facade, "Facade: Shutting down..."));

        self.dvd.stop();
        self.projector.turn_off();
        self.sound.turn_off();

        self.observer
            .notify(&Notice::info(Component::Facade, "Home theater shutdown completed"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::observers::MemoryObserver;
    use std::sync::Mutex;

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct RecordingDvd(CallLog);
    struct RecordingProjector(CallLog);
    struct RecordingSound(CallLog);

    impl PlaybackDevice for RecordingDvd {
        fn play(&self) {
            self.0.lock().unwrap().push("dvd-play".to_string());
        }

        fn stop(&self) {
            self.0.lock().unwrap().push("dvd-stop".to_string());
        }
    }

    impl ProjectionDevice for RecordingProjector {
        fn turn_on(&self) {
            self.0.lock().unwrap().push("projector-on".to_string());
        }

        fn turn_off(&self) {
            self.0.lock().unwrap().push("projector-off".to_string());
        }
    }

    impl AudioDevice for RecordingSound {
        fn set_volume(&self, level: i32) -> i32 {
            self.0.lock().unwrap().push(format!("volume-set({})", level));
            level
        }

        fn turn_off(&self) {
            self.0.lock().unwrap().push("sound-off".to_string());
        }
    }

    fn recording_facade(
        log: &CallLog,
    ) -> HomeTheatreFacade<RecordingDvd, RecordingProjector, RecordingSound> {
        HomeTheatreFacade::new(
            RecordingDvd(log.clone()),
            RecordingProjector(log.clone()),
            RecordingSound(log.clone()),
            Arc::new(MemoryObserver::new()),
        )
    }

    #[test]
    fn test_watch_movie_order() {
        let log = CallLog::default();
        let facade = recording_facade(&log);

        facade.watch_movie();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["projector-on", "volume-set(30)", "dvd-play"]
        );
    }

    #[test]
    fn test_end_movie_order() {
        let log = CallLog::default();
        let facade = recording_facade(&log);

        facade.end_movie();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["dvd-stop", "projector-off", "sound-off"]
        );
    }

    #[test]
    fn test_movie_volume_configuration_and_override() {
        let log = CallLog::default();
        let facade = recording_facade(&log).with_movie_volume(45);
        assert_eq!(facade.movie_volume(), 45);

        facade.watch_movie();
        facade.watch_movie_at(10);

        let calls = log.lock().unwrap().clone();
        assert_eq!(calls[1], "volume-set(45)");
        assert_eq!(calls[4], "volume-set(10)");
        // per-call override leaves the configured default alone
        assert_eq!(facade.movie_volume(), 45);
    }

    #[test]
    fn test_facade_notices() {
        let log = CallLog::default();
        let observer = Arc::new(MemoryObserver::new());
        let facade = HomeTheatreFacade::new(
            RecordingDvd(log.clone()),
            RecordingProjector(log.clone()),
            RecordingSound(log),
            observer.clone(),
        );

        facade.watch_movie();
        facade.end_movie();

        assert_eq!(
            observer.messages(),
            vec![
                "Home Theater Facade initialized",
                "Facade: Setting up movie...",
                "Movie setup completed",
                "Facade: Shutting down...",
                "Home theater shutdown completed",
            ]
        );
        assert_eq!(
            observer.announcements(),
            vec!["Facade: Setting up movie...", "Facade: Shutting down..."]
        );
    }
}
