use crate::domain::model::{Notice, Severity};
use crate::domain::ports::Observer;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Forwards notices to `tracing` as structured events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Info => tracing::info!(component = %notice.component, "{}", notice.message),
            Severity::Warning => {
                tracing::warn!(component = %notice.component, "{}", notice.message)
            }
        }
    }
}

/// Writes announcement lines for humans; everything else is left to the log.
pub struct ConsoleObserver {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleObserver {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl Observer for ConsoleObserver {
    fn notify(&self, notice: &Notice) {
        if !notice.announce {
            return;
        }
        let mut out = lock(&self.out);
        if let Err(e) = writeln!(out, "{}", notice.message) {
            tracing::debug!("Console write failed: {}", e);
        }
    }
}

#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn Observer>>,
}

impl FanoutObserver {
    pub fn new(observers: Vec<Arc<dyn Observer>>) -> Self {
        Self { observers }
    }

    pub fn with(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl Observer for FanoutObserver {
    fn notify(&self, notice: &Notice) {
        for observer in &self.observers {
            observer.notify(notice);
        }
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryObserver {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.notices)
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn announcements(&self) -> Vec<String> {
        lock(&self.notices)
            .iter()
            .filter(|n| n.announce)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        lock(&self.notices)
            .iter()
            .filter(|n| n.severity == Severity::Warning)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        lock(&self.notices).clear();
    }
}

impl Observer for MemoryObserver {
    fn notify(&self, notice: &Notice) {
        lock(&self.notices).push(notice.clone());
    }
}
