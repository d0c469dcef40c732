use std::time::Instant;

/// Logs the wall-clock time between its creation and the moment it is dropped.
#[must_use = "the timer reports when it is dropped"]
pub struct Timer {
    message: String,
    start: Instant,
}

impl Timer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!("{}{:.2} ms", self.message, self.elapsed_ms());
    }
}
