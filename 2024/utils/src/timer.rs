use std::time::{Duration, Instant};

/// Reports how long it lived on stderr when dropped.
///
/// Bind it first thing in `main` so the report covers the whole run, including
/// runs that end by returning an error.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        eprintln!("Time elapsed: {}µs", self.elapsed().as_micros());
    }
}
