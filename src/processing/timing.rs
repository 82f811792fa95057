// Scoped execution timer.
//
// Logs how long a block took when the guard is dropped, so the duration is
// reported on every exit path, including early returns through `?`.

use tokio::time::Instant;
use tracing::info;

pub struct ExecutionTimer<'a> {
    label: &'static str,
    url: &'a str,
    started: Instant,
}

impl<'a> ExecutionTimer<'a> {
    pub fn start(label: &'static str, url: &'a str) -> Self {
        Self {
            label,
            url,
            started: Instant::now(),
        }
    }
}

impl Drop for ExecutionTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        info!(
            url = self.url,
            elapsed_ms = elapsed.as_millis() as u64,
            "{} finished",
            self.label
        );
    }
}
