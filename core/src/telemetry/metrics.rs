/// Counts what a generator run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricsRecorder {
    written: usize,
    skipped: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_written(&mut self) {
        self.written += 1;
    }

    /// A file that was intentionally not produced (edge-case transforms that
    /// have no defined output).
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn snapshot(&self) -> (usize, usize) {
        (self.written, self.skipped)
    }
}
