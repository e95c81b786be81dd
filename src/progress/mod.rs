use std::{
    io::{self, Write},
    sync::atomic::{AtomicUsize, Ordering},
};

/// Process-wide counters for one run.
///
/// `total` is written once by the collector before any worker relies on it;
/// `processed` counts successful hashes only and never exceeds `total`;
/// `failed` counts files skipped on open or read failure. Completion is
/// `processed + failed == total`, so a run with unreadable files still
/// terminates. All counters are sequentially consistent; progress reporting
/// is best-effort and may show stale percentages between completions.
#[derive(Debug, Default)]
pub struct Tracker {
    processed: AtomicUsize,
    failed: AtomicUsize,
    total: AtomicUsize,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalizes the expected file count. Called exactly once by the
    /// collector, before the pool starts.
    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn inc_processed(&self) {
        self.processed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_complete(&self) -> bool {
        self.processed() + self.failed() == self.total()
    }

    /// Share of successfully hashed files, in percent; 0 when no total has
    /// been finalized yet.
    pub fn percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.processed() as f64 * 100.0 / total as f64
        }
    }

    /// Emits a single overwriting status line to the console.
    pub fn report(&self) {
        let mut out = io::stdout().lock();
        let _ = write!(
            out,
            "\rProgress: {}/{} ({:.1}%)",
            self.processed(),
            self.total(),
            self.percent()
        );
        let _ = out.flush();
    }
}
