use crate::{
    collector,
    config::Config,
    context::Context,
    error::E,
    hasher::Hasher,
    output::Sink,
    pool::{self, Pool},
    reader::Reader,
};
use log::debug;
use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

/// How often the orchestrator refreshes the progress line while waiting for
/// the pool to drain the queue. Workers also report after each hash; the
/// poll keeps progress visible when individual files are slow.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Final accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files hashed successfully.
    pub processed: usize,
    /// Files skipped on open or read failure.
    pub failed: usize,
    /// Files discovered by the collector.
    pub total: usize,
}

/// Drives one full pipeline run.
///
/// Lifecycle: collect files and finalize the total (fatal if the path is
/// missing or yields no files), build the sink (fatal if the output file
/// cannot be created), start the pool, poll completion, then close the
/// queue so every worker observes the shutdown broadcast, and join them
/// all.
/// The orchestrator is the only component permitted to trigger shutdown.
pub fn run<H, R>(config: Config) -> Result<Summary, E>
where
    H: Hasher + 'static,
    R: Reader + 'static,
    pool::E: From<H::Error> + From<R::Error>,
{
    let now = Instant::now();
    let cx = Arc::new(Context::new(config));
    // Collection first: a bad input path must not touch an existing
    // output file, so the sink (which truncates it) is built afterwards.
    let total = collector::collect(&cx)?;
    let sink = Arc::new(Sink::new(&cx.config)?);
    println!(
        "Processing {total} files with {} threads...",
        cx.config.threads
    );
    let mut pool = Pool::spawn::<H, R>(&cx, &sink);
    while !cx.tracker.is_complete() {
        thread::sleep(POLL_INTERVAL);
        cx.tracker.report();
    }
    cx.tracker.report();
    cx.queue.close();
    pool.wait();
    let summary = Summary {
        processed: cx.tracker.processed(),
        failed: cx.tracker.failed(),
        total: cx.tracker.total(),
    };
    debug!(
        "hashed {} of {} files ({} skipped) in {}µs / {}ms",
        summary.processed,
        summary.total,
        summary.failed,
        now.elapsed().as_micros(),
        now.elapsed().as_millis()
    );
    Ok(summary)
}
