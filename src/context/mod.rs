use crate::{config::Config, progress::Tracker, queue::TaskQueue};

/// Shared state for one pipeline run: the immutable configuration, the task
/// queue and the progress counters. Constructed once by the orchestrator and
/// passed by `Arc` into the collector and the worker pool; its lifetime is
/// scoped to a single run.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub queue: TaskQueue,
    pub tracker: Tracker,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            queue: TaskQueue::new(),
            tracker: Tracker::new(),
        }
    }
}
