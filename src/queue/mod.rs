use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::{Condvar, Mutex},
};

/// What a worker receives from `pop()`.
#[derive(Debug)]
pub enum Next {
    /// A file path to be hashed. Once popped, the path belongs to exactly
    /// one worker.
    Task(PathBuf),
    /// The queue is closed and drained; no further tasks will arrive.
    Shutdown,
}

#[derive(Debug, Default)]
struct Backlog {
    tasks: VecDeque<PathBuf>,
    closed: bool,
}

/// Unbounded FIFO of pending files with a distinct closed state.
///
/// `push()` wakes one waiting consumer; `close()` wakes them all, so every
/// idle worker observes termination even when no tasks remain. The backlog
/// has no capacity limit: the collector never blocks on `push()`. That is a
/// deliberate simplicity trade-off, not a backpressure mechanism.
#[derive(Debug, Default)]
pub struct TaskQueue {
    backlog: Mutex<Backlog>,
    waker: Condvar,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task to the backlog and wakes one waiting consumer.
    pub fn push(&self, path: PathBuf) {
        let mut backlog = self.backlog.lock().expect("task queue lock poisoned");
        backlog.tasks.push_back(path);
        drop(backlog);
        self.waker.notify_one();
    }

    /// Blocks until a task is available or the queue has been closed with
    /// an empty backlog. Remaining tasks are drained before `Shutdown` is
    /// observed; `pop()` never blocks past close.
    pub fn pop(&self) -> Next {
        let mut backlog = self.backlog.lock().expect("task queue lock poisoned");
        loop {
            if let Some(path) = backlog.tasks.pop_front() {
                return Next::Task(path);
            }
            if backlog.closed {
                return Next::Shutdown;
            }
            backlog = self
                .waker
                .wait(backlog)
                .expect("task queue lock poisoned");
        }
    }

    /// Closes the queue and wakes every waiting consumer.
    pub fn close(&self) {
        let mut backlog = self.backlog.lock().expect("task queue lock poisoned");
        backlog.closed = true;
        drop(backlog);
        self.waker.notify_all();
    }

    pub fn len(&self) -> usize {
        self.backlog
            .lock()
            .expect("task queue lock poisoned")
            .tasks
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.backlog
            .lock()
            .expect("task queue lock poisoned")
            .closed
    }
}
