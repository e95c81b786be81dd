mod error;
mod worker;

pub use error::E;
pub use worker::Worker;

use crate::{context::Context, hasher::Hasher, output::Sink, reader::Reader};
use log::debug;
use std::sync::Arc;

/// Fixed-size pool of symmetric hashing workers draining the shared task
/// queue. There is no work-stealing and no priority: hand-off is pure FIFO
/// through the queue.
pub struct Pool {
    workers: Vec<Worker>,
}

impl Pool {
    /// Starts `cx.config.threads` workers. Each one keeps running until the
    /// queue reports shutdown with an empty backlog.
    pub fn spawn<H, R>(cx: &Arc<Context>, sink: &Arc<Sink>) -> Self
    where
        H: Hasher + 'static,
        R: Reader + 'static,
        E: From<H::Error> + From<R::Error>,
    {
        let mut workers = Vec::with_capacity(cx.config.threads);
        for id in 0..cx.config.threads {
            workers.push(Worker::run::<H, R>(id as u16, cx.clone(), sink.clone()));
        }
        debug!("Created pool with {} workers for hashing", workers.len());
        Self { workers }
    }

    /// Joins every worker. Call after the queue has been closed; a worker
    /// that has begun hashing a file always finishes it first.
    pub fn wait(&mut self) {
        for worker in self.workers.iter_mut() {
            worker.wait();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::{Config, DEFAULT_BUFFER},
        hasher::md5::Md5,
        reader::buffering::Buffering,
        test::usecase::UseCase,
    };
    use std::{thread, time::Duration};

    #[test]
    fn unreadable_files_are_skipped_but_counted() -> Result<(), crate::E> {
        let usecase = UseCase::gen(0, 2, 0)?;
        let config = Config::new(
            usecase.root.clone(),
            2,
            DEFAULT_BUFFER,
            false,
            false,
            None,
        )?;
        let cx = Arc::new(Context::new(config));
        for file in usecase.files.iter() {
            cx.queue.push(file.clone());
        }
        // A path that vanished between discovery and hashing.
        cx.queue.push(usecase.root.join("missing"));
        cx.tracker.set_total(3);
        let sink = Arc::new(Sink::new(&cx.config)?);
        let mut pool = Pool::spawn::<Md5, Buffering>(&cx, &sink);
        while !cx.tracker.is_complete() {
            thread::sleep(Duration::from_millis(10));
        }
        cx.queue.close();
        pool.wait();
        assert_eq!(cx.tracker.processed(), 2);
        assert_eq!(cx.tracker.failed(), 1);
        usecase.clean()?;
        Ok(())
    }

    #[test]
    fn idle_pool_shuts_down_cleanly() -> Result<(), crate::E> {
        let config = Config::new(
            std::path::PathBuf::from("."),
            4,
            DEFAULT_BUFFER,
            false,
            false,
            None,
        )?;
        let cx = Arc::new(Context::new(config));
        cx.tracker.set_total(0);
        let sink = Arc::new(Sink::new(&cx.config)?);
        let mut pool = Pool::spawn::<Md5, Buffering>(&cx, &sink);
        cx.queue.close();
        pool.wait();
        assert_eq!(cx.tracker.processed(), 0);
        Ok(())
    }
}
