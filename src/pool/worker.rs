use super::E;

use crate::{
    context::Context,
    hasher::{self, Hasher},
    output::Sink,
    queue::Next,
    reader::Reader,
};
use log::{debug, error};
use std::{
    path::Path,
    sync::Arc,
    thread::{self, JoinHandle},
};

/// One thread executing the dequeue-hash-report loop. Workers are symmetric
/// and keep no state between tasks.
///
/// Error handling: every per-file failure is converted to a log line inside
/// the loop and recorded in the `failed` counter; nothing propagates across
/// the thread boundary, and no result is produced for a skipped file.
pub struct Worker {
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn run<H, R>(id: u16, cx: Arc<Context>, sink: Arc<Sink>) -> Self
    where
        H: Hasher + 'static,
        R: Reader + 'static,
        E: From<H::Error> + From<R::Error>,
    {
        let handle = thread::spawn(move || {
            let mut buffer = vec![0u8; cx.config.buffer];
            loop {
                let path = match cx.queue.pop() {
                    Next::Task(path) => path,
                    Next::Shutdown => break,
                };
                match hash_file::<H, R>(&path, &mut buffer) {
                    Ok(digest) => {
                        cx.tracker.inc_processed();
                        cx.tracker.report();
                        sink.write(&path, &digest);
                    }
                    Err(err) => {
                        // error! stays visible under the default filter, so
                        // skipped files are noticed without RUST_LOG.
                        error!("entry: {}; error: {err}", path.display());
                        cx.tracker.inc_failed();
                    }
                }
            }
            debug!("Hasher worker #{id} has been shutdown");
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Streams the file through the hasher in buffer-sized chunks and renders
/// the digest as lowercase hex.
fn hash_file<H, R>(path: &Path, buffer: &mut [u8]) -> Result<String, E>
where
    H: Hasher,
    R: Reader,
    E: From<H::Error> + From<R::Error>,
{
    let mut reader = R::open(path)?;
    let mut hasher = H::new();
    loop {
        let bytes = reader.read(buffer).map_err(E::Read)?;
        if bytes == 0 {
            break;
        }
        hasher.absorb(&buffer[..bytes])?;
    }
    hasher.finish()?;
    Ok(hasher::hex(hasher.hash()?))
}
