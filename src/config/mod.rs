mod error;

pub use error::E;
use std::{path::PathBuf, thread};

/// The smallest read buffer accepted by the pipeline.
pub const MIN_BUFFER: usize = 128;

/// Read buffer size used when the caller doesn't pick one.
pub const DEFAULT_BUFFER: usize = 8192;

/// Immutable snapshot of run parameters. Created once before the pipeline
/// starts and shared by reference across all components; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads; at least 1.
    pub threads: usize,
    /// Read buffer size in bytes; at least `MIN_BUFFER`.
    pub buffer: usize,
    /// Descend into subdirectories of the input path.
    pub recursive: bool,
    /// Echo every result line to the console.
    pub verbose: bool,
    /// File or directory to process.
    pub input: PathBuf,
    /// Destination for result lines; `None` means console-only.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Validates and freezes the run parameters.
    ///
    /// # Errors
    ///
    /// - `E::InvalidThreads` if `threads` is zero.
    /// - `E::BufferTooSmall` if `buffer` is below `MIN_BUFFER`.
    ///
    /// An empty `output` path is normalized to `None` (console-only run).
    pub fn new(
        input: PathBuf,
        threads: usize,
        buffer: usize,
        recursive: bool,
        verbose: bool,
        output: Option<PathBuf>,
    ) -> Result<Self, E> {
        if threads < 1 {
            return Err(E::InvalidThreads(threads));
        }
        if buffer < MIN_BUFFER {
            return Err(E::BufferTooSmall(buffer, MIN_BUFFER));
        }
        Ok(Self {
            threads,
            buffer,
            recursive,
            verbose,
            input,
            output: output.filter(|path| !path.as_os_str().is_empty()),
        })
    }

    /// Worker count used when the caller doesn't pick one.
    pub fn default_threads() -> usize {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }
}
