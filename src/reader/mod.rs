pub mod buffering;

use crate::pool;
use std::{error, io::Read, path::Path};

/// Capability used by workers to get a byte stream for a file.
///
/// Each worker opens one reader per task, streams it to the end in
/// buffer-sized chunks and drops it. An open failure is recoverable: the
/// worker logs it and skips the file.
pub trait Reader: Read + Send + Sync {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<pool::E>;

    /// Opens the file at `path` for streaming.
    fn open<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
