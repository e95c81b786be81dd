mod error;

use super::Reader;
pub use error::E;
use std::{fs::File, io::Read, path::Path};

/// File-backed reader; chunking is driven by the caller's buffer size.
pub struct Buffering {
    file: File,
}

impl Reader for Buffering {
    type Error = E;

    fn open<P: AsRef<Path>>(path: P) -> Result<Self, E> {
        let file = File::open(path.as_ref())
            .map_err(|err| E::Open(path.as_ref().to_path_buf(), err))?;
        Ok(Self { file })
    }
}

impl Read for Buffering {
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buffer)
    }
}
