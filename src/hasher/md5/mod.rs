mod error;

use super::Hasher;
pub use error::E;
use md5::{Digest, Md5 as Origin};

/// Hasher based on the `md-5` crate; the pipeline default and the digest
/// behind the `MD5.txt` output format.
pub struct Md5 {
    hasher: Option<Origin>,
    hash: Option<Vec<u8>>,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    pub fn new() -> Self {
        Md5 {
            hasher: Some(Origin::new()),
            hash: None,
        }
    }
}

impl Hasher for Md5 {
    type Error = E;

    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        if let Some(h) = self.hasher.as_mut() {
            h.update(data)
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), E> {
        let Some(hasher) = self.hasher.take() else {
            return Err(E::AlreadyFinished);
        };
        self.hash = Some(hasher.finalize().to_vec());
        Ok(())
    }

    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?)
    }
}
