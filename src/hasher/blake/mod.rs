mod error;

use super::Hasher;
use blake3::{Hash, Hasher as BlakeHasher};
pub use error::E;

/// Hasher based on the `blake3` crate; an alternative to `Md5` for callers
/// that don't need the historical output format.
pub struct Blake {
    hasher: BlakeHasher,
    hash: Option<Hash>,
}

impl Default for Blake {
    fn default() -> Self {
        Self::new()
    }
}

impl Blake {
    pub fn new() -> Self {
        Blake {
            hasher: BlakeHasher::new(),
            hash: None,
        }
    }
}

impl Hasher for Blake {
    type Error = E;

    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        self.hasher.update(data);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), E> {
        self.hash = Some(self.hasher.finalize());
        Ok(())
    }

    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?.as_bytes())
    }
}
