pub mod blake;
pub mod md5;

use crate::pool;
use std::{error, fmt::Write};

/// A trait that defines the behavior of a digest capability: streaming,
/// order-sensitive, side-effect-free beyond its own state.
///
/// A worker uses one fresh instance per file:
/// - create it with `new()`;
/// - feed the file's content chunk by chunk with `absorb(..)`;
/// - finalize the calculation with `finish()`;
/// - request the digest bytes with `hash()`;
/// - drop the instance.
pub trait Hasher: Send + Sync {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<pool::E>;

    fn new() -> Self
    where
        Self: Sized;

    /// Absorbs data into the hasher. Might be called multiple times during
    /// the reading of a file.
    fn absorb(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Finalizes the digest. Called once per file, after all data has been
    /// absorbed.
    fn finish(&mut self) -> Result<(), Self::Error>;

    /// Returns the computed digest bytes; fails if `finish()` hasn't been
    /// called yet.
    fn hash(&self) -> Result<&[u8], Self::Error>;
}

/// Renders a digest as lowercase hex.
pub fn hex(digest: &[u8]) -> String {
    digest.iter().fold(
        String::with_capacity(digest.len() * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}
