use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Reader error: {0}")]
    Reader(String),
    #[error("Hasher error: {0}")]
    Hasher(String),
    #[error("Reading IO error: {0}")]
    Read(io::Error),
}
