use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Thread count must be at least 1; got {0}")]
    InvalidThreads(usize),
    #[error("Buffer size must be at least {1} bytes; got {0}")]
    BufferTooSmall(usize, usize),
}
