use crate::pool;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to open {0}: {1}")]
    Open(PathBuf, io::Error),
}

impl From<E> for pool::E {
    fn from(val: E) -> Self {
        pool::E::Reader(val.to_string())
    }
}
