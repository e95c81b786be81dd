use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Cannot create output file {0}: {1}")]
    CreateOutput(PathBuf, io::Error),
}
