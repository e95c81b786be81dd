use crate::{collector, config, output};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("{0}")]
    Config(config::E),
    #[error("{0}")]
    Collector(collector::E),
    #[error("{0}")]
    Output(output::E),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
}

impl From<config::E> for E {
    fn from(err: config::E) -> Self {
        E::Config(err)
    }
}

impl From<collector::E> for E {
    fn from(err: collector::E) -> Self {
        E::Collector(err)
    }
}

impl From<output::E> for E {
    fn from(err: output::E) -> Self {
        E::Output(err)
    }
}
