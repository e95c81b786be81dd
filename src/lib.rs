#![doc = include_str!("../README.md")]

pub mod collector;
pub mod config;
pub mod context;
mod error;
pub mod hasher;
pub mod orchestrator;
pub mod output;
pub mod pool;
pub mod progress;
pub mod queue;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;

pub use config::Config;
pub use context::Context;
pub use error::E;
pub use hasher::Hasher;
pub use orchestrator::{run, Summary};
pub use output::Sink;
pub use pool::Pool;
pub use progress::Tracker;
pub use queue::{Next, TaskQueue};
pub use reader::Reader;
