mod error;

pub use error::E;

use crate::config::Config;
use log::error;
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

/// Serializes `"<digest>  <path>"` result lines to the configured
/// destinations.
///
/// The output file and the console are guarded by independent locks; there
/// is no defined ordering between the two destinations, only within each.
/// The file handle is created (truncating any previous content) when the
/// sink is built and kept open for the whole run.
pub struct Sink {
    file: Option<Mutex<File>>,
    verbose: bool,
}

impl Sink {
    /// Creates or truncates the output file if one is configured. Failure
    /// here is fatal to the run; no work has started yet.
    pub fn new(config: &Config) -> Result<Self, E> {
        let file = if let Some(path) = config.output.as_deref() {
            let file = File::create(path)
                .map_err(|err| E::CreateOutput(path.to_path_buf(), err))?;
            Some(Mutex::new(file))
        } else {
            None
        };
        Ok(Self {
            file,
            verbose: config.verbose,
        })
    }

    /// Appends one result line to the destinations. An append failure is
    /// logged and the line is dropped; the run continues.
    pub fn write(&self, path: &Path, digest: &str) {
        let line = format!("{digest}  {}\n", path.display());
        if self.verbose {
            let mut out = io::stdout().lock();
            let _ = out.write_all(line.as_bytes());
        }
        if let Some(file) = self.file.as_ref() {
            let mut file = file.lock().expect("output lock poisoned");
            if let Err(err) = file.write_all(line.as_bytes()) {
                error!("Fail to write to output file: {err}");
            }
        }
    }
}
