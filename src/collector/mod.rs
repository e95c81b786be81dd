mod error;

pub use error::E;

use crate::context::Context;
use log::{debug, warn};
use std::{fs, path::Path, time::Instant};

/// Walks the configured input path and feeds every discovered regular file
/// into the task queue.
///
/// Classification of the input:
/// - a single file gives one task;
/// - a directory, non-recursive, gives one task per direct regular-file
///   child (symlinks and subdirectories are skipped);
/// - a directory, recursive, gives one task per regular file in the full
///   subtree (symlinks skipped at every level).
///
/// The expected total is finalized exactly once, before any worker is
/// started. Unreadable directory entries are logged and skipped.
///
/// # Errors
///
/// - `E::PathNotFound` if the input path does not exist; fatal to the run.
/// - `E::NoFilesFound` if the walk yields zero files; fatal, reported
///   before the pool starts.
pub fn collect(cx: &Context) -> Result<usize, E> {
    let now = Instant::now();
    let input = cx.config.input.as_path();
    if !input.exists() {
        return Err(E::PathNotFound(input.to_path_buf()));
    }
    let mut count = 0;
    if input.is_file() {
        cx.queue.push(input.to_path_buf());
        count += 1;
    } else if input.is_dir() {
        scan(input, cx, cx.config.recursive, &mut count);
    }
    cx.tracker.set_total(count);
    if count == 0 {
        return Err(E::NoFilesFound(input.to_path_buf()));
    }
    debug!(
        "collected {count} files in {}µs / {}ms; source: {}",
        now.elapsed().as_micros(),
        now.elapsed().as_millis(),
        input.display()
    );
    Ok(count)
}

fn scan(dir: &Path, cx: &Context, recursive: bool, count: &mut usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("entry: {}; error: {err}", dir.display());
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("entry: {}; error: {err}", dir.display());
                continue;
            }
        };
        // file_type() doesn't follow symlinks; links are skipped entirely.
        let kind = match entry.file_type() {
            Ok(kind) => kind,
            Err(err) => {
                warn!("entry: {}; error: {err}", entry.path().display());
                continue;
            }
        };
        if kind.is_file() {
            cx.queue.push(entry.path());
            *count += 1;
        } else if kind.is_dir() && recursive {
            scan(&entry.path(), cx, recursive, count);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::{Config, DEFAULT_BUFFER},
        queue::Next,
        test::usecase::{tmp_path, UseCase},
    };
    use std::path::PathBuf;

    fn context(input: PathBuf, recursive: bool) -> Context {
        Context::new(
            Config::new(input, 1, DEFAULT_BUFFER, recursive, false, None)
                .expect("valid test config"),
        )
    }

    #[test]
    fn single_file_yields_one_task() -> Result<(), crate::E> {
        let usecase = UseCase::gen(0, 1, 0)?;
        let file = usecase.files[0].clone();
        let cx = context(file.clone(), false);
        assert_eq!(collect(&cx)?, 1);
        assert_eq!(cx.tracker.total(), 1);
        assert!(matches!(cx.queue.pop(), Next::Task(path) if path == file));
        usecase.clean()?;
        Ok(())
    }

    #[test]
    fn flat_scan_skips_subfolders() -> Result<(), crate::E> {
        let usecase = UseCase::gen(2, 3, 1)?;
        let cx = context(usecase.root.clone(), false);
        // Only the 3 files directly under the root; 6 more live in subfolders.
        assert_eq!(collect(&cx)?, 3);
        assert_eq!(cx.queue.len(), 3);
        usecase.clean()?;
        Ok(())
    }

    #[test]
    fn recursive_scan_collects_subtree() -> Result<(), crate::E> {
        let usecase = UseCase::gen(2, 3, 2)?;
        let cx = context(usecase.root.clone(), true);
        assert_eq!(collect(&cx)?, usecase.files.len());
        let mut collected = Vec::new();
        for _ in 0..usecase.files.len() {
            match cx.queue.pop() {
                Next::Task(path) => collected.push(path),
                Next::Shutdown => panic!("queue closed unexpectedly"),
            }
        }
        let mut expected = usecase.files.clone();
        collected.sort();
        expected.sort();
        assert_eq!(collected, expected);
        usecase.clean()?;
        Ok(())
    }

    #[test]
    fn missing_path_is_fatal() {
        let cx = context(tmp_path(), false);
        assert!(matches!(collect(&cx), Err(E::PathNotFound(..))));
    }

    #[test]
    fn empty_dir_yields_no_files() -> Result<(), crate::E> {
        let root = tmp_path();
        fs::create_dir(&root)?;
        let cx = context(root.clone(), true);
        assert!(matches!(collect(&cx), Err(E::NoFilesFound(..))));
        assert_eq!(cx.tracker.total(), 0);
        fs::remove_dir(&root)?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped() -> Result<(), crate::E> {
        let usecase = UseCase::gen(0, 2, 0)?;
        std::os::unix::fs::symlink(&usecase.files[0], usecase.root.join("link"))?;
        let cx = context(usecase.root.clone(), true);
        assert_eq!(collect(&cx)?, 2);
        usecase.clean()?;
        Ok(())
    }
}
