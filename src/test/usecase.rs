use log::debug;
use rand::Rng;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// A fresh path in the system temp dir that doesn't exist yet. Used both
/// for scratch files and for probing missing-path behavior.
pub fn tmp_path() -> PathBuf {
    temp_dir().join(Uuid::new_v4().to_string())
}

/// Temporary directory tree populated with random files.
pub struct UseCase {
    pub files: Vec<PathBuf>,
    pub root: PathBuf,
}

impl UseCase {
    /// Creates a fresh root in the system temp dir holding `files` files,
    /// then `deep` levels of nesting with `folders` subfolders per level,
    /// each again holding `files` files.
    pub fn gen(folders: u16, files: u16, deep: u8) -> Result<Self, io::Error> {
        let root = tmp_path();
        create_dir(&root)?;
        let mut all = Vec::new();
        fill(&root, files, &mut all)?;
        let mut parents = vec![root.clone()];
        for _ in 0..deep {
            let mut next = Vec::new();
            for parent in parents.iter() {
                for _ in 0..folders {
                    let folder = parent.join(Uuid::new_v4().to_string());
                    create_dir(&folder)?;
                    fill(&folder, files, &mut all)?;
                    next.push(folder);
                }
            }
            parents = next;
        }
        debug!("created {} files under {}", all.len(), root.display());
        Ok(Self { files: all, root })
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        if !self.root.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} isn't inside {}", self.root.display(), temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}

fn fill(folder: &Path, files: u16, created: &mut Vec<PathBuf>) -> Result<(), io::Error> {
    for _ in 0..files {
        let path = folder.join(Uuid::new_v4().to_string());
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        for _ in 0..rand::thread_rng().gen_range(1..4) {
            file.write_all(Uuid::new_v4().as_bytes())?;
        }
        file.flush()?;
        created.push(path);
    }
    Ok(())
}
