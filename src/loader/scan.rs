// Directory listing shared by discovery and collection.
// Everything comes back sorted by name so pad order and gap templates are
// the same on every platform.

use std::path::{Path, PathBuf};

use crate::error::{CombError, Result};
use crate::shared::is_wav;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
}

pub fn dir_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CombError::io("check dir exists", path, e)),
    }
}

// Immediate subdirectories of `base`, filtered by the allow-list when it's non-empty
pub fn pattern_dirs(base: &Path, allowed: &[String]) -> Result<Vec<Entry>> {
    let mut dirs = list(base, true, |_| true)?;
    if !allowed.is_empty() {
        dirs.retain(|d| {
            let keep = allowed.iter().any(|a| a == &d.name);
            if !keep {
                log::debug!("skipping pattern {} (not in allow-list)", d.name);
            }
            keep
        });
    }
    Ok(dirs)
}

// Non-directory entries of `dir` with a .wav name
pub fn wav_files(dir: &Path) -> Result<Vec<Entry>> {
    list(dir, false, is_wav)
}

// entries whose name passes `keep` and whose kind matches `want_dirs`, sorted by name
fn list(dir: &Path, want_dirs: bool, keep: impl Fn(&str) -> bool) -> Result<Vec<Entry>> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| CombError::io("read directory", dir, e))?;
    let mut out = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| CombError::io("read directory", dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !keep(&name) {
            continue; // never stat what we won't use
        }
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CombError::io("stat", &path, e))?;
        let is_dir = if file_type.is_symlink() {
            // follow it, so linked pattern folders and linked wavs still count.
            // a dangling link is no folder, but a dangling wav is a real error
            match std::fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(_) if want_dirs => false,
                Err(e) => return Err(CombError::io("stat", &path, e)),
            }
        } else {
            file_type.is_dir()
        };
        if is_dir != want_dirs {
            continue;
        }
        out.push(Entry { name, path });
    }
    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
