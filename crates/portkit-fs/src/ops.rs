use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dir::ensure_parent;
use crate::error::{FileError, FileResult};

/// List the regular files directly inside `dir`, keyed by file name.
///
/// Subdirectories are skipped and the listing is not recursive.
pub fn list_files(dir: impl AsRef<Path>) -> FileResult<BTreeMap<String, PathBuf>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(FileError::not_found("directory", dir));
    }
    if !dir.is_dir() {
        return Err(FileError::io(
            "failed to list files",
            format_args!("not a directory: {}", dir.display()),
        ));
    }

    let read_dir = fs::read_dir(dir).map_err(|e| FileError::io("failed to list files", e))?;

    let mut files = BTreeMap::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| FileError::io("failed to list files", e))?;
        let path = entry.path();
        // follows symlinks, so a link to a directory is skipped too
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        if metadata.is_dir() {
            continue;
        }
        files.insert(entry.file_name().to_string_lossy().into_owned(), path);
    }

    debug!(dir = %dir.display(), count = files.len(), "listed files");
    Ok(files)
}

/// Delete the file at `path`. An empty directory is removed as well.
pub fn delete_file(path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FileError::not_found("file", path));
    }

    let removed = if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| FileError::io("failed to delete file", e))?;

    debug!(path = %path.display(), "deleted file");
    Ok(())
}

/// Rename `source` to `destination`, creating the destination's parents first.
pub fn move_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> FileResult<PathBuf> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    if !source.exists() {
        return Err(FileError::not_found("source file", source));
    }

    ensure_parent(destination).map_err(|e| FileError::io("failed to move file", e))?;
    fs::rename(source, destination).map_err(|e| FileError::io("failed to move file", e))?;

    debug!(from = %source.display(), to = %destination.display(), "moved file");
    Ok(destination.to_path_buf())
}

/// Stream `source` into `destination`, creating the destination's parents first.
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> FileResult<PathBuf> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    if !source.exists() {
        return Err(FileError::not_found("source file", source));
    }

    if !source.is_file() {
        return Err(FileError::io(
            "failed to copy file",
            format_args!("not a regular file: {}", source.display()),
        ));
    }

    ensure_parent(destination).map_err(|e| FileError::io("failed to copy file", e))?;
    if is_same_file(source, destination) {
        return Err(FileError::io(
            "failed to copy file",
            format_args!("source and destination are the same file: {}", source.display()),
        ));
    }

    let bytes = stream_copy(source, destination).map_err(|e| FileError::io("failed to copy file", e))?;

    debug!(from = %source.display(), to = %destination.display(), bytes, "copied file");
    Ok(destination.to_path_buf())
}

fn stream_copy(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let mut writer = File::create(destination)?;
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.sync_all()?;
    Ok(bytes)
}

// Truncating the destination would otherwise wipe the source.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
