use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Extractor, output_dir_for};
use crate::error::{Error, Result};

/// Extracts standard ZIP archives with the `zip` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl Extractor for ZipExtractor {
    fn unzip(&self, archive: &Path) -> Result<PathBuf> {
        if !archive.exists() {
            return Err(Error::NotFound(archive.to_path_buf()));
        }

        let file = File::open(archive).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(archive.to_path_buf()),
            io::ErrorKind::NotFound => Error::NotFound(archive.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let mut zip = zip::ZipArchive::new(BufReader::new(file))
            .map_err(|e| Error::Corrupted(e.to_string()))?;

        let output_dir = std::path::absolute(output_dir_for(archive))?;
        create_dir(&output_dir)?;

        let mut total_bytes = 0u64;
        for index in 0..zip.len() {
            let mut entry = zip
                .by_index(index)
                .map_err(|e| Error::Corrupted(e.to_string()))?;
            let relative = entry
                .enclosed_name()
                .map(|p| p.to_path_buf())
                .ok_or_else(|| Error::UnsafeEntry(entry.name().to_string()))?;
            let target = output_dir.join(&relative);

            if entry.is_dir() {
                create_dir(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            let mut out = File::create(&target).map_err(|source| Error::ExtractionFailed {
                path: relative.clone(),
                source,
            })?;
            let written = io::copy(&mut entry, &mut out).map_err(|source| Error::ExtractionFailed {
                path: relative.clone(),
                source,
            })?;
            apply_mode(&target, entry.unix_mode())?;

            debug!(entry = %relative.display(), bytes = written, "extracted entry");
            total_bytes += written;
        }

        info!(
            archive = %archive.display(),
            output = %output_dir.display(),
            entries = zip.len(),
            bytes = total_bytes,
            "archive extracted"
        );
        Ok(output_dir)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        // set-id and sticky bits are dropped; owner keeps read/write
        fs::set_permissions(path, fs::Permissions::from_mode((mode & 0o777) | 0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<()> { Ok(()) }
