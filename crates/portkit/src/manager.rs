use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use portkit_archive::{Extractor, PlatformExtractor};
use portkit_fs::FileResult;
use tracing::debug;

/// Entry point for file operations and archive extraction.
///
/// Every method returns a [`FileResult`]; nothing here panics on bad input.
/// The extractor defaults to the one selected for the build target and can
/// be swapped with [`FileManager::with_extractor`].
#[derive(Debug, Clone, Default)]
pub struct FileManager<E = PlatformExtractor> {
    extractor: E,
}

impl FileManager {
    pub fn new() -> Self { Self::default() }
}

impl<E: Extractor> FileManager<E> {
    pub fn with_extractor(extractor: E) -> Self { Self { extractor } }

    /// Regular files directly inside `dir`, keyed by file name.
    pub fn list_files(&self, dir: impl AsRef<Path>) -> FileResult<BTreeMap<String, PathBuf>> {
        portkit_fs::list_files(dir)
    }

    pub fn delete_file(&self, path: impl AsRef<Path>) -> FileResult<()> { portkit_fs::delete_file(path) }

    /// Rename `source` to `destination`, creating missing parent directories.
    pub fn move_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> FileResult<PathBuf> {
        portkit_fs::move_file(source, destination)
    }

    /// Stream `source` into `destination`, creating missing parent directories.
    pub fn copy_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> FileResult<PathBuf> {
        portkit_fs::copy_file(source, destination)
    }

    /// Extract `archive` into a sibling directory named after it.
    pub fn unzip(&self, archive: impl AsRef<Path>) -> FileResult<PathBuf> {
        let archive = archive.as_ref();
        debug!(path = %archive.display(), "unzip");
        portkit_archive::unzip_with(&self.extractor, archive)
    }
}
