//! ZIP extraction behind a platform-selected extractor.
//!
//! [`PlatformExtractor`] is chosen at build time: [`ZipExtractor`] when the
//! `zip` feature is on and the target has a filesystem, [`Unsupported`]
//! otherwise. Callers that need a different strategy inject their own
//! [`Extractor`] through [`unzip_with`].

use std::path::{Path, PathBuf};

use portkit_fs::FileResult;

mod error;
pub mod extract;

pub use error::{Error, Result};
pub use extract::{Extractor, Unsupported, output_dir_for};

#[cfg(feature = "zip")]
pub use extract::ZipExtractor;

#[cfg(all(feature = "zip", not(target_family = "wasm")))]
pub type PlatformExtractor = ZipExtractor;

#[cfg(not(all(feature = "zip", not(target_family = "wasm"))))]
pub type PlatformExtractor = Unsupported;

/// Whether [`unzip`] can extract anything on this build.
pub const fn is_supported() -> bool { cfg!(all(feature = "zip", not(target_family = "wasm"))) }

/// Extract `archive` next to itself with the platform extractor.
///
/// Returns the absolute output directory: the archive path minus its
/// extension.
pub fn unzip(archive: impl AsRef<Path>) -> FileResult<PathBuf> {
    unzip_with(&PlatformExtractor::default(), archive)
}

pub fn unzip_with<E: Extractor + ?Sized>(extractor: &E, archive: impl AsRef<Path>) -> FileResult<PathBuf> {
    Ok(extractor.unzip(archive.as_ref())?)
}
