use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[cfg(feature = "zip")]
mod zip;

#[cfg(feature = "zip")]
pub use self::zip::ZipExtractor;

/// Capability to unpack an archive next to itself.
///
/// Implementations extract `archive` into [`output_dir_for`]`(archive)` and
/// return that directory as an absolute path.
pub trait Extractor {
    fn unzip(&self, archive: &Path) -> Result<PathBuf>;
}

/// Extractor for targets without ZIP support. Fails before touching the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl Extractor for Unsupported {
    fn unzip(&self, _archive: &Path) -> Result<PathBuf> { Err(Error::UnsupportedPlatform) }
}

/// Where `archive` is extracted to: the archive path minus its extension.
///
/// An archive without an extension gets an `_unzipped` suffix instead, so the
/// output directory never collides with the archive itself.
pub fn output_dir_for(archive: &Path) -> PathBuf {
    match (archive.file_stem(), archive.extension()) {
        (Some(stem), Some(_)) => archive.with_file_name(stem),
        (Some(stem), None) => {
            let mut name = stem.to_os_string();
            name.push("_unzipped");
            archive.with_file_name(name)
        }
        _ => archive.join("unzipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension() {
        assert_eq!(output_dir_for(Path::new("/tmp/data.zip")), PathBuf::from("/tmp/data"));
        assert_eq!(output_dir_for(Path::new("pkg.tar.zip")), PathBuf::from("pkg.tar"));
    }

    #[test]
    fn no_extension_gets_suffix() {
        assert_eq!(output_dir_for(Path::new("dir/bundle")), PathBuf::from("dir/bundle_unzipped"));
    }

    #[test]
    fn unsupported_never_touches_disk() {
        let err = Unsupported.unzip(Path::new("/definitely/not/here.zip")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform));
    }
}
