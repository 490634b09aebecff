//! Uniform result model and basic cross-platform file operations.
//!
//! Every public operation returns a [`FileResult`]: either the natural value
//! or a [`FileError`] carrying a message and an [`ErrorCode`]. A missing
//! source always reports [`ErrorCode::FileNotFound`]; everything else that
//! goes wrong is reported as [`ErrorCode::IoError`].

mod dir;
mod error;
mod ops;

pub use dir::ensure_parent;
pub use error::{ErrorCode, FileError, FileResult};
pub use ops::{copy_file, delete_file, list_files, move_file};
