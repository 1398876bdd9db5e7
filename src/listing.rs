use crate::errors::{FileOperation, IoError};
use std::ffi::OsString;
use std::path::Path;

/// Returns the entry names of `dir` in filesystem enumeration order.
///
/// The order is whatever the OS hands back from `read_dir`; callers rely on
/// the same sequence being used for both copying and rendering, so no sorting
/// happens here. Non-recursive: an entry that is itself a directory is
/// returned by name like any other.
pub fn read_listing(dir: &Path) -> Result<Vec<OsString>, IoError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|error| IoError::new(FileOperation::List, dir.to_path_buf(), error))?;

    let mut names = Vec::new();

    for entry in entries {
        let entry =
            entry.map_err(|error| IoError::new(FileOperation::List, dir.to_path_buf(), error))?;

        names.push(entry.file_name());
    }

    log::debug!("listed {} entries in {}", names.len(), dir.display());

    Ok(names)
}
