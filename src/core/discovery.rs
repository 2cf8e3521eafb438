//! Filesystem discovery: immediate subdirectories of the parent directory and
//! the sequence file inside each of them. Listings follow shell-glob rules
//! (hidden entries ignored, lexical order) so repeated runs see the same order.
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Fail with `DirectoryNotFound` unless `path` exists and is a directory
pub fn validate_parent_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::DirectoryNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Return an iterator over immediate, non-hidden subdirectories of `parent`, sorted lexically
pub fn enumerate_subdirectories(parent: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(parent)? {
        let path = entry?.path();
        if path.is_dir() && !is_hidden(&path) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs.into_iter())
}

/// True if the file name has a non-empty stem followed by `.<extension>`, like `*.<extension>`
fn has_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name().and_then(OsStr::to_str) else {
        return false;
    };
    let suffix = format!(".{}", extension);
    name.len() > suffix.len() && name.ends_with(&suffix)
}

/// Regular files in `dir` named `*.<extension>`, sorted lexically.
///
/// `extension` may contain dots (`fna.gz`), matching the way a shell glob does.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && !is_hidden(&path) && has_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Find the sequence file of `subdir`, trying `extensions` in order of preference.
///
/// Listing errors are treated like an empty listing so the next extension is
/// still tried; `None` means no extension matched.
pub fn locate_sequence_file(subdir: &Path, extensions: &[String]) -> Option<PathBuf> {
    for ext in extensions {
        match list_files_with_extension(subdir, ext) {
            Ok(files) => {
                if let Some(first) = files.into_iter().next() {
                    return Some(first);
                }
                debug!("No *.{} file in {:?}", ext, subdir);
            }
            Err(e) => debug!("Listing *.{} in {:?} failed: {}", ext, subdir, e),
        }
    }
    None
}

/// Render `path` with exactly one trailing separator, e.g. `/data/taxon1/`
pub fn with_trailing_separator(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_os_string();
    if !s.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        s.push(MAIN_SEPARATOR_STR);
    }
    PathBuf::from(s)
}
