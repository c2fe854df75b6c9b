//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A recursive copy that stopped partway through.
///
/// `from` and `to` name the entry that failed, not the roots of the copy.
#[derive(Debug, Error)]
#[error("failed to copy `{}` to `{}`", .from.display(), .to.display())]
pub struct CopyDirError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Counts of what a recursive copy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub dirs: u64,
    pub files: u64,
    pub bytes: u64,
}

/// Recursively copy a directory.
///
/// `dst` and any missing parents are created. Files are copied byte for byte
/// and symlinks are recreated rather than followed. Entries are visited in
/// file name order so a failure always stops at the same place.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<CopyStats, CopyDirError> {
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| CopyDirError {
            from: e.path().unwrap_or(src).to_path_buf(),
            to: dst.to_path_buf(),
            source: e.into(),
        })?;

        let src_path = entry.path();
        let relative = src_path.strip_prefix(src).unwrap_or(src_path);
        let dst_path = dst.join(relative);
        let fail = |source: io::Error| CopyDirError {
            from: src_path.to_path_buf(),
            to: dst_path.clone(),
            source,
        };

        let ty = entry.file_type();
        if ty.is_dir() {
            fs::create_dir_all(&dst_path).map_err(fail)?;
            stats.dirs += 1;
        } else if ty.is_symlink() {
            let link = fs::read_link(src_path).map_err(fail)?;
            symlink(&link, &dst_path).map_err(fail)?;
            stats.files += 1;
        } else {
            stats.bytes += fs::copy(src_path, &dst_path).map_err(fail)?;
            stats.files += 1;
        }
    }

    tracing::debug!(
        "copied {} files ({} bytes) from {} to {}",
        stats.files,
        stats.bytes,
        src.display(),
        dst.display()
    );

    Ok(stats)
}

/// Create a symlink (platform-aware).
#[cfg(unix)]
pub fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
pub fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::os::windows::fs::symlink_dir(src, dst)
    } else {
        std::os::windows::fs::symlink_file(src, dst)
    }
}
