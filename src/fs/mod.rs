//! Filesystem queries and directory enumeration over the platform backend.
//!
//! ### Key Features:
//! - **Build-time dispatch**: the backend is picked with `#[cfg]`; everything
//!   public here is a free function or a plain iterator.
//! - **Fail-to-false predicates**: `exists` / `is_directory` /
//!   `is_regular_file` report `false` on any OS-level failure rather than
//!   distinguishing error causes.
//! - **Explicit errors elsewhere**: `copy`, `create_directory` and the
//!   enumeration entry points return [`FsError`] with a distinguishable kind.
//! - **Lazy enumeration**: [`read_dir`] produces children one at a time; the
//!   native directory handle is released when the iterator is dropped,
//!   including on early termination.

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
type Native = posix::PosixFs;
#[cfg(windows)]
type Native = windows::WindowsFs;

use crate::core::{FsBackend, Result};
use crate::path::FsPath;

/// True iff the OS resolves `path` to any filesystem entry.
pub fn exists(path: &FsPath) -> bool {
    Native::exists(path)
}

/// True iff `path` exists and is a directory.
pub fn is_directory(path: &FsPath) -> bool {
    Native::is_directory(path)
}

/// True iff `path` names a regular file.
///
/// The two backends do not agree on what "regular" means: the POSIX one
/// checks the regular-file type bit, while the Windows one defines it as
/// "exists and is not a directory", which also accepts symlinks and device
/// files. Callers that care about the distinction should not rely on this
/// predicate across platforms.
pub fn is_regular_file(path: &FsPath) -> bool {
    Native::is_regular_file(path)
}

/// Creates the directory at `path`. A directory already existing there is
/// success; an existing non-directory entry is an error. Parents are not
/// created.
pub fn create_directory(path: &FsPath) -> Result<()> {
    Native::create_directory(path)
}

/// Copies `src` to `dst` (truncate-create), streaming all bytes. Returns the
/// number of bytes copied.
pub fn copy(src: &FsPath, dst: &FsPath) -> Result<u64> {
    Native::copy_file(src, dst)
}

/// Lazy iterator over the direct children of one directory.
///
/// Yields `Result<FsPath>` in OS-reported order (not sorted), never including
/// the `.` and `..` entries. With `extract_relative` the items are bare child
/// names; otherwise each name is joined onto the enumerated directory.
/// Dropping the iterator closes the underlying directory handle.
#[derive(Debug)]
pub struct DirEntries {
    dir: FsPath,
    extract_relative: bool,
    inner: <Native as FsBackend>::Children,
}

impl Iterator for DirEntries {
    type Item = Result<FsPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let name = match self.inner.next()? {
                Ok(name) => name,
                Err(e) => return Some(Err(e)),
            };
            if name == "." || name == ".." {
                continue;
            }
            let child = FsPath::new(name);
            return Some(Ok(if self.extract_relative {
                child
            } else {
                self.dir.join(&child)
            }));
        }
    }
}

/// Starts a non-recursive enumeration of `dir`.
///
/// Fails up front (`NotFound`, `PermissionDenied`, `Io`) if the directory
/// cannot be opened; `extract_relative` selects bare names versus
/// `dir`-joined paths for the yielded entries.
pub fn read_dir(dir: &FsPath, extract_relative: bool) -> Result<DirEntries> {
    Ok(DirEntries {
        dir: dir.clone(),
        extract_relative,
        inner: Native::children(dir)?,
    })
}

/// Invokes `visitor` once per direct child of `dir`. A `false` return from
/// the visitor stops the enumeration early.
pub fn for_each<F>(dir: &FsPath, mut visitor: F, extract_relative: bool) -> Result<()>
where
    F: FnMut(&FsPath) -> bool,
{
    for entry in read_dir(dir, extract_relative)? {
        if !visitor(&entry?) {
            break;
        }
    }
    Ok(())
}

/// Collects the direct children of `dir` into a vector, preserving the
/// OS-reported enumeration order.
pub fn directory_content(dir: &FsPath, extract_relative: bool) -> Result<Vec<FsPath>> {
    read_dir(dir, extract_relative)?.collect()
}
