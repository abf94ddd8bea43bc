//! Windows backend: attribute-based queries and `FindFirstFile`-style
//! enumeration via the standard library's Windows filesystem bindings.
//!
//! `is_regular_file` here means "exists and is not a directory", which is
//! broader than the POSIX regular-file check (symlinks and device entries
//! qualify). The divergence is surfaced on the public `is_regular_file`
//! function.

use std::fs;
use std::io::{self, ErrorKind};

use log::{debug, trace};

use crate::core::{FsBackend, FsError, Result};
use crate::path::FsPath;

pub struct WindowsFs;

/// Owns the find handle for one enumeration; closed on drop.
#[derive(Debug)]
pub struct Children {
    dir: FsPath,
    inner: fs::ReadDir,
}

impl Iterator for Children {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some(
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .map_err(|e| FsError::from_io(&self.dir, e)),
        )
    }
}

impl FsBackend for WindowsFs {
    type Children = Children;

    fn exists(path: &FsPath) -> bool {
        fs::metadata(path).is_ok()
    }

    fn is_directory(path: &FsPath) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn is_regular_file(path: &FsPath) -> bool {
        Self::exists(path) && !Self::is_directory(path)
    }

    fn create_directory(path: &FsPath) -> Result<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && Self::is_directory(path) => Ok(()),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }

    fn copy_file(src: &FsPath, dst: &FsPath) -> Result<u64> {
        let mut reader = fs::File::open(src).map_err(|e| {
            debug!("cannot open {} for reading: {}", src, e);
            FsError::from_io(src, e)
        })?;
        let mut writer = fs::File::create(dst).map_err(|e| FsError::from_io(dst, e))?;
        let bytes = io::copy(&mut reader, &mut writer).map_err(|e| FsError::from_io(dst, e))?;
        trace!("copied {} bytes: {} -> {}", bytes, src, dst);
        Ok(bytes)
    }

    fn children(dir: &FsPath) -> Result<Children> {
        let inner = fs::read_dir(dir).map_err(|e| {
            debug!("cannot open directory {}: {}", dir, e);
            FsError::from_io(dir, e)
        })?;
        Ok(Children {
            dir: dir.clone(),
            inner,
        })
    }
}
