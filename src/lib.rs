//! A minimal cross-platform filesystem path toolkit for Rust.
//! Provides a normalized string-based path value type plus a small set of
//! filesystem queries and directory enumeration, backed by the native
//! platform APIs.
//!
//! ### Overview
//!
//! `path-kit` represents a path as a plain normalized string: both slash
//! styles are accepted on input and canonicalized to the host separator, and
//! trailing separators are stripped. All derived operations (parent,
//! filename, extension, concatenation) work on that normalized form.
//!
//! **Key ideas**:
//! - **Normalization at construction**: every `FsPath` is normalized once and
//!   stays normalized, so decomposition is a plain substring search.
//! - **One backend per platform**: filesystem queries go through the
//!   `FsBackend` trait, with a POSIX and a Windows implementation selected at
//!   build time; callers only see free functions.
//! - **Explicit failures**: fallible operations return `FsError` with a
//!   distinguishable kind (not-found, permission, I/O) instead of failing
//!   silently.
//! - **Lazy enumeration**: `read_dir` yields children one at a time, so
//!   callers can stop early without visiting the whole directory.

mod core;
mod fs;
mod path;

pub use crate::core::{FsBackend, FsError, Result};
pub use crate::fs::{
    DirEntries, copy, create_directory, directory_content, exists, for_each, is_directory,
    is_regular_file, read_dir,
};
pub use crate::path::FsPath;
