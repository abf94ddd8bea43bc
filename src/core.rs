use std::io;

use thiserror::Error;

use crate::path::FsPath;

pub type Result<T> = std::result::Result<T, FsError>;

/// Failure of a filesystem operation, with the path it concerned.
///
/// Query predicates (`exists` and friends) report `false` on failure instead;
/// this type is returned by the operations that actually touch or enumerate
/// entries.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(FsPath),

    #[error("permission denied: {0}")]
    PermissionDenied(FsPath),

    #[error("i/o error on {path}")]
    Io {
        path: FsPath,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn from_io(path: &FsPath, err: io::Error) -> FsError {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.clone()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.clone()),
            _ => FsError::Io {
                path: path.clone(),
                source: err,
            },
        }
    }
}

/// The per-platform operation set. One stateless implementation per target
/// platform; `fs` selects it at build time and exposes free functions, so
/// nothing outside this crate names a backend.
pub trait FsBackend {
    type Children: Iterator<Item = Result<String>>;

    fn exists(path: &FsPath) -> bool;
    fn is_directory(path: &FsPath) -> bool;
    fn is_regular_file(path: &FsPath) -> bool;
    fn create_directory(path: &FsPath) -> Result<()>;
    fn copy_file(src: &FsPath, dst: &FsPath) -> Result<u64>;
    /// Raw child names of `dir`, in OS-reported order, `.`/`..` not filtered.
    fn children(dir: &FsPath) -> Result<Self::Children>;
}
