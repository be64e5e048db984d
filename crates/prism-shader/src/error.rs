use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A fatal error while loading a shader resource.
///
/// Unrecognized `#shader` sections are not errors; see
/// [`UnrecognizedSection`](crate::split::UnrecognizedSection).
#[derive(Debug)]
pub enum ShaderError {
    /// The resource could not be opened.
    ResourceNotFound { path: PathBuf, source: io::Error },
    /// The resource was opened but a line could not be read (I/O failure or
    /// invalid UTF-8).
    Read {
        path: PathBuf,
        /// 1-based line number of the line that failed.
        line: usize,
        source: io::Error,
    },
}

impl ShaderError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceNotFound { path: path.into(), source }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, line: usize, source: io::Error) -> Self {
        Self::Read { path: path.into(), line, source }
    }

    /// Path of the resource the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::ResourceNotFound { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound { path, source } => {
                write!(f, "shader resource not found: {} ({})", path.display(), source)
            }
            Self::Read { path, line, source } => {
                write!(f, "failed to read shader resource {}:{}: {}", path.display(), line, source)
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceNotFound { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}
