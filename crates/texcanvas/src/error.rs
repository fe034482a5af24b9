//! Error types for texcanvas operations.
//!
//! This module provides the main error type [`TexError`] which wraps every
//! failure a printer can report, and [`ErrorKind`] which sorts them into the
//! three classes callers usually branch on.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

pub use texcanvas_core::error::{ColorError, GeometryError};

/// Broad classification of a [`TexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed arguments the operation cannot work with.
    Configuration,
    /// The environment failed: a file could not be written or an external
    /// program could not be run.
    Resource,
    /// The input data is geometrically degenerate.
    Geometry,
}

/// The main error type for texcanvas operations.
#[derive(Debug, Error)]
pub enum TexError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Edge ({source_index}, {target_index}) references a vertex outside the {len} given points")]
    EdgeOutOfRange {
        source_index: usize,
        target_index: usize,
        len: usize,
    },

    #[error("Unknown series label `{0}`: no marker has been assigned to it")]
    UnknownSeries(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to run `{program}`: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("`{program}` exited unsuccessfully ({status})")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TexError {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(err) if err.is_degenerate() => ErrorKind::Geometry,
            Self::Color(_)
            | Self::Geometry(_)
            | Self::EdgeOutOfRange { .. }
            | Self::UnknownSeries(_)
            | Self::InvalidArgument(_) => ErrorKind::Configuration,
            Self::Read { .. }
            | Self::Write { .. }
            | Self::Spawn { .. }
            | Self::ExitStatus { .. }
            | Self::Io(_) => ErrorKind::Resource,
        }
    }

    /// Wraps a failure to read `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
