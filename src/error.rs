//! Error type shared by the catalog, location model, state and renderer

use std::path::PathBuf;

use crate::domain::JointId;

/// Errors surfaced synchronously to the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Joint id is not part of the catalog or of this assessment
    NotFound(JointId),
    /// Scale factor is zero, negative or not finite
    InvalidScale(f64),
    /// Preselected joints cannot be applied to the assessment
    InvalidSelection(String),
    /// Background image could not be read or decoded
    AssetLoad { path: PathBuf, reason: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "joint {id} not found"),
            Error::InvalidScale(scale) => {
                write!(f, "invalid scale {scale}: must be a positive number")
            }
            Error::InvalidSelection(reason) => write!(f, "invalid joint selection: {reason}"),
            Error::AssetLoad { path, reason } => {
                write!(f, "failed to load {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
