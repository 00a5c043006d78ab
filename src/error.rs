//! Error taxonomy for the discovery, validation and installation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Reason reported when a descriptor has no `name`.
pub const MISSING_NAME: &str = "missing name";
/// Reason reported when a descriptor has no `desc`.
pub const MISSING_DESCRIPTION: &str = "missing description";
/// Cause reported when a package cannot be installed because it has no hook.
pub const NO_INSTALL_FUNCTION: &str = "no install function";
/// Reason reported for a source entry whose file name is not valid UTF-8.
pub const NON_UTF8_NAME: &str = "file name is not valid UTF-8";

#[derive(Debug, Error)]
pub enum PackageError {
    /// The package source directory could not be listed. Fatal to a scan.
    #[error("Unable to read package source {path:?}: {source:#}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// No definition exists for the identifier.
    #[error("Package '{identifier}' not found at {path:?}")]
    NotFound { identifier: String, path: PathBuf },

    /// A definition was found but fails validation.
    #[error("Invalid package '{identifier}': {reason}")]
    InvalidDescriptor { identifier: String, reason: String },

    /// Anything that went wrong while installing a single package.
    #[error("Failed to install package '{identifier}': {cause:#}")]
    InstallFailed {
        identifier: String,
        #[source]
        cause: anyhow::Error,
    },
}

impl PackageError {
    pub fn invalid(identifier: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }

    pub fn install_failed(identifier: &str, cause: impl Into<anyhow::Error>) -> Self {
        Self::InstallFailed {
            identifier: identifier.to_string(),
            cause: cause.into(),
        }
    }

    /// The inner pipeline error an `InstallFailed` wraps, if any.
    pub fn wrapped(&self) -> Option<&PackageError> {
        match self {
            Self::InstallFailed { cause, .. } => cause.downcast_ref::<PackageError>(),
            _ => None,
        }
    }
}
