//! Error types for placement math.

use std::fmt;

/// Result type for normalization.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors from fitting an asset into the viewing volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// The bounding box has no positive extent on any axis, so no uniform
    /// scale can map it to the target size. Callers should render the asset
    /// unscaled and skip decal placement.
    DegenerateBounds,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateBounds => {
                write!(f, "bounding box has no positive extent on any axis")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}
