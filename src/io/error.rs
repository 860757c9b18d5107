//! Error types for loading, reconstructing and exporting shredded images

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum UnshredError {
    /// Failed to open or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Image is too small to hold a single shred
    InvalidGeometry {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Configured shred width in pixels
        shred_width: u32,
    },

    /// Every shred has a predecessor, so the accepted edges form a closed loop
    NoStartShred {
        /// Number of shreds in the image
        shred_count: usize,
    },

    /// Walking successor links from the start shred did not reach every shred
    ///
    /// The greedy matcher closed a loop somewhere else, leaving the chain
    /// through the start shred short.
    IncompleteChain {
        /// Shreds reached from the start shred, in order
        order: Vec<usize>,
        /// Shreds never reached
        missing: Vec<usize>,
        /// Number of shreds in the image
        shred_count: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cost table computation was stopped through its cancellation token
    Cancelled {
        /// Rows of the cost table finished before the stop was noticed
        rows_completed: usize,
        /// Rows the table needed in total
        rows_total: usize,
    },

    /// Failed to encode the reconstructed image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl UnshredError {
    /// Whether the error comes from a matching that does not form one chain
    ///
    /// These are the cases a caller may recover from, for example by retrying
    /// with a different cost model or shred width.
    pub const fn is_degenerate_matching(&self) -> bool {
        matches!(self, Self::NoStartShred { .. } | Self::IncompleteChain { .. })
    }
}

impl fmt::Display for UnshredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidGeometry {
                width,
                height,
                shred_width,
            } => {
                write!(
                    f,
                    "Image of {width}x{height} pixels holds no complete shred of width {shred_width}"
                )
            }
            Self::NoStartShred { shred_count } => {
                write!(
                    f,
                    "No unambiguous start shred found: all {shred_count} shreds have a predecessor"
                )
            }
            Self::IncompleteChain {
                order,
                missing,
                shred_count,
            } => {
                write!(
                    f,
                    "Chain {order:?} covers {} of {shred_count} shreds; never reached {missing:?}",
                    order.len()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Cancelled {
                rows_completed,
                rows_total,
            } => {
                write!(
                    f,
                    "Cost computation cancelled after {rows_completed} of {rows_total} rows"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for UnshredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, UnshredError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> UnshredError {
    UnshredError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
