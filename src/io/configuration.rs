//! Reconstruction constants and runtime configuration defaults

/// Width of a shred in pixels when none is configured
pub const DEFAULT_SHRED_WIDTH: u32 = 32;

/// Encoder quality used for JPEG output
pub const JPEG_QUALITY: u8 = 75;

// Logging
/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "UNSHRED_LOG";
/// Filter applied when neither the environment nor the verbosity flags say otherwise
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Progress bar display settings
/// Smallest shred count for which the cost table progress bar is shown
pub const MIN_SHREDS_FOR_PROGRESS: usize = 8;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
