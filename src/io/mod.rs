/// Command-line interface and single-image processing
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, reassembly and export
pub mod image;
/// Logger initialisation
pub mod logging;
/// Progress display
pub mod progress;
/// Seeded shredding of intact images
pub mod shuffle;
