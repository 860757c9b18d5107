//! Spatial data structures for shredded images
//!
//! This module contains:
//! - Shred geometry derived from image dimensions
//! - Read-only pixel access used by the cost model

/// Shred column geometry
pub mod layout;
/// Pixel access trait and its image implementations
pub mod source;

pub use layout::ShredLayout;
pub use source::PixelSource;
