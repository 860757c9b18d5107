//! Shred geometry over a source image
//!
//! Shreds are never separated physically; every shred is addressed through
//! its column range in the source. Columns past the last complete shred are
//! excluded from every computation.

use crate::io::error::{Result, UnshredError, invalid_parameter};
use crate::spatial::PixelSource;
use std::ops::Range;

/// Column geometry of equal-width shreds laid side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShredLayout {
    shred_width: u32,
    shred_count: usize,
    image_width: u32,
    height: u32,
}

impl ShredLayout {
    /// Derive the layout of an image of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `shred_width` is zero
    /// - The image is narrower than one shred or has no rows
    pub fn new(image_width: u32, height: u32, shred_width: u32) -> Result<Self> {
        if shred_width == 0 {
            return Err(invalid_parameter(
                "shred_width",
                &shred_width,
                &"shred width must be at least one pixel",
            ));
        }

        let shred_count = (image_width / shred_width) as usize;
        if shred_count == 0 || height == 0 {
            return Err(UnshredError::InvalidGeometry {
                width: image_width,
                height,
                shred_width,
            });
        }

        Ok(Self {
            shred_width,
            shred_count,
            image_width,
            height,
        })
    }

    /// Derive the layout of a pixel source
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ShredLayout::new`]
    pub fn for_source<S: PixelSource + ?Sized>(source: &S, shred_width: u32) -> Result<Self> {
        Self::new(source.width(), source.height(), shred_width)
    }

    /// Width of every shred in pixels
    pub const fn shred_width(&self) -> u32 {
        self.shred_width
    }

    /// Number of complete shreds
    pub const fn shred_count(&self) -> usize {
        self.shred_count
    }

    /// Image height, which is also the height of every shred
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Full width of the image the layout was derived from
    pub const fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Columns covered by complete shreds
    pub const fn covered_width(&self) -> u32 {
        self.shred_count as u32 * self.shred_width
    }

    /// Trailing columns that belong to no shred
    pub const fn ignored_columns(&self) -> u32 {
        self.image_width - self.covered_width()
    }

    /// Horizontal offset of the shred's first column
    pub const fn offset(&self, shred: usize) -> Option<u32> {
        if shred < self.shred_count {
            Some(shred as u32 * self.shred_width)
        } else {
            None
        }
    }

    /// Column range `[offset, offset + width)` of a shred
    pub fn column_range(&self, shred: usize) -> Option<Range<u32>> {
        self.offset(shred)
            .map(|start| start..start + self.shred_width)
    }

    /// Leftmost column of a shred
    pub const fn left_column(&self, shred: usize) -> Option<u32> {
        self.offset(shred)
    }

    /// Rightmost column of a shred
    pub const fn right_column(&self, shred: usize) -> Option<u32> {
        match self.offset(shred) {
            Some(start) => Some(start + self.shred_width - 1),
            None => None,
        }
    }
}
