//! Read-only pixel access for the cost model
//!
//! Pixels are exposed as channel slices so that gray, gray-alpha, RGB and
//! RGBA images share one code path. Only 8-bit buffers are supported; the
//! loader converts deeper formats before they reach the algorithm.

use crate::io::error::{Result, invalid_parameter};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

/// Read-only view of an image, addressed by coordinate
pub trait PixelSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Channel intensities of the pixel at `(x, y)`
    ///
    /// Coordinates outside the image yield an empty slice.
    fn pixel_at(&self, x: u32, y: u32) -> &[u8];

    /// Confirm every pixel is readable as 8-bit channels
    ///
    /// # Errors
    ///
    /// Returns an error if the source stores samples `pixel_at` cannot expose
    fn check_samples(&self) -> Result<()> {
        Ok(())
    }
}

impl<P> PixelSource for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn width(&self) -> u32 {
        Self::width(self)
    }

    fn height(&self) -> u32 {
        Self::height(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> &[u8] {
        self.get_pixel_checked(x, y)
            .map(Pixel::channels)
            .unwrap_or_default()
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    // Deeper formats are normalised by `io::image::load_source`
    fn pixel_at(&self, x: u32, y: u32) -> &[u8] {
        match self {
            Self::ImageLuma8(buffer) => buffer.pixel_at(x, y),
            Self::ImageLumaA8(buffer) => buffer.pixel_at(x, y),
            Self::ImageRgb8(buffer) => buffer.pixel_at(x, y),
            Self::ImageRgba8(buffer) => buffer.pixel_at(x, y),
            _ => &[],
        }
    }

    fn check_samples(&self) -> Result<()> {
        match self {
            Self::ImageLuma8(_)
            | Self::ImageLumaA8(_)
            | Self::ImageRgb8(_)
            | Self::ImageRgba8(_) => Ok(()),
            other => Err(invalid_parameter(
                "source",
                &format!("{:?}", other.color()),
                &"8-bit samples required; load through io::image::load_source to convert",
            )),
        }
    }
}
