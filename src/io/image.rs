//! Image decoding, shred reassembly and atomic export

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{Result, UnshredError};
use crate::spatial::ShredLayout;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel, imageops};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Encoding used for the reconstructed image
///
/// JPEG is the default whatever the input format or the output extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Lossy JPEG without alpha
    #[default]
    Jpeg,
    /// Lossless PNG
    Png,
}

impl OutputFormat {
    /// Matching `image` crate format
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Decode an image and normalise it to 8-bit samples
///
/// Gray, gray-alpha, RGB and RGBA 8-bit images are kept as decoded; deeper
/// formats become RGBA when they carry alpha and RGB otherwise.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not a decodable image
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    let image = image::open(&path_buf).map_err(|e| UnshredError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(normalize_depth(image))
}

fn normalize_depth(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => image,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Paste shreds of `source` side by side in the given order
///
/// Position `p` of the result receives the full-height column range of shred
/// `order[p]`. The result has the dimensions and colour type of the source;
/// columns not covered by the order stay zero.
pub fn assemble(source: &DynamicImage, layout: &ShredLayout, order: &[usize]) -> DynamicImage {
    match source {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageLuma8(assemble_buffer(buffer, layout, order))
        }
        DynamicImage::ImageLumaA8(buffer) => {
            DynamicImage::ImageLumaA8(assemble_buffer(buffer, layout, order))
        }
        DynamicImage::ImageRgb8(buffer) => {
            DynamicImage::ImageRgb8(assemble_buffer(buffer, layout, order))
        }
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgba8(assemble_buffer(buffer, layout, order))
        }
        other => DynamicImage::ImageRgba8(assemble_buffer(&other.to_rgba8(), layout, order)),
    }
}

fn assemble_buffer<P>(
    source: &ImageBuffer<P, Vec<u8>>,
    layout: &ShredLayout,
    order: &[usize],
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = source.dimensions();
    let mut output = ImageBuffer::new(width, height);

    for (position, &shred) in order.iter().enumerate() {
        let (Some(source_x), Some(target_x)) = (layout.offset(shred), layout.offset(position))
        else {
            continue;
        };
        let strip = imageops::crop_imm(source, source_x, 0, layout.shred_width(), height).to_image();
        imageops::replace(&mut output, &strip, i64::from(target_x), 0);
    }

    output
}

/// Encode an image and publish it at `output_path` atomically
///
/// The image is written to a temporary file next to the destination and
/// renamed into place once fully flushed, so a failed export never leaves a
/// partial file behind. Alpha is dropped for JPEG output.
///
/// # Errors
///
/// Returns an error if:
/// - The destination directory cannot be created
/// - The temporary file cannot be created, written or flushed
/// - Encoding fails
/// - The temporary file cannot be renamed to the destination
pub fn export_image(image: &DynamicImage, output_path: &Path, format: OutputFormat) -> Result<()> {
    let directory = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(directory).map_err(|e| UnshredError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut temporary = NamedTempFile::new_in(directory).map_err(|e| UnshredError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create temporary file",
        source: e,
    })?;

    {
        let mut writer = BufWriter::new(temporary.as_file_mut());
        let encoded = match format {
            OutputFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
                without_alpha(image).write_with_encoder(encoder)
            }
            OutputFormat::Png => image.write_to(&mut writer, format.image_format()),
        };
        encoded.map_err(|e| UnshredError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
        writer.flush().map_err(|e| UnshredError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "flush",
            source: e,
        })?;
    }

    temporary
        .persist(output_path)
        .map_err(|e| UnshredError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e.error,
        })?;

    log::info!("Wrote {}", output_path.display());
    Ok(())
}

fn without_alpha(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image.clone(),
        DynamicImage::ImageLumaA8(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}
