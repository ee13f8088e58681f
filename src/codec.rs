//! PNG decoding and encoding.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageFormat, ImageReader, ImageResult, RgbaImage};

use crate::error::{Error, Result};

/// Decode a PNG file into an RGBA8 buffer.
///
/// Any PNG colour type is accepted and converted to RGBA8.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing, unreadable, or not a
/// valid PNG.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = open_png(path)
        .and_then(ImageReader::decode)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Decoded {} ({}x{})", path.display(), img.width(), img.height());

    Ok(img.into_rgba8())
}

/// Read the dimensions of a PNG file from its header without decoding pixels.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing, unreadable, or its
/// header is not a valid PNG header.
pub fn read_dimensions<P: AsRef<Path>>(path: P) -> Result<(u32, u32)> {
    let path = path.as_ref();

    open_png(path)
        .and_then(ImageReader::into_dimensions)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode an RGBA8 buffer as PNG, creating or overwriting `path`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the file cannot be created or written.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })
}

fn open_png(path: &Path) -> ImageResult<ImageReader<BufReader<File>>> {
    let mut reader = ImageReader::open(path)?;
    reader.set_format(ImageFormat::Png);
    Ok(reader)
}
