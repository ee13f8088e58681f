//! Grid composition: one row per subfolder, frames packed left to right.
//!
//! Sizing reads PNG headers only. Pixels are decoded in the drawing pass, one
//! image at a time, so no canvas is allocated until every header is valid.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::codec;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::scan;

use super::{blit, write_output, Config, Summary};

pub(super) fn compose(config: &Config, folder: &Path) -> Result<Summary> {
    let mut subfolders = scan::list_subfolders(folder)?;
    subfolders.sort();

    let rows = subfolders
        .iter()
        .map(|dir| scan_row(dir))
        .collect::<Result<Vec<_>>>()?;

    let sizes = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(codec::read_dimensions)
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let layout = Layout::grid(&sizes)?;
    if layout.image_count() == 0 {
        return Err(Error::EmptyInput {
            path: folder.to_path_buf(),
        });
    }

    tracing::info!(
        "Sized {} rows, at most {} columns",
        layout.rows.len(),
        layout.max_columns()
    );

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (paths, placements) in rows.iter().zip(&layout.rows) {
        for (path, &placement) in paths.iter().zip(placements) {
            let image = codec::load_image(path)?;
            if image.dimensions() != (placement.width, placement.height) {
                return Err(Error::UnsupportedDimensions {
                    width: u64::from(image.width()),
                    height: u64::from(image.height()),
                    reason: format!(
                        "{} changed size after its header was read",
                        path.display()
                    ),
                });
            }
            blit(&mut canvas, &image, placement);
        }
    }

    let output = folder.join(&config.output_name);
    write_output(&canvas, &output)?;

    Ok(Summary {
        output,
        rows: layout.rows.len(),
        columns: layout.max_columns(),
        width: layout.width,
        height: layout.height,
    })
}

/// Sorted PNG paths of one subfolder.
fn scan_row(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = scan::scan_folder(dir, None)?;
    paths.sort();

    if paths.is_empty() {
        tracing::warn!("No PNG images in {}, leaving its row empty", dir.display());
    } else {
        tracing::debug!("{}: {} frames", dir.display(), paths.len());
    }

    Ok(paths)
}
