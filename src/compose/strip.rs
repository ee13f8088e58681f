//! Vertical strip composition: every PNG in one folder, top to bottom.

use std::path::Path;

use image::RgbaImage;

use crate::codec;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::scan;

use super::{blit, write_output, Config, Summary};

pub(super) fn compose(config: &Config, folder: &Path) -> Result<Summary> {
    let exclude = config
        .exclude_output
        .then_some(config.output_name.as_str());

    let mut paths = scan::scan_folder(folder, exclude)?;
    if paths.is_empty() {
        return Err(Error::EmptyInput {
            path: folder.to_path_buf(),
        });
    }
    paths.sort();

    tracing::info!("Found {} images", paths.len());

    let images = paths
        .iter()
        .map(codec::load_image)
        .collect::<Result<Vec<_>>>()?;

    let sizes: Vec<_> = images.iter().map(RgbaImage::dimensions).collect();
    let layout = Layout::strip(&sizes)?;

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (image, row) in images.iter().zip(&layout.rows) {
        for &placement in row {
            blit(&mut canvas, image, placement);
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
