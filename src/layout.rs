//! Placement of source images on the output canvas.
//!
//! A [`Layout`] is computed from image dimensions alone, before any canvas is
//! allocated. Every placement lies inside the canvas bounds.

use crate::error::{Error, Result};

/// Where one source image lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas size plus the placement of every source image, grouped by row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<Vec<Placement>>,
}

impl Layout {
    /// Stack images vertically, one per row, anchored at `x = 0`.
    ///
    /// The canvas is as wide as the widest image and as tall as all images
    /// together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimensions`] if the summed height does not
    /// fit in `u32`.
    pub fn strip(sizes: &[(u32, u32)]) -> Result<Self> {
        let mut rows = Vec::with_capacity(sizes.len());
        let mut width = 0u32;
        let mut y = 0u64;

        for &(w, h) in sizes {
            rows.push(vec![Placement {
                x: 0,
                y: to_u32(y, u64::from(w), y)?,
                width: w,
                height: h,
            }]);
            width = width.max(w);
            y += u64::from(h);
        }

        Ok(Self {
            width,
            height: to_u32(y, u64::from(width), y)?,
            rows,
        })
    }

    /// Pack each row's images left to right with no gap, one fixed-height
    /// band per row.
    ///
    /// The band height is the tallest image over all rows; images anchor to
    /// the top of their band. The canvas is as wide as the widest row (sum of
    /// its image widths). A row with no images still takes a band.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimensions`] if the canvas size does not
    /// fit in `u32`.
    pub fn grid(rows: &[Vec<(u32, u32)>]) -> Result<Self> {
        let band = rows
            .iter()
            .flatten()
            .map(|&(_, h)| h)
            .max()
            .unwrap_or(0);

        let mut placed = Vec::with_capacity(rows.len());
        let mut width = 0u64;

        for (index, row) in rows.iter().enumerate() {
            let y = u64::from(band) * index as u64;
            let mut x = 0u64;
            let mut placements = Vec::with_capacity(row.len());

            for &(w, h) in row {
                placements.push(Placement {
                    x: to_u32(x, x, y)?,
                    y: to_u32(y, x, y)?,
                    width: w,
                    height: h,
                });
                x += u64::from(w);
            }

            width = width.max(x);
            placed.push(placements);
        }

        let height = u64::from(band) * rows.len() as u64;

        Ok(Self {
            width: to_u32(width, width, height)?,
            height: to_u32(height, width, height)?,
            rows: placed,
        })
    }

    /// Largest number of images in any row.
    #[must_use]
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of placed images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

fn to_u32(value: u64, width: u64, height: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::UnsupportedDimensions {
        width,
        height,
        reason: "exceeds u32::MAX".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn at(x: u32, y: u32, width: u32, height: u32) -> Placement {
        Placement {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_strip_two_images() {
        let layout = Layout::strip(&[(10, 20), (15, 10)]).unwrap();

        assert_eq!((layout.width, layout.height), (15, 30));
        assert_eq!(
            layout.rows,
            vec![vec![at(0, 0, 10, 20)], vec![at(0, 20, 15, 10)]]
        );
        assert_eq!(layout.max_columns(), 1);
        assert_eq!(layout.image_count(), 2);
    }

    #[test]
    fn test_strip_uneven_heights() {
        // Canvas height is the exact sum, not first height times count.
        let layout = Layout::strip(&[(4, 2), (4, 7), (1, 1)]).unwrap();
        assert_eq!((layout.width, layout.height), (4, 10));
        assert_eq!(layout.rows[2][0].y, 9);
    }

    #[test]
    fn test_strip_empty() {
        let layout = Layout::strip(&[]).unwrap();
        assert_eq!(layout, Layout::default());
    }

    #[test]
    fn test_strip_height_overflow() {
        let err = Layout::strip(&[(1, u32::MAX), (1, 1)]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDimensions { .. }));
    }

    #[test]
    fn test_grid_uses_widest_row() {
        let rows = vec![vec![(5, 5)], vec![(5, 5), (5, 5)]];
        let layout = Layout::grid(&rows).unwrap();

        assert_eq!((layout.width, layout.height), (10, 10));
        assert_eq!(
            layout.rows,
            vec![
                vec![at(0, 0, 5, 5)],
                vec![at(0, 5, 5, 5), at(5, 5, 5, 5)],
            ]
        );
        assert_eq!(layout.max_columns(), 2);
    }

    #[test]
    fn test_grid_width_independent_of_height() {
        // Wide, short frames: width comes from summed widths, not band * columns.
        let rows = vec![vec![(30, 4), (30, 4), (30, 4)], vec![(8, 10)]];
        let layout = Layout::grid(&rows).unwrap();

        assert_eq!((layout.width, layout.height), (90, 20));
        assert_eq!(layout.rows[0][2], at(60, 0, 30, 4));
        assert_eq!(layout.rows[1][0], at(0, 10, 8, 10));
    }

    #[test]
    fn test_grid_empty_row_keeps_band() {
        let rows = vec![vec![], vec![(3, 6)]];
        let layout = Layout::grid(&rows).unwrap();

        assert_eq!((layout.width, layout.height), (3, 12));
        assert!(layout.rows[0].is_empty());
        assert_eq!(layout.rows[1][0], at(0, 6, 3, 6));
    }

    #[test]
    fn test_grid_width_overflow() {
        let rows = vec![vec![(u32::MAX, 1), (1, 1)]];
        assert!(matches!(
            Layout::grid(&rows),
            Err(Error::UnsupportedDimensions { .. })
        ));
    }
}
