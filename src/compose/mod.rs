//! Spritesheet composition.

mod grid;
mod strip;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{imageops, RgbaImage};

use crate::codec;
use crate::error::{Error, Result};
use crate::layout::Placement;

/// Default output file name, written into the source folder.
pub const DEFAULT_OUTPUT_NAME: &str = "spritesheet.png";

/// How source images are arranged on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every PNG in the folder stacked vertically into one column.
    Strip,
    /// One row per subfolder, frames packed horizontally within each row.
    Grid,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "action" | "strip" => Ok(Self::Strip),
            "i" | "individual" | "grid" => Ok(Self::Grid),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip => f.write_str("strip"),
            Self::Grid => f.write_str("grid"),
        }
    }
}

/// Configuration for spritesheet composition.
#[derive(Debug, Clone)]
pub struct Config {
    /// File name of the output, created in the source folder.
    pub output_name: String,

    /// Skip a file named `output_name` when scanning for inputs.
    pub exclude_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            exclude_output: true,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the output name is empty, contains a path
    /// separator, or does not end in `.png`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidParameter {
            name: "output_name".to_string(),
            reason: reason.to_string(),
        };

        if self.output_name.is_empty() {
            return Err(invalid("must not be empty"));
        }

        if self.output_name.contains(['/', '\\']) {
            return Err(invalid("must be a file name, not a path"));
        }

        let stem = self.output_name.strip_suffix(".png");
        if stem.map_or(true, str::is_empty) {
            return Err(invalid("must end in .png"));
        }

        Ok(())
    }
}

/// Outcome of a successful composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Path of the written spritesheet.
    pub output: PathBuf,
    /// Rows composed: image count in strip mode, subfolder count in grid mode.
    pub rows: usize,
    /// Largest number of images in a row.
    pub columns: usize,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Builds spritesheets from folders of PNG files.
#[derive(Debug, Clone)]
pub struct Composer {
    config: Config,
}

impl Composer {
    /// Create a new composer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Compose the spritesheet for `folder` in the given mode and write it to
    /// `<folder>/<output_name>`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed, an image cannot be
    /// decoded, no images are found, or the output cannot be written.
    pub fn compose<P: AsRef<Path>>(&self, mode: Mode, folder: P) -> Result<Summary> {
        let folder = folder.as_ref();

        tracing::info!("Composing {mode} spritesheet from {}", folder.display());

        match mode {
            Mode::Strip => strip::compose(&self.config, folder),
            Mode::Grid => grid::compose(&self.config, folder),
        }
    }

    /// Path the spritesheet for `folder` is written to.
    #[must_use]
    pub fn output_path<P: AsRef<Path>>(&self, folder: P) -> PathBuf {
        folder.as_ref().join(&self.config.output_name)
    }
}

/// Copy `src` onto `canvas` at the placement's offset, overwriting the
/// destination pixels.
fn blit(canvas: &mut RgbaImage, src: &RgbaImage, at: Placement) {
    debug_assert_eq!((src.width(), src.height()), (at.width, at.height));
    imageops::replace(canvas, src, i64::from(at.x), i64::from(at.y));
}

/// Encode `canvas` to `path`, logging the write.
fn write_output(canvas: &RgbaImage, path: &Path) -> Result<()> {
    tracing::info!(
        "Writing {}x{} spritesheet to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    codec::save_image(canvas, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_mode_aliases() {
        for s in ["a", "action", "strip", "ACTION"] {
            assert_eq!(s.parse::<Mode>().unwrap(), Mode::Strip);
        }
        for s in ["i", "individual", "grid", "I"] {
            assert_eq!(s.parse::<Mode>().unwrap(), Mode::Grid);
        }
    }

    #[test]
    fn test_mode_unknown() {
        let err = "x".parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::UnknownMode(ref s) if s == "x"));
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_config_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.output_name, "spritesheet.png");
        assert!(config.exclude_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_names() {
        for name in ["", "out/sheet.png", "out\\sheet.png", "sheet.jpg", ".png"] {
            let config = Config {
                output_name: name.to_string(),
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_output_path() {
        let composer = Composer::new(Config::default()).unwrap();
        assert_eq!(
            composer.output_path("/tmp/sprites"),
            Path::new("/tmp/sprites/spritesheet.png")
        );
    }

    #[test]
    fn test_blit_overwrites_region() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 9]));
        let src = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        blit(
            &mut canvas,
            &src,
            Placement {
                x: 1,
                y: 2,
                width: 2,
                height: 1,
            },
        );

        assert_eq!(canvas.get_pixel(1, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 2), &Rgba([9, 9, 9, 9]));
        assert_eq!(canvas.get_pixel(1, 1), &Rgba([9, 9, 9, 9]));
    }
}
