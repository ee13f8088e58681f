//! # spritesheet
//!
//! Assemble folders of PNG sprites into a single spritesheet texture.
//!
//! Two layouts are supported:
//!
//! - [`Mode::Strip`] stacks every PNG in a folder vertically, in file name
//!   order. The sheet is as wide as the widest sprite.
//! - [`Mode::Grid`] turns each subfolder into one row of frames packed left
//!   to right. Rows are stacked in subfolder name order, each in a band as
//!   tall as the tallest frame.
//!
//! The result is written as `spritesheet.png` into the source folder.
//!
//! ## Example
//!
//! ```no_run
//! use spritesheet::{Composer, Config, Mode};
//!
//! # fn main() -> spritesheet::Result<()> {
//! let composer = Composer::new(Config::default())?;
//! let summary = composer.compose(Mode::Grid, "assets/hero")?;
//!
//! println!("{} rows written to {}", summary.rows, summary.output.display());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod compose;
pub mod error;
pub mod layout;
pub mod scan;

pub use compose::{Composer, Config, Mode, Summary, DEFAULT_OUTPUT_NAME};
pub use error::{Error, Result};
pub use layout::{Layout, Placement};
