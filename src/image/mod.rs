//! Pixel and grid buffer types.

pub mod formats;

pub use formats::{LabelGrid, Mask, Pixel, Pixmap};
