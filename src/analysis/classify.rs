// src/analysis/classify.rs

//! Color-threshold classification of map pixels into a binary mask.
//!
//! Map features of interest are drawn in saturated colors; a pixel belongs
//! to a class when its channels clear simple independent thresholds. The
//! rules are deliberately naive (no color-space conversion), matching the
//! imagery this pipeline is built for.

use crate::image::formats::{Mask, Pixel, Pixmap};
use crate::utils::error::{RegionError, Result};

/// Pixel-count gate below which the `rayon` path is not worth the
/// scheduling overhead.
#[cfg(feature = "rayon")]
const PARALLEL_MIN_PIXELS: usize = 1 << 20;

/// The color criterion a pixel is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Foreground iff `R > upper && G < lower && B < lower`.
    Red,
    /// Foreground iff `R < lower && G > upper && B > upper`.
    Cyan,
}

impl ColorClass {
    /// Applies this class's threshold rule to one pixel. Alpha is ignored.
    pub fn matches(self, pixel: Pixel, upper_threshold: u8, lower_threshold: u8) -> bool {
        match self {
            ColorClass::Red => {
                pixel.r > upper_threshold
                    && pixel.g < lower_threshold
                    && pixel.b < lower_threshold
            }
            ColorClass::Cyan => {
                pixel.r < lower_threshold
                    && pixel.g > upper_threshold
                    && pixel.b > upper_threshold
            }
        }
    }
}

/// Classifies every pixel of `image` against `class`, producing a mask of
/// the same dimensions with matching pixels set to [`Mask::FOREGROUND`].
///
/// Thresholds are independent per channel; `lower_threshold <
/// upper_threshold` is expected but not enforced here. Inverted thresholds
/// are not an error, the rules simply match what they match (for `Red`,
/// typically nothing).
///
/// Each output cell depends only on its input pixel, so with the `rayon`
/// feature enabled large images classify in parallel.
pub fn classify(
    image: &Pixmap,
    class: ColorClass,
    upper_threshold: u8,
    lower_threshold: u8,
) -> Result<Mask> {
    if image.is_empty() {
        return Err(RegionError::InvalidImage(
            "cannot classify an image with zero pixels".to_string(),
        ));
    }

    let (width, height) = image.dimensions();
    let cell = |p: &Pixel| {
        if class.matches(*p, upper_threshold, lower_threshold) {
            Mask::FOREGROUND
        } else {
            Mask::BACKGROUND
        }
    };

    #[cfg(feature = "rayon")]
    if image.pixels().len() >= PARALLEL_MIN_PIXELS {
        use rayon::prelude::*;
        let data: Vec<u8> = image.pixels().par_iter().map(cell).collect();
        return Ok(Mask::from_vec(width, height, data));
    }

    let data: Vec<u8> = image.pixels().iter().map(cell).collect();
    Ok(Mask::from_vec(width, height, data))
}
