//! Derived attributes of embedded RGB colors.
//!
//! [`Analysis`] bundles everything the ordering engine and the harmony
//! generator need to know about one color of the 6x6x6 RGB cube:
//!
//! ```
//! # use prettypalette::analysis::Analysis;
//! # use prettypalette::Temperature;
//! # use prettypalette::termco::EmbeddedRgb;
//! # use prettypalette::error::OutOfBoundsError;
//! let teal = Analysis::of(EmbeddedRgb::try_from(37)?);
//! assert_eq!(teal.rgb().as_ref(), &[0, 3, 3]);
//! assert_eq!(teal.hsv().hue, 180.0);
//! assert_eq!(teal.temperature(), Temperature::Cool);
//! assert_eq!(teal.similarity_group(), 9);
//! # Ok::<(), OutOfBoundsError>(())
//! ```
//!
//! All attributes are pure functions of the color. They are computed once per
//! [`Analysis`] and never change afterwards.

use crate::core::{
    distance, greyscale, luminance, normalize, rgb_to_hsv, similarity_group, Hsv, Temperature,
};
use crate::termco::EmbeddedRgb;
use crate::Float;

/// Below this saturation, a color counts as gray for hue ordering.
pub const GRAY_SATURATION_THRESHOLD: Float = 0.1;

/// The derived attributes of an embedded RGB color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Analysis {
    index: u8,
    rgb: EmbeddedRgb,
    hsv: Hsv,
    luminance: Float,
    greyscale: Float,
    temperature: Temperature,
    similarity_group: u8,
}

impl Analysis {
    /// Analyze the embedded RGB color.
    pub fn of(rgb: EmbeddedRgb) -> Self {
        let normalized = normalize(&rgb);
        let hsv = rgb_to_hsv(&normalized);

        Self {
            index: u8::from(rgb),
            rgb,
            hsv,
            luminance: luminance(&normalized),
            greyscale: greyscale(&normalized),
            temperature: Temperature::of(hsv.hue),
            similarity_group: similarity_group(&hsv),
        }
    }

    /// Analyze all 216 embedded RGB colors, in index order.
    pub fn cube() -> Vec<Self> {
        EmbeddedRgb::all().map(Self::of).collect()
    }

    /// Get the 8-bit index.
    #[inline]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Get the cube coordinates.
    #[inline]
    pub fn rgb(&self) -> &EmbeddedRgb {
        &self.rgb
    }

    /// Get hue, saturation, and value.
    #[inline]
    pub fn hsv(&self) -> &Hsv {
        &self.hsv
    }

    /// Get the luma-weighted luminance.
    #[inline]
    pub fn luminance(&self) -> Float {
        self.luminance
    }

    /// Get the unweighted average of the normalized channels.
    #[inline]
    pub fn greyscale(&self) -> Float {
        self.greyscale
    }

    /// Get the temperature class.
    #[inline]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Get the similarity group `0..=14`.
    #[inline]
    pub fn similarity_group(&self) -> u8 {
        self.similarity_group
    }

    /// Determine whether this color counts as gray for hue ordering.
    pub fn is_grayish(&self) -> bool {
        self.hsv.saturation < GRAY_SATURATION_THRESHOLD
    }

    /// Compute the Euclidean distance to the other color in cube coordinates.
    pub fn distance(&self, other: &EmbeddedRgb) -> Float {
        distance(&self.rgb, other)
    }
}
