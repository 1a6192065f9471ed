//! Ordering the 6x6x6 RGB cube.
//!
//! A [`Strategy`] names an ordering of the 216 embedded RGB colors. Each
//! strategy boils down to a chain of [`SortKey`]s, each with a [`Direction`],
//! that is compared left to right. The first key that differs between two
//! colors decides their order. Colors that tie on all keys retain index order.
//!
//! ```
//! # use prettypalette::order::{sort, Strategy};
//! let ordered = sort(Strategy::Rgb);
//! assert_eq!(ordered.len(), 216);
//! assert_eq!(&ordered[..3], &[16, 22, 28]);
//! ```

use core::cmp::Ordering;

use crate::analysis::Analysis;
use crate::termco::EmbeddedRgb;
use crate::Float;

/// The direction of a sort key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Apply this direction to an ascending ordering.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match *self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A scalar attribute of an analyzed color that colors can be sorted by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// The red cube coordinate.
    Red,
    /// The green cube coordinate.
    Green,
    /// The blue cube coordinate.
    Blue,
    /// The Euclidean distance to the reference color.
    Distance(EmbeddedRgb),
    /// Hue in degrees.
    Hue,
    /// HSV saturation.
    Saturation,
    /// HSV value.
    Value,
    /// Luma-weighted luminance.
    Luminance,
    /// Unweighted average of the channels.
    Greyscale,
    /// 1 for gray-ish colors, 0 otherwise.
    Grayish,
    /// The similarity group.
    SimilarityGroup,
    /// The temperature's sort ordinal.
    Temperature,
}

impl SortKey {
    /// Extract this key's value from the analyzed color.
    pub fn extract(&self, color: &Analysis) -> Float {
        match *self {
            Self::Red => color.rgb()[0] as Float,
            Self::Green => color.rgb()[1] as Float,
            Self::Blue => color.rgb()[2] as Float,
            Self::Distance(ref reference) => color.distance(reference),
            Self::Hue => color.hsv().hue,
            Self::Saturation => color.hsv().saturation,
            Self::Value => color.hsv().value,
            Self::Luminance => color.luminance(),
            Self::Greyscale => color.greyscale(),
            Self::Grayish => {
                if color.is_grayish() {
                    1.0
                } else {
                    0.0
                }
            }
            Self::SimilarityGroup => color.similarity_group() as Float,
            Self::Temperature => color.temperature().ordinal() as Float,
        }
    }
}

/// An ordering of the 6x6x6 RGB cube.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// By red, then blue, then green coordinate.
    #[default]
    Rgb,
    /// By distance to the reference color, then decreasing value and
    /// saturation.
    Distance(EmbeddedRgb),
    /// By decreasing greyscale, then hue, then decreasing saturation.
    Greyscale,
    /// Chromatic colors before grays, then by hue, then decreasing saturation
    /// and value.
    Hue,
    /// By luminance, then hue, then decreasing saturation.
    Luminance,
    /// By saturation, then decreasing value, then hue.
    Saturation,
    /// By similarity group, then decreasing value and saturation.
    Similarity,
    /// By temperature (warm, medium, cool), then hue, then decreasing value
    /// and saturation.
    Temperature,
}

impl Strategy {
    /// Get the chain of sort keys for this strategy, in priority order.
    pub fn keys(&self) -> Vec<(SortKey, Direction)> {
        use Direction::*;
        use SortKey::*;

        match *self {
            Self::Rgb => vec![(Red, Ascending), (Blue, Ascending), (Green, Ascending)],
            Self::Distance(reference) => vec![
                (Distance(reference), Ascending),
                (Value, Descending),
                (Saturation, Descending),
            ],
            Self::Greyscale => vec![
                (Greyscale, Descending),
                (Hue, Ascending),
                (Saturation, Descending),
            ],
            Self::Hue => vec![
                (Grayish, Ascending),
                (Hue, Ascending),
                (Saturation, Descending),
                (Value, Descending),
            ],
            Self::Luminance => vec![
                (Luminance, Ascending),
                (Hue, Ascending),
                (Saturation, Descending),
            ],
            Self::Saturation => vec![
                (Saturation, Ascending),
                (Value, Descending),
                (Hue, Ascending),
            ],
            Self::Similarity => vec![
                (SimilarityGroup, Ascending),
                (Value, Descending),
                (Saturation, Descending),
            ],
            Self::Temperature => vec![
                (Temperature, Ascending),
                (Hue, Ascending),
                (Value, Descending),
                (Saturation, Descending),
            ],
        }
    }

    /// Get a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Distance(_) => "distance",
            Self::Greyscale => "greyscale",
            Self::Hue => "hue",
            Self::Luminance => "luminance",
            Self::Saturation => "saturation",
            Self::Similarity => "similarity",
            Self::Temperature => "temperature",
        }
    }
}

/// Compare two analyzed colors with the chain of sort keys.
pub fn compare(keys: &[(SortKey, Direction)], color1: &Analysis, color2: &Analysis) -> Ordering {
    keys.iter()
        .map(|&(key, direction)| {
            direction.apply(key.extract(color1).total_cmp(&key.extract(color2)))
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sort the analyzed colors in place.
///
/// The sort is stable, so colors that tie on all keys retain their relative
/// order.
pub fn sort_by_strategy(strategy: Strategy, colors: &mut [Analysis]) {
    let keys = strategy.keys();
    colors.sort_by(|color1, color2| compare(&keys, color1, color2));
}

/// Order the 216 embedded RGB colors with the given strategy.
///
/// This function returns a permutation of the 8-bit indices `16..=231`.
pub fn sort(strategy: Strategy) -> Vec<u8> {
    let mut colors = Analysis::cube();
    sort_by_strategy(strategy, &mut colors);
    tracing::debug!(strategy = strategy.name(), "ordered embedded RGB colors");
    colors.iter().map(Analysis::index).collect()
}
