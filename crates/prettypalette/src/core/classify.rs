use super::Hsv;
use crate::Float;

/// A coarse color temperature.
///
/// The variants are ordered by their sort ordinal, i.e., warm colors come
/// first, then medium colors, then cool colors. Note that the hue ranges are
/// *not* contiguous in that order: Cool covers `60 < hue <= 180`, whereas
/// Medium covers `180 < hue < 300`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Temperature {
    /// Reds, oranges, yellows, and magentas with `hue <= 60 || 300 <= hue`.
    Warm = 0,
    /// Blues and violets with `180 < hue < 300`.
    Medium = 1,
    /// Greens and cyans with `60 < hue <= 180`.
    Cool = 2,
}

impl Temperature {
    /// Classify the hue. Achromatic colors have hue 0 and hence are warm.
    pub fn of(hue: Float) -> Self {
        if hue <= 60.0 || 300.0 <= hue {
            Self::Warm
        } else if hue <= 180.0 {
            Self::Cool
        } else {
            Self::Medium
        }
    }

    /// Get this temperature's sort ordinal.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

/// Below this saturation, colors are grouped by value instead of hue.
const GROUP_SATURATION_THRESHOLD: Float = 0.2;

/// The number of distinct similarity groups.
pub const SIMILARITY_GROUPS: u8 = 15;

/// Determine the similarity group `0..=14`.
///
/// Colors with low saturation fall into the groups 0 (dark), 1 (medium), and
/// 2 (light) based on their value. All other colors fall into twelve hue
/// sectors of 30° each, numbered 3 through 14.
pub(crate) fn similarity_group(hsv: &Hsv) -> u8 {
    if hsv.saturation < GROUP_SATURATION_THRESHOLD {
        if hsv.value < 1.0 / 3.0 {
            0
        } else if hsv.value < 2.0 / 3.0 {
            1
        } else {
            2
        }
    } else {
        // Hue is below 360, so the sector is at most 11.
        3 + (hsv.hue / 30.0).floor() as u8
    }
}

#[cfg(test)]
mod test {
    use super::{similarity_group, Temperature, SIMILARITY_GROUPS};
    use crate::core::{normalize, rgb_to_hsv, Hsv};
    use crate::termco::EmbeddedRgb;
    use std::collections::HashSet;

    #[test]
    fn test_temperature() {
        assert_eq!(Temperature::of(0.0), Temperature::Warm);
        assert_eq!(Temperature::of(60.0), Temperature::Warm);
        assert_eq!(Temperature::of(60.5), Temperature::Cool);
        assert_eq!(Temperature::of(180.0), Temperature::Cool);
        assert_eq!(Temperature::of(180.5), Temperature::Medium);
        assert_eq!(Temperature::of(299.9), Temperature::Medium);
        assert_eq!(Temperature::of(300.0), Temperature::Warm);

        // Medium sorts between warm and cool, even though its hues come last.
        assert_eq!(Temperature::Warm.ordinal(), 0);
        assert_eq!(Temperature::Cool.ordinal(), 2);
        assert_eq!(Temperature::Medium.ordinal(), 1);
        assert!(Temperature::Warm < Temperature::Medium);
        assert!(Temperature::Medium < Temperature::Cool);
    }

    #[test]
    fn test_similarity_group() {
        let gray = |value| Hsv {
            hue: 0.0,
            saturation: 0.0,
            value,
        };
        assert_eq!(similarity_group(&gray(0.2)), 0);
        assert_eq!(similarity_group(&gray(0.4)), 1);
        assert_eq!(similarity_group(&gray(0.8)), 2);

        let hued = |hue| Hsv {
            hue,
            saturation: 1.0,
            value: 1.0,
        };
        assert_eq!(similarity_group(&hued(0.0)), 3);
        assert_eq!(similarity_group(&hued(29.9)), 3);
        assert_eq!(similarity_group(&hued(30.0)), 4);
        assert_eq!(similarity_group(&hued(359.9)), 14);

        let mut groups = HashSet::new();
        for color in EmbeddedRgb::all() {
            let hsv = rgb_to_hsv(&normalize(&color));
            let group = similarity_group(&hsv);
            assert_eq!(group, similarity_group(&hsv));
            assert!(group < SIMILARITY_GROUPS);
            groups.insert(group);
        }
        assert_eq!(groups.len(), SIMILARITY_GROUPS as usize);
    }
}
