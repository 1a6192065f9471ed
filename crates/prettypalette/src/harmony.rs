//! Harmonious colors for a reference color.
//!
//! Given a reference color from the 6x6x6 RGB cube, [`harmonies`] derives one
//! [`HarmonySet`] for each [`Harmony`]. Every set includes the reference.
//!
//! ```
//! # use prettypalette::harmony::{harmonies, Harmony};
//! let sets = harmonies(196);
//! assert_eq!(sets.len(), 8);
//! assert_eq!(sets[0].harmony(), Harmony::Complementary);
//! assert_eq!(sets[0].colors(), &[196, 30]);
//! assert_eq!(sets[7].colors(), &[16, 52, 88, 124, 160, 196]);
//! ```
//!
//! The n-adic schemes pick, for each target hue, the candidate with the
//! closest hue among sufficiently saturated and bright colors. Monochrome
//! sequences collect colors with (nearly) the reference's hue and order them by
//! value. RGB gradients sweep the reference's strongest channel.

use crate::analysis::Analysis;
use crate::core::{hue_distance, rotate_hue};
use crate::termco::EmbeddedRgb;
use crate::Float;

/// Candidates for n-adic schemes need at least this saturation.
const MIN_SATURATION: Float = 0.3;

/// Candidates for n-adic schemes need at least this value.
const MIN_VALUE: Float = 0.3;

/// The number of colors in monochrome sequences and RGB gradients.
const SEQUENCE_LENGTH: usize = 6;

/// The initial hue tolerance for monochrome sequences.
const NARROW_TOLERANCE: Float = 5.0;

/// The hue tolerance for monochrome sequences with too few narrow matches.
const WIDE_TOLERANCE: Float = 15.0;

/// Half the angle between the two split complements.
const SPLIT_ANGLE: Float = 30.0;

/// A scheme for harmonious colors.
///
/// The variants are listed in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Harmony {
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
    Pentadic,
    Hexadic,
    MonochromeSequential,
    RgbGradient,
}

impl Harmony {
    /// All harmonies in display order.
    pub const ALL: [Harmony; 8] = [
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::Pentadic,
        Harmony::Hexadic,
        Harmony::MonochromeSequential,
        Harmony::RgbGradient,
    ];

    /// Get the number of evenly spaced hues for n-adic schemes.
    pub fn arity(&self) -> Option<usize> {
        match *self {
            Self::Complementary => Some(2),
            Self::Triadic => Some(3),
            Self::Tetradic => Some(4),
            Self::Pentadic => Some(5),
            Self::Hexadic => Some(6),
            Self::SplitComplementary | Self::MonochromeSequential | Self::RgbGradient => None,
        }
    }

    /// Get this harmony's human-readable name.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split-complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Pentadic => "Pentadic",
            Self::Hexadic => "Hexadic",
            Self::MonochromeSequential => "Monochrome sequential",
            Self::RgbGradient => "RGB gradient",
        }
    }
}

impl core::fmt::Display for Harmony {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A harmony with its colors.
///
/// The set always includes the reference color. For n-adic and
/// split-complementary harmonies, it also comes first. A set with only one
/// color is degenerate but still a valid result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarmonySet {
    harmony: Harmony,
    colors: Vec<u8>,
}

impl HarmonySet {
    /// Get the harmony.
    pub fn harmony(&self) -> Harmony {
        self.harmony
    }

    /// Get the 8-bit indices of the colors.
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this set is empty, which it never is.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Determine whether this set contains only the reference color.
    pub fn is_degenerate(&self) -> bool {
        self.colors.len() <= 1
    }
}

/// Derive all harmonies for the reference color, in display order.
///
/// If the reference color is not part of the 6x6x6 RGB cube, all sets are
/// degenerate and contain only the reference color.
pub fn harmonies(reference: u8) -> Vec<HarmonySet> {
    let cube = Analysis::cube();
    Harmony::ALL
        .iter()
        .map(|&harmony| {
            let set = HarmonySet {
                harmony,
                colors: derive(harmony, reference, &cube),
            };
            tracing::debug!(harmony = harmony.name(), count = set.len(), "derived harmony");
            set
        })
        .collect()
}

/// Derive the colors for one harmony, using the analyzed cube as candidates.
pub fn derive(harmony: Harmony, reference: u8, cube: &[Analysis]) -> Vec<u8> {
    let Ok(rgb) = EmbeddedRgb::try_from(reference) else {
        return vec![reference];
    };
    let reference = Analysis::of(rgb);

    if let Some(arity) = harmony.arity() {
        return n_adic(&reference, arity, cube);
    }

    match harmony {
        Harmony::SplitComplementary => split_complementary(&reference, cube),
        Harmony::MonochromeSequential => monochrome(&reference, cube),
        Harmony::RgbGradient => gradient(&reference),
        _ => vec![reference.index()],
    }
}

/// Find the candidate with the hue closest to the target hue.
///
/// Only saturated and bright enough colors other than the reference are
/// candidates. Ties go to the first candidate encountered.
fn closest_hue(reference: &Analysis, target: Float, cube: &[Analysis]) -> Option<u8> {
    let mut closest = None;
    let mut min_distance = Float::INFINITY;

    for candidate in cube {
        if candidate.index() == reference.index()
            || candidate.hsv().saturation < MIN_SATURATION
            || candidate.hsv().value < MIN_VALUE
        {
            continue;
        }

        let distance = hue_distance(candidate.hsv().hue, target);
        if distance < min_distance {
            min_distance = distance;
            closest = Some(candidate.index());
        }
    }

    if closest.is_none() {
        tracing::trace!(hue = target, "no candidate for target hue");
    }
    closest
}

fn matches_for(reference: &Analysis, targets: &[Float], cube: &[Analysis]) -> Vec<u8> {
    let mut colors = vec![reference.index()];
    colors.extend(
        targets
            .iter()
            .filter_map(|&target| closest_hue(reference, target, cube)),
    );
    colors
}

fn n_adic(reference: &Analysis, arity: usize, cube: &[Analysis]) -> Vec<u8> {
    let step = 360.0 / arity as Float;
    let targets = (1..arity)
        .map(|k| rotate_hue(reference.hsv().hue, step * k as Float))
        .collect::<Vec<_>>();
    matches_for(reference, &targets, cube)
}

fn split_complementary(reference: &Analysis, cube: &[Analysis]) -> Vec<u8> {
    let complement = rotate_hue(reference.hsv().hue, 180.0);
    let targets = [
        rotate_hue(complement, -SPLIT_ANGLE),
        rotate_hue(complement, SPLIT_ANGLE),
    ];
    matches_for(reference, &targets, cube)
}

fn within_tolerance(reference: &Analysis, tolerance: Float, cube: &[Analysis]) -> Vec<Analysis> {
    cube.iter()
        .filter(|candidate| hue_distance(candidate.hsv().hue, reference.hsv().hue) <= tolerance)
        .copied()
        .collect()
}

fn sort_by_value(colors: &mut [Analysis]) {
    colors.sort_by(|c1, c2| c1.hsv().value.total_cmp(&c2.hsv().value));
}

fn monochrome(reference: &Analysis, cube: &[Analysis]) -> Vec<u8> {
    let mut colors = within_tolerance(reference, NARROW_TOLERANCE, cube);
    if colors.len() < SEQUENCE_LENGTH {
        tracing::trace!(
            found = colors.len(),
            tolerance = WIDE_TOLERANCE,
            "widening hue tolerance for monochrome sequence"
        );
        colors = within_tolerance(reference, WIDE_TOLERANCE, cube);
    }

    sort_by_value(&mut colors);
    colors.truncate(SEQUENCE_LENGTH);

    if !colors.iter().any(|c| c.index() == reference.index()) {
        let middle = colors.len() / 2;
        match colors.get_mut(middle) {
            Some(slot) => *slot = *reference,
            None => colors.push(*reference),
        }
        sort_by_value(&mut colors);
    }

    colors.iter().map(Analysis::index).collect()
}

fn gradient(reference: &Analysis) -> Vec<u8> {
    let [r, g, b] = *reference.rgb().as_ref();
    let channel = if r >= g && r >= b {
        0
    } else if g >= b {
        1
    } else {
        2
    };

    (0..SEQUENCE_LENGTH as u8)
        .filter_map(|level| reference.rgb().with(channel, level).ok())
        .map(u8::from)
        .collect()
}

#[cfg(test)]
mod test {
    use super::{derive, harmonies, Harmony};
    use crate::analysis::Analysis;
    use crate::assert_close_enough;
    use crate::core::hue_distance;
    use crate::error::OutOfBoundsError;
    use crate::termco::EmbeddedRgb;

    fn colors(harmony: Harmony, reference: u8) -> Vec<u8> {
        derive(harmony, reference, &Analysis::cube())
    }

    fn analyze(index: u8) -> Analysis {
        Analysis::of(EmbeddedRgb::try_from(index).expect("embedded RGB index"))
    }

    #[test]
    fn test_display_order() {
        let sets = harmonies(33);
        let order = sets.iter().map(|s| s.harmony()).collect::<Vec<_>>();
        assert_eq!(order, Harmony::ALL.to_vec());
        for set in &sets {
            assert!(set.colors().contains(&33));
        }
        for set in &sets[..6] {
            assert_eq!(set.colors()[0], 33);
        }
        assert_eq!(Harmony::SplitComplementary.to_string(), "Split-complementary");
    }

    #[test]
    fn test_complementary() {
        // Pure red at hue 0 complements the first bright enough cyan at hue
        // 180, since (0, 1, 1) is too dark.
        assert_eq!(colors(Harmony::Complementary, 196), vec![196, 30]);

        // Pure blue at hue 240 complements the first yellow at hue 60.
        assert_eq!(colors(Harmony::Complementary, 21), vec![21, 100]);
    }

    #[test]
    fn test_n_adic() {
        for (harmony, arity) in [
            (Harmony::Complementary, 2),
            (Harmony::Triadic, 3),
            (Harmony::Tetradic, 4),
            (Harmony::Pentadic, 5),
            (Harmony::Hexadic, 6),
        ] {
            let colors = colors(harmony, 196);
            assert_eq!(colors.len(), arity, "{:?}", harmony);
            assert_eq!(colors[0], 196);

            for (k, &index) in colors.iter().enumerate().skip(1) {
                let candidate = analyze(index);
                assert!(candidate.hsv().saturation >= 0.3);
                assert!(candidate.hsv().value >= 0.3);
                let target = 360.0 * k as crate::Float / arity as crate::Float;
                assert!(hue_distance(candidate.hsv().hue, target) <= 6.0);
            }
        }

        // Triadic for red: green at 120 and blue at 240, first found wins.
        assert_eq!(colors(Harmony::Triadic, 196), vec![196, 28, 18]);
    }

    #[test]
    fn test_split_complementary() {
        let colors = colors(Harmony::SplitComplementary, 196);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], 196);
        assert_close_enough!(analyze(colors[1]).hsv().hue, 150.0);
        assert_close_enough!(analyze(colors[2]).hsv().hue, 210.0);
    }

    #[test]
    fn test_monochrome() -> Result<(), OutOfBoundsError> {
        // Orange (5, 2, 0) has hue 24, which is shared by few other colors.
        let reference = u8::from(EmbeddedRgb::new(5, 2, 0)?);
        let colors = colors(Harmony::MonochromeSequential, reference);
        assert!(colors.len() <= 6);
        assert!(colors.len() > 1);
        assert!(colors.contains(&reference));

        let values = colors
            .iter()
            .map(|&i| analyze(i).hsv().value)
            .collect::<Vec<_>>();
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for &index in &colors {
            assert!(hue_distance(analyze(index).hsv().hue, 24.0) <= 15.0);
        }
        Ok(())
    }

    #[test]
    fn test_gradient() -> Result<(), OutOfBoundsError> {
        // All channels tie at zero, so red is swept.
        assert_eq!(
            colors(Harmony::RgbGradient, 16),
            vec![16, 52, 88, 124, 160, 196]
        );

        // Blue is strongest.
        let reference = u8::from(EmbeddedRgb::new(1, 2, 4)?);
        let expected = (0..=5)
            .map(|b| EmbeddedRgb::new(1, 2, b).map(u8::from))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(colors(Harmony::RgbGradient, reference), expected);

        // Green and blue tie, green wins.
        let reference = u8::from(EmbeddedRgb::new(0, 3, 3)?);
        let expected = (0..=5)
            .map(|g| EmbeddedRgb::new(0, g, 3).map(u8::from))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(colors(Harmony::RgbGradient, reference), expected);
        Ok(())
    }

    #[test]
    fn test_out_of_cube() {
        for reference in [0, 9, 15, 232, 255] {
            for set in harmonies(reference) {
                assert_eq!(set.colors(), &[reference]);
                assert!(set.is_degenerate());
            }
        }
    }
}
