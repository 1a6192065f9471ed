use crate::termco::EmbeddedRgb;
use crate::Float;

/// Convert the embedded RGB color's coordinates to floating point coordinates
/// `0..=1`.
#[inline]
pub(crate) fn normalize(color: &EmbeddedRgb) -> [Float; 3] {
    let [r, g, b] = *color.as_ref();
    [r as Float / 5.0, g as Float / 5.0, b as Float / 5.0]
}

/// A color's hue, saturation, and value.
///
/// Hue ranges `0..360`, saturation and value `0..=1`. Achromatic colors have
/// hue 0, not not-a-number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    pub hue: Float,
    pub saturation: Float,
    pub value: Float,
}

/// Convert normalized RGB coordinates to HSV.
///
/// The hue sector is determined by the maximum channel, with ties resolved in
/// order red, green, blue.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> Hsv {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    Hsv {
        hue,
        saturation,
        value: max,
    }
}

const RED_WEIGHT: Float = 0.299;
const GREEN_WEIGHT: Float = 0.587;
const BLUE_WEIGHT: Float = 0.114;

/// Compute the luma-weighted luminance of normalized RGB coordinates.
///
/// This is the Rec. 601 weighting applied to gamma-encoded values, i.e., a
/// cheap approximation.
#[inline]
pub(crate) fn luminance(value: &[Float; 3]) -> Float {
    let [r, g, b] = *value;
    RED_WEIGHT.mul_add(r, GREEN_WEIGHT.mul_add(g, BLUE_WEIGHT * b))
}

/// Compute the unweighted average of normalized RGB coordinates.
#[inline]
pub(crate) fn greyscale(value: &[Float; 3]) -> Float {
    let [r, g, b] = *value;
    (r + g + b) / 3.0
}
