use crate::termco::EmbeddedRgb;
use crate::Float;

/// Compute the Euclidean distance between two embedded RGB colors.
///
/// The distance is computed on the cube coordinates `0..=5`, not on normalized
/// coordinates, and hence ranges `0..=5√3`.
pub(crate) fn distance(color1: &EmbeddedRgb, color2: &EmbeddedRgb) -> Float {
    let [r1, g1, b1] = *color1.as_ref();
    let [r2, g2, b2] = *color2.as_ref();

    let dr = r1 as Float - r2 as Float;
    let dg = g1 as Float - g2 as Float;
    let db = b1 as Float - b2 as Float;

    dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
}

/// Compute the shorter of the two arcs between two hues in degrees.
#[inline]
pub(crate) fn hue_distance(hue1: Float, hue2: Float) -> Float {
    let delta = (hue1 - hue2).abs();
    delta.min(360.0 - delta)
}

/// Rotate the hue by the given number of degrees, wrapping into `0..360`.
#[inline]
pub(crate) fn rotate_hue(hue: Float, degrees: Float) -> Float {
    (hue + degrees).rem_euclid(360.0)
}
