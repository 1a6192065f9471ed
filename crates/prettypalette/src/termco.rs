//! Terminal color representations.
//!
//! The 256 8-bit terminal colors fall into four [`Band`]s. This module offers
//! [`AnsiColor`] for the first two bands, [`EmbeddedRgb`] for the 6x6x6 RGB
//! cube, and [`GrayGradient`] for the grayscale ramp.
use crate::error::OutOfBoundsError;

// ====================================================================================================================
// Band
// ====================================================================================================================

/// The four bands of the 8-bit palette.
///
/// The bands partition `0..=255` without overlap or gap:
///
/// ```
/// # use prettypalette::termco::Band;
/// assert_eq!(Band::of(7), Band::Standard);
/// assert_eq!(Band::of(8), Band::HighIntensity);
/// assert_eq!(Band::of(16), Band::Cube);
/// assert_eq!(Band::of(231), Band::Cube);
/// assert_eq!(Band::of(232), Band::Grayscale);
/// assert_eq!(*Band::Cube.range().start(), 16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    /// The eight standard ANSI colors `0..=7`.
    Standard,
    /// The eight high-intensity ANSI colors `8..=15`.
    HighIntensity,
    /// The 6x6x6 RGB cube `16..=231`.
    Cube,
    /// The 24-step grayscale ramp `232..=255`.
    Grayscale,
}

impl Band {
    /// All bands in palette order.
    pub const ALL: [Band; 4] = [
        Band::Standard,
        Band::HighIntensity,
        Band::Cube,
        Band::Grayscale,
    ];

    /// Determine the band for the 8-bit index.
    pub const fn of(index: u8) -> Self {
        match index {
            0..=7 => Self::Standard,
            8..=15 => Self::HighIntensity,
            16..=231 => Self::Cube,
            _ => Self::Grayscale,
        }
    }

    /// Get the inclusive range of 8-bit indices making up this band.
    pub const fn range(&self) -> core::ops::RangeInclusive<u8> {
        match *self {
            Self::Standard => 0..=7,
            Self::HighIntensity => 8..=15,
            Self::Cube => 16..=231,
            Self::Grayscale => 232..=255,
        }
    }

    /// Get the number of colors in this band.
    pub const fn len(&self) -> usize {
        match *self {
            Self::Standard | Self::HighIntensity => 8,
            Self::Cube => 216,
            Self::Grayscale => 24,
        }
    }

    /// Determine whether this band is empty, which it never is.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts enumeration variants to 8-bit color codes with [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
/// ANSI colors have no intrinsic color values and hence take no part in color
/// analysis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

static ANSI_COLORS: [AnsiColor; 16] = [
    AnsiColor::Black,
    AnsiColor::Red,
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Blue,
    AnsiColor::Magenta,
    AnsiColor::Cyan,
    AnsiColor::White,
    AnsiColor::BrightBlack,
    AnsiColor::BrightRed,
    AnsiColor::BrightGreen,
    AnsiColor::BrightYellow,
    AnsiColor::BrightBlue,
    AnsiColor::BrightMagenta,
    AnsiColor::BrightCyan,
    AnsiColor::BrightWhite,
];

impl AnsiColor {
    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> core::iter::Copied<core::slice::Iter<'static, AnsiColor>> {
        ANSI_COLORS.iter().copied()
    }

    /// Determine whether this ANSI color is achromatic.
    pub fn is_achromatic(&self) -> bool {
        use AnsiColor::*;
        matches!(*self, Black | White | BrightBlack | BrightWhite)
    }

    /// Determine whether this ANSI color is bright.
    pub fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get this ANSI color's band.
    pub fn band(&self) -> Band {
        if self.is_bright() {
            Band::HighIntensity
        } else {
            Band::Standard
        }
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

// ====================================================================================================================
// The Embedded 6x6x6 RGB Cube
// ====================================================================================================================

/// The 6x6x6 RGB cube embedded in 8-bit terminal colors.
///
/// # Examples
///
/// Rust code can create a new embedded RGB color with either
/// [`EmbeddedRgb::new`] or [`EmbeddedRgb as
/// TryFrom<u8>`](struct.EmbeddedRgb.html#impl-TryFrom%3Cu8%3E-for-EmbeddedRgb).
///
/// ```
/// # use prettypalette::termco::EmbeddedRgb;
/// # use prettypalette::error::OutOfBoundsError;
/// let orange = EmbeddedRgb::new(5, 2, 0)?;
/// let orange_too = EmbeddedRgb::try_from(208)?;
/// assert_eq!(orange, orange_too);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// It can access the coordinates with [`EmbeddedRgb as AsRef<[u8;
/// 3]>`](struct.EmbeddedRgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-EmbeddedRgb)
/// or with [`EmbeddedRgb as
/// Index<usize>`](struct.EmbeddedRgb.html#impl-Index%3Cusize%3E-for-EmbeddedRgb)
/// and convert back to the 8-bit index with [`u8 as
/// From<EmbeddedRgb>`](struct.EmbeddedRgb.html#impl-From%3CEmbeddedRgb%3E-for-u8).
/// ```
/// # use prettypalette::termco::EmbeddedRgb;
/// # use prettypalette::error::OutOfBoundsError;
/// let blue = EmbeddedRgb::try_from(75)?;
/// assert_eq!(blue.as_ref(), &[1_u8, 3, 5]);
/// assert_eq!(blue[1], 3);
/// assert_eq!(u8::from(blue), 75);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedRgb([u8; 3]);

impl EmbeddedRgb {
    /// Create a new embedded RGB value from its coordinates.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        if 6 <= r {
            Err(OutOfBoundsError::new(r, 0..=5))
        } else if 6 <= g {
            Err(OutOfBoundsError::new(g, 0..=5))
        } else if 6 <= b {
            Err(OutOfBoundsError::new(b, 0..=5))
        } else {
            Ok(Self([r, g, b]))
        }
    }

    /// Get an iterator over all 216 embedded RGB colors in index order.
    pub fn all() -> impl Iterator<Item = EmbeddedRgb> {
        Band::Cube.range().map(Self::from_cube_index)
    }

    /// Split an index known to lie in `16..=231` into its coordinates.
    const fn from_cube_index(value: u8) -> Self {
        let offset = value - 16;
        Self([offset / 36, (offset % 36) / 6, offset % 6])
    }

    /// Replace the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    pub fn with(&self, index: usize, value: u8) -> Result<Self, OutOfBoundsError> {
        let mut coordinates = self.0;
        coordinates[index] = value;
        let [r, g, b] = coordinates;
        Self::new(r, g, b)
    }
}

impl TryFrom<u8> for EmbeddedRgb {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if Band::of(value) == Band::Cube {
            Ok(Self::from_cube_index(value))
        } else {
            Err(OutOfBoundsError::new(value, 16..=231))
        }
    }
}

impl AsRef<[u8; 3]> for EmbeddedRgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for EmbeddedRgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<EmbeddedRgb> for u8 {
    fn from(value: EmbeddedRgb) -> u8 {
        let [r, g, b] = value.0;
        16 + 36 * r + 6 * g + b
    }
}

// ====================================================================================================================
// Gray Gradient
// ====================================================================================================================

/// The 24-step gray gradient embedded in 8-bit terminal colors.
///
/// ```
/// # use prettypalette::termco::GrayGradient;
/// # use prettypalette::error::OutOfBoundsError;
/// let almost_black = GrayGradient::new(4)?;
/// assert_eq!(u8::from(almost_black), 236);
/// assert_eq!(GrayGradient::all().map(u8::from).last(), Some(255));
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayGradient(u8);

impl GrayGradient {
    /// Instantiate a new gray gradient from its level `0..=23`.
    pub fn new(value: u8) -> Result<Self, OutOfBoundsError> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=23))
        }
    }

    /// Get an iterator over all 24 gray levels, from darkest to lightest.
    pub fn all() -> impl Iterator<Item = GrayGradient> {
        (0..=23).map(Self)
    }
}

impl From<GrayGradient> for u8 {
    fn from(value: GrayGradient) -> u8 {
        232 + value.0
    }
}
