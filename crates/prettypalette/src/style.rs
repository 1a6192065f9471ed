//! Escape-coded swatches.
//!
//! A [`Swatch`] is one cell of palette output: the zero-padded 8-bit index
//! shown either on the colored background or in the colored foreground.
//!
//! ```
//! # use prettypalette::style::{Layer, Swatch};
//! let swatch = Swatch::new(208, Layer::Background);
//! assert_eq!(format!("{}", swatch), "\x1b[48;5;208m  208  \x1b[0m");
//!
//! let swatch = Swatch::new(7, Layer::Foreground);
//! assert_eq!(format!("{}", swatch), "\x1b[38;5;7m  |007|\x1b[0m");
//! ```

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Both layers in display order, i.e., background first.
    pub const DISPLAY_ORDER: [Layer; 2] = [Layer::Background, Layer::Foreground];

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub fn offset(&self) -> u8 {
        match *self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// A palette cell for an 8-bit color on a layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    index: u8,
    layer: Layer,
}

impl Swatch {
    /// Create a new swatch.
    pub fn new(index: u8, layer: Layer) -> Self {
        Self { index, layer }
    }

    /// Get the 8-bit index.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Get the layer.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Write the SGR parameters for this swatch's color.
    fn write_sgr_params(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{};5;{}", 38 + self.layer.offset(), self.index)
    }
}

impl core::fmt::Display for Swatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\x1b[")?;
        self.write_sgr_params(f)?;
        f.write_str("m")?;

        match self.layer {
            Layer::Background => write!(f, "  {:03}  ", self.index)?,
            Layer::Foreground => write!(f, "  |{:03}|", self.index)?,
        }

        f.write_str("\x1b[0m")
    }
}

#[cfg(test)]
mod test {
    use super::{Layer, Swatch};

    #[test]
    fn test_layer() {
        assert_eq!(Layer::DISPLAY_ORDER, [Layer::Background, Layer::Foreground]);
        assert_eq!(Layer::Foreground.offset(), 0);
        assert_eq!(Layer::Background.offset(), 10);
    }

    #[test]
    fn test_swatch() {
        assert_eq!(
            Swatch::new(0, Layer::Background).to_string(),
            "\x1b[48;5;0m  000  \x1b[0m"
        );
        assert_eq!(
            Swatch::new(255, Layer::Foreground).to_string(),
            "\x1b[38;5;255m  |255|\x1b[0m"
        );
        assert_eq!(Swatch::new(42, Layer::Foreground).index(), 42);
    }
}
